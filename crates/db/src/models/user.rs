use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    #[sqlx(try_from = "Vec<u8>")]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub last_login_at: Option<String>,
    pub created_at: String,
}

impl User {
    pub async fn find_active_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, is_active, is_admin, last_login_at, created_at
             FROM users
             WHERE username = ? AND is_active = 1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password_hash: &str,
        is_admin: bool,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO users (id, username, email, password_hash, is_admin)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.as_bytes().as_slice())
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(is_admin)
        .execute(pool)
        .await?;

        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, is_active, is_admin, last_login_at, created_at
             FROM users
             WHERE id = ?",
        )
        .bind(id.as_bytes().as_slice())
        .fetch_one(pool)
        .await
    }

    pub async fn touch_last_login(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = datetime('now') WHERE id = ?")
            .bind(id.as_bytes().as_slice())
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
