use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// User row as seen through a valid session. Returned by the session join so
/// callers never touch the password hash.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SessionUser {
    #[sqlx(try_from = "Vec<u8>")]
    pub id: Uuid,
    pub username: String,
    pub is_active: bool,
    pub is_admin: bool,
}

pub struct Session;

impl Session {
    /// Store a new session. Tokens are stored hashed; the raw value only ever
    /// travels in the cookie.
    pub async fn create(
        pool: &SqlitePool,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        let expires = expires_at.format("%Y-%m-%d %H:%M:%S").to_string();
        sqlx::query(
            "INSERT INTO sessions (id, user_id, token_hash, expires_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().as_bytes().as_slice())
        .bind(user_id.as_bytes().as_slice())
        .bind(token_hash)
        .bind(expires)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Resolve the user behind an unexpired session token hash.
    pub async fn find_user(
        pool: &SqlitePool,
        token_hash: &str,
    ) -> Result<Option<SessionUser>, sqlx::Error> {
        sqlx::query_as::<_, SessionUser>(
            "SELECT u.id, u.username, u.is_active, u.is_admin
             FROM sessions s
             JOIN users u ON s.user_id = u.id
             WHERE s.token_hash = ? AND s.expires_at > datetime('now')",
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_token_hash(
        pool: &SqlitePool,
        token_hash: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DBService, models::user::User, services::AuthService};

    #[tokio::test]
    async fn session_round_trip() {
        let pool = DBService::new_with_url("sqlite::memory:")
            .await
            .unwrap()
            .pool;

        let user = User::create(&pool, "admin", "", "x", true).await.unwrap();
        let token = AuthService::generate_session_token();
        let hash = AuthService::hash_session_token(&token);

        Session::create(&pool, user.id, &hash, Utc::now() + chrono::Duration::days(30))
            .await
            .unwrap();

        let found = Session::find_user(&pool, &hash).await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(found.is_admin);

        assert_eq!(Session::delete_by_token_hash(&pool, &hash).await.unwrap(), 1);
        assert!(Session::find_user(&pool, &hash).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_session_is_rejected() {
        let pool = DBService::new_with_url("sqlite::memory:")
            .await
            .unwrap()
            .pool;

        let user = User::create(&pool, "admin", "", "x", true).await.unwrap();
        let hash = AuthService::hash_session_token("stale");

        Session::create(&pool, user.id, &hash, Utc::now() - chrono::Duration::hours(1))
            .await
            .unwrap();

        assert!(Session::find_user(&pool, &hash).await.unwrap().is_none());
    }
}
