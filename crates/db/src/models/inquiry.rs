use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// Contact-form submission. Created from the public site, read from the
/// admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inquiry {
    #[sqlx(try_from = "Vec<u8>")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Inquiry {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Inquiry>(
            "SELECT id, name, email, message, created_at
             FROM inquiries
             ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateInquiry) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO inquiries (id, name, email, message) VALUES (?, ?, ?, ?)")
            .bind(id.as_bytes().as_slice())
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.message)
            .execute(pool)
            .await?;

        sqlx::query_as::<_, Inquiry>(
            "SELECT id, name, email, message, created_at FROM inquiries WHERE id = ?",
        )
        .bind(id.as_bytes().as_slice())
        .fetch_one(pool)
        .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inquiries")
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DBService;

    #[tokio::test]
    async fn create_then_list() {
        let pool = DBService::new_with_url("sqlite::memory:")
            .await
            .unwrap()
            .pool;

        let created = Inquiry::create(
            &pool,
            &CreateInquiry {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            },
        )
        .await
        .unwrap();

        let all = Inquiry::find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].email, "ada@example.com");
    }
}
