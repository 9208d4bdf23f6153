use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    #[sqlx(try_from = "Vec<u8>")]
    pub id: Uuid,
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTestimonial {
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub sort_order: Option<i64>,
}

impl Testimonial {
    pub async fn find_active(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT id, author, company, quote, sort_order, is_active, created_at
             FROM testimonials
             WHERE is_active = 1
             ORDER BY sort_order ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateTestimonial) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        let sort_order = data.sort_order.unwrap_or(0);
        sqlx::query(
            "INSERT INTO testimonials (id, author, company, quote, sort_order)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.as_bytes().as_slice())
        .bind(&data.author)
        .bind(&data.company)
        .bind(&data.quote)
        .bind(sort_order)
        .execute(pool)
        .await?;

        sqlx::query_as::<_, Testimonial>(
            "SELECT id, author, company, quote, sort_order, is_active, created_at
             FROM testimonials
             WHERE id = ?",
        )
        .bind(id.as_bytes().as_slice())
        .fetch_one(pool)
        .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }
}
