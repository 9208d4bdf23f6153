use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceOffering {
    #[sqlx(try_from = "Vec<u8>")]
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub icon: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceOffering {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
}

impl ServiceOffering {
    pub async fn find_active(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, ServiceOffering>(
            "SELECT id, slug, title, summary, icon, sort_order, is_active, created_at
             FROM services
             WHERE is_active = 1
             ORDER BY sort_order ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateServiceOffering,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        let sort_order = data.sort_order.unwrap_or(0);
        sqlx::query(
            "INSERT INTO services (id, slug, title, summary, icon, sort_order)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id.as_bytes().as_slice())
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.icon)
        .bind(sort_order)
        .execute(pool)
        .await?;

        sqlx::query_as::<_, ServiceOffering>(
            "SELECT id, slug, title, summary, icon, sort_order, is_active, created_at
             FROM services
             WHERE id = ?",
        )
        .bind(id.as_bytes().as_slice())
        .fetch_one(pool)
        .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DBService;

    #[tokio::test]
    async fn active_listing_is_ordered() {
        let pool = DBService::new_with_url("sqlite::memory:")
            .await
            .unwrap()
            .pool;

        for (slug, order) in [("consulting", 2), ("design", 0), ("engineering", 1)] {
            ServiceOffering::create(
                &pool,
                &CreateServiceOffering {
                    slug: slug.to_string(),
                    title: slug.to_string(),
                    summary: String::new(),
                    icon: None,
                    sort_order: Some(order),
                },
            )
            .await
            .unwrap();
        }

        let services = ServiceOffering::find_active(&pool).await.unwrap();
        let slugs: Vec<&str> = services.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["design", "engineering", "consulting"]);
    }
}
