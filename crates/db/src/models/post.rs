use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    #[sqlx(try_from = "Vec<u8>")]
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub is_published: bool,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub is_published: bool,
}

impl Post {
    /// All posts, drafts included, newest first. Admin listing.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, slug, title, excerpt, body, is_published, published_at, created_at, updated_at
             FROM posts
             ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Published posts only, newest first. Public listing.
    pub async fn find_published(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, slug, title, excerpt, body, is_published, published_at, created_at, updated_at
             FROM posts
             WHERE is_published = 1
             ORDER BY published_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_published_by_slug(
        pool: &SqlitePool,
        slug: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, slug, title, excerpt, body, is_published, published_at, created_at, updated_at
             FROM posts
             WHERE slug = ? AND is_published = 1",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreatePost) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        let published_at = data.is_published.then(|| {
            chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        });
        sqlx::query(
            "INSERT INTO posts (id, slug, title, excerpt, body, is_published, published_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.as_bytes().as_slice())
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.excerpt)
        .bind(&data.body)
        .bind(data.is_published)
        .bind(&published_at)
        .execute(pool)
        .await?;

        sqlx::query_as::<_, Post>(
            "SELECT id, slug, title, excerpt, body, is_published, published_at, created_at, updated_at
             FROM posts
             WHERE id = ?",
        )
        .bind(id.as_bytes().as_slice())
        .fetch_one(pool)
        .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DBService;

    async fn test_pool() -> SqlitePool {
        DBService::new_with_url("sqlite::memory:")
            .await
            .unwrap()
            .pool
    }

    #[tokio::test]
    async fn published_listing_excludes_drafts() {
        let pool = test_pool().await;

        Post::create(
            &pool,
            &CreatePost {
                slug: "launch".to_string(),
                title: "Launch".to_string(),
                excerpt: None,
                body: "We launched.".to_string(),
                is_published: true,
            },
        )
        .await
        .unwrap();
        Post::create(
            &pool,
            &CreatePost {
                slug: "draft".to_string(),
                title: "Draft".to_string(),
                excerpt: None,
                body: "Not yet.".to_string(),
                is_published: false,
            },
        )
        .await
        .unwrap();

        let published = Post::find_published(&pool).await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].slug, "launch");

        let all = Post::find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(Post::count(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn slug_lookup_respects_publication() {
        let pool = test_pool().await;

        Post::create(
            &pool,
            &CreatePost {
                slug: "hidden".to_string(),
                title: "Hidden".to_string(),
                excerpt: None,
                body: String::new(),
                is_published: false,
            },
        )
        .await
        .unwrap();

        assert!(
            Post::find_published_by_slug(&pool, "hidden")
                .await
                .unwrap()
                .is_none()
        );
    }
}
