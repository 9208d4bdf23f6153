use async_trait::async_trait;
use db::{DBService, models::user::User, services::AuthService};
use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sqlx(#[from] SqlxError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait Deployment: Clone + Send + Sync + 'static {
    async fn new() -> Result<Self, DeploymentError>;

    fn db(&self) -> &DBService;

    /// Seed the initial admin account when the users table is empty, so a
    /// fresh install has someone who can reach the dashboard. Credentials
    /// come from `ADMIN_USERNAME` / `ADMIN_PASSWORD`.
    async fn seed_admin_user(&self) -> Result<(), DeploymentError> {
        let pool = &self.db().pool;
        if User::count(pool).await? > 0 {
            return Ok(());
        }

        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = match std::env::var("ADMIN_PASSWORD") {
            Ok(p) if !p.is_empty() => p,
            _ => {
                tracing::warn!(
                    "No users exist and ADMIN_PASSWORD is not set; skipping admin seed"
                );
                return Ok(());
            }
        };

        let password_hash = AuthService::hash_password(&password)
            .map_err(|e| DeploymentError::Other(anyhow::anyhow!(e)))?;
        let user = User::create(pool, &username, "", &password_hash, true).await?;
        tracing::info!("Seeded admin user '{}' ({})", user.username, user.id);
        Ok(())
    }
}
