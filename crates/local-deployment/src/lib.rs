use async_trait::async_trait;
use db::DBService;
use deployment::{Deployment, DeploymentError};

/// Deployment backed by a local SQLite database.
#[derive(Clone)]
pub struct LocalDeployment {
    db: DBService,
}

impl LocalDeployment {
    /// Wrap an existing database service. Used by tests with in-memory pools.
    pub fn from_db(db: DBService) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Deployment for LocalDeployment {
    async fn new() -> Result<Self, DeploymentError> {
        let db = DBService::new().await?;
        Ok(Self { db })
    }

    fn db(&self) -> &DBService {
        &self.db
    }
}
