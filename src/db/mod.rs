use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;
use crate::domain::{CrewId, RecordError};
use crate::models::admin::Admin;
use crate::models::crew::{CrewMember, CrewRegistration, CrewStats};

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
            if !tokio::fs::try_exists(path_str).await.unwrap_or(false) {
                tokio::fs::File::create(path_str)
                    .await
                    .with_context(|| format!("Failed to create database file {path_str}"))?;
            }
        }

        // Every pooled connection to `:memory:` would see its own empty database.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn crew_repo(&self) -> repositories::crew::CrewRepository {
        repositories::crew::CrewRepository::new(self.conn.clone())
    }

    fn admin_repo(&self) -> repositories::admin::AdminRepository {
        repositories::admin::AdminRepository::new(self.conn.clone())
    }

    // ========== Crew Members ==========

    pub async fn create_crew_member(
        &self,
        registration: &CrewRegistration,
    ) -> Result<CrewMember, RecordError> {
        self.crew_repo().create(registration).await
    }

    pub async fn get_crew_member(&self, id: CrewId) -> Result<Option<CrewMember>, RecordError> {
        self.crew_repo().get(id).await
    }

    pub async fn get_crew_member_by_passport(
        &self,
        passport: &str,
    ) -> Result<Option<CrewMember>, RecordError> {
        self.crew_repo().get_by_passport(passport).await
    }

    pub async fn list_crew_members(&self) -> Result<Vec<CrewMember>, RecordError> {
        self.crew_repo().list().await
    }

    pub async fn advance_status(&self, id: CrewId) -> Result<CrewMember, RecordError> {
        self.crew_repo().advance(id).await
    }

    pub async fn crew_stats(&self) -> Result<CrewStats, RecordError> {
        self.crew_repo().stats().await
    }

    // ========== Admins ==========

    pub async fn create_admin_with_config(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<Admin, RecordError> {
        self.admin_repo()
            .create(username, password, config)
            .await
    }

    pub async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>, RecordError> {
        self.admin_repo().get_by_username(username).await
    }

    pub async fn verify_admin_credentials(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<bool, RecordError> {
        self.admin_repo()
            .verify_password(username, password, config)
            .await
    }

    pub async fn count_admins(&self) -> Result<u64, RecordError> {
        self.admin_repo().count().await
    }
}
