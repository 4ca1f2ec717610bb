//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::{BootstrapConfig, SecurityConfig};
use crate::db::Store;
use crate::domain::RecordError;
use crate::models::admin::Admin;
use crate::services::auth_service::AuthService;

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
    bootstrap: BootstrapConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig, bootstrap: BootstrapConfig) -> Self {
        Self {
            store,
            security,
            bootstrap,
        }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<Admin, RecordError> {
        let username = username.trim();

        let is_valid = self
            .store
            .verify_admin_credentials(username, password, &self.security)
            .await?;

        metrics::counter!(
            "admin_login_attempts_total",
            "outcome" => if is_valid { "success" } else { "failure" }
        )
        .increment(1);

        if !is_valid {
            warn!(username = %username, "Failed admin login");
            return Err(RecordError::Authentication);
        }

        let admin = self
            .store
            .get_admin_by_username(username)
            .await?
            .ok_or(RecordError::Authentication)?;

        info!(username = %admin.username, "Admin logged in");
        Ok(admin)
    }

    async fn create_admin(&self, username: &str, password: &str) -> Result<Admin, RecordError> {
        self.store
            .create_admin_with_config(username, password, &self.security)
            .await
    }

    async fn get_admin(&self, username: &str) -> Result<Admin, RecordError> {
        self.store
            .get_admin_by_username(username)
            .await?
            .ok_or_else(|| RecordError::not_found(format!("Admin '{username}'")))
    }

    async fn ensure_bootstrap_admin(&self) -> Result<bool, RecordError> {
        if !self.bootstrap.enabled || self.store.count_admins().await? > 0 {
            return Ok(false);
        }

        match self
            .create_admin(
                &self.bootstrap.admin_username,
                &self.bootstrap.admin_password,
            )
            .await
        {
            Ok(admin) => {
                warn!(
                    username = %admin.username,
                    "Created bootstrap admin from config; change its password or disable [bootstrap]"
                );
                Ok(true)
            }
            // Another process seeded it first.
            Err(RecordError::Duplicate(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
