//! Domain service for admin authentication and account management.

use crate::domain::RecordError;
use crate::models::admin::Admin;

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and returns the admin.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Authentication`] if login fails.
    async fn login(&self, username: &str, password: &str) -> Result<Admin, RecordError>;

    /// Creates an admin with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Duplicate`] if the username is taken.
    async fn create_admin(&self, username: &str, password: &str) -> Result<Admin, RecordError>;

    async fn get_admin(&self, username: &str) -> Result<Admin, RecordError>;

    /// Creates the configured bootstrap admin when no admin exists yet.
    /// Returns whether an account was created.
    async fn ensure_bootstrap_admin(&self) -> Result<bool, RecordError>;
}
