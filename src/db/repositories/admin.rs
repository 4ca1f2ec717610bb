use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use tokio::task;
use tracing::info;

use super::map_insert_error;
use crate::config::SecurityConfig;
use crate::constants::limits::MAX_USERNAME_LEN;
use crate::domain::RecordError;
use crate::entities::admins;
use crate::models::admin::Admin;

pub struct AdminRepository {
    conn: DatabaseConnection,
}

impl AdminRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<Admin>, RecordError> {
        let admin = admins::Entity::find()
            .filter(admins::Column::Username.eq(username))
            .one(&self.conn)
            .await?;

        Ok(admin.map(Admin::from))
    }

    pub async fn count(&self) -> Result<u64, RecordError> {
        Ok(admins::Entity::find().count(&self.conn).await?)
    }

    /// Create an admin, hashing the password before it reaches the database.
    pub async fn create(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<Admin, RecordError> {
        let username = username.trim().to_string();

        if username.is_empty() {
            return Err(RecordError::validation("Username is required"));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(RecordError::validation(format!(
                "Username must be {MAX_USERNAME_LEN} characters or less"
            )));
        }
        if password.is_empty() {
            return Err(RecordError::validation("Password is required"));
        }

        let password = password.to_string();
        let config = config.clone();
        let password_hash =
            task::spawn_blocking(move || hash_password(&password, &config)).await??;

        let now = chrono::Utc::now().to_rfc3339();

        let txn = self.conn.begin().await?;

        let model = admins::ActiveModel {
            username: Set(username.clone()),
            password_hash: Set(password_hash),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| map_insert_error(e, || format!("Admin '{username}'")))?;

        txn.commit().await?;

        info!(admin_id = model.id, username = %model.username, "Admin created");
        Ok(Admin::from(model))
    }

    /// Verify password for an admin.
    /// Note: This uses `spawn_blocking` because Argon2 hashing is CPU-intensive
    /// and would block the async runtime if run directly.
    ///
    /// Unknown usernames are checked against a dummy hash built with the same
    /// `config` params as real accounts, so both outcomes cost the same
    /// Argon2 verification.
    pub async fn verify_password(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<bool, RecordError> {
        let admin = admins::Entity::find()
            .filter(admins::Column::Username.eq(username))
            .one(&self.conn)
            .await?;

        let known = admin.is_some();
        let stored_hash = admin.map(|a| a.password_hash);
        let password = password.to_string();
        let config = config.clone();

        let matched = task::spawn_blocking(move || {
            let password_hash = match stored_hash {
                Some(hash) => hash,
                None => dummy_hash(&config)?,
            };

            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| RecordError::Internal(format!("Invalid password hash format: {e}")))?;

            Ok::<bool, RecordError>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await??;

        Ok(known && matched)
    }
}

/// A throwaway hash per Argon2 parameter set, computed once.
fn dummy_hash(config: &SecurityConfig) -> Result<String, RecordError> {
    static DUMMIES: OnceLock<Mutex<HashMap<(u32, u32, u32), String>>> = OnceLock::new();

    let key = (
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
    );
    let mut dummies = DUMMIES
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(hash) = dummies.get(&key) {
        return Ok(hash.clone());
    }

    let hash = hash_password("maricheck-unknown-admin", config)?;
    dummies.insert(key, hash.clone());
    Ok(hash)
}

/// Hash a password using Argon2id with the configured params.
pub fn hash_password(password: &str, config: &SecurityConfig) -> Result<String, RecordError> {
    let salt = SaltString::generate(&mut OsRng);

    let params = Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None, // output length (use default)
    )
    .map_err(|e| RecordError::Internal(format!("Invalid Argon2 params: {e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| RecordError::Internal(format!("Failed to hash password: {e}")))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> SecurityConfig {
        SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
        }
    }

    // `$argon2id$v=19$m=..,t=..,p=..$salt$hash`
    fn phc_params(hash: &str) -> &str {
        hash.split('$').nth(3).unwrap()
    }

    #[test]
    fn hash_is_salted_phc_string() {
        let a = hash_password("secret", &fast()).unwrap();
        let b = hash_password("secret", &fast()).unwrap();
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
        assert!(!a.contains("secret"));
    }

    #[test]
    fn hash_respects_configured_params() {
        let hash = hash_password("secret", &fast()).unwrap();
        assert!(hash.contains("m=1024,t=1,p=1"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default().verify_password(b"secret", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"secreT", &parsed).is_err());
    }

    #[test]
    fn dummy_hash_uses_same_params_as_real_accounts() {
        for config in [fast(), SecurityConfig::default()] {
            let real = hash_password("secret", &config).unwrap();
            let dummy = dummy_hash(&config).unwrap();
            assert_eq!(phc_params(&dummy), phc_params(&real));
        }

        let default_dummy = dummy_hash(&SecurityConfig::default()).unwrap();
        assert!(default_dummy.contains("m=8192,t=3,p=1"));
        assert_eq!(dummy_hash(&fast()).unwrap(), dummy_hash(&fast()).unwrap());
    }
}
