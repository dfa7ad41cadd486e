//! Admin Module
//!
//! Password-based admin authentication backed by a [`PasswordStore`].
//!
//! # Endpoints
//! - `GET /api/admin/status` - Whether a password has been set
//! - `POST /api/admin/setup` - Set the first password
//! - `POST /api/admin/login` - Check a password

pub mod handlers;
mod store;

use std::sync::Arc;

use tracing::warn;

use crate::error::{ProxyError, Result};

pub use store::{InMemoryPasswordStore, PasswordStore};

pub const MIN_PASSWORD_LEN: usize = 8;
/// bcrypt only reads the first 72 bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

// == Admin Auth ==
/// Hashes and verifies admin passwords against the store.
///
/// bcrypt work runs on the blocking pool.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    store: Arc<dyn PasswordStore>,
    bcrypt_cost: u32,
}

impl AdminAuth {
    /// `bcrypt_cost` is clamped to bcrypt's valid range.
    pub fn new(store: Arc<dyn PasswordStore>, bcrypt_cost: u32) -> Self {
        Self {
            store,
            bcrypt_cost: bcrypt_cost.clamp(4, 31),
        }
    }

    pub fn is_configured(&self) -> Result<bool> {
        Ok(self.store.load_hash()?.is_some())
    }

    /// Sets the first admin password. Fails with `Conflict` once one exists.
    pub async fn setup(&self, password: String) -> Result<()> {
        validate_new_password(&password)?;
        if self.is_configured()? {
            return Err(ProxyError::Conflict(
                "admin password is already set".to_string(),
            ));
        }

        let cost = self.bcrypt_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| ProxyError::Internal(format!("hash task failed: {e}")))?
            .map_err(|e| ProxyError::Internal(format!("bcrypt hash: {e}")))?;

        if !self.store.store_hash_if_absent(hash)? {
            return Err(ProxyError::Conflict(
                "admin password is already set".to_string(),
            ));
        }
        Ok(())
    }

    /// Checks `password` against the stored hash.
    pub async fn login(&self, password: String) -> Result<()> {
        let hash = self
            .store
            .load_hash()?
            .ok_or_else(|| ProxyError::Unauthorized("admin password is not set".to_string()))?;

        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| ProxyError::Internal(format!("verify task failed: {e}")))?
            .map_err(|e| ProxyError::Internal(format!("bcrypt verify: {e}")))?;

        if matches {
            Ok(())
        } else {
            warn!("admin login rejected");
            Err(ProxyError::Unauthorized("invalid password".to_string()))
        }
    }
}

fn validate_new_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ProxyError::InvalidRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ProxyError::InvalidRequest(format!(
            "password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    Ok(())
}
