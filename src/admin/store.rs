//! Password Store
//!
//! Persistence seam for the admin password hash.

use std::fmt::Debug;
use std::sync::RwLock;

use crate::error::{ProxyError, Result};

// == Password Store Trait ==
/// Holds at most one admin password hash.
pub trait PasswordStore: Debug + Send + Sync {
    /// Returns the stored hash, if any.
    fn load_hash(&self) -> Result<Option<String>>;

    /// Stores `hash` only if no hash exists yet.
    ///
    /// Returns `false` when a hash was already present.
    fn store_hash_if_absent(&self, hash: String) -> Result<bool>;
}

// == In-Memory Store ==
/// Process-local store, optionally seeded with a hash at startup.
#[derive(Debug, Default)]
pub struct InMemoryPasswordStore {
    hash: RwLock<Option<String>>,
}

impl InMemoryPasswordStore {
    pub fn new(initial_hash: Option<String>) -> Self {
        Self {
            hash: RwLock::new(initial_hash),
        }
    }
}

fn poisoned<E>(_: E) -> ProxyError {
    ProxyError::Internal("password store lock poisoned".to_string())
}

impl PasswordStore for InMemoryPasswordStore {
    fn load_hash(&self) -> Result<Option<String>> {
        Ok(self.hash.read().map_err(poisoned)?.clone())
    }

    fn store_hash_if_absent(&self, hash: String) -> Result<bool> {
        let mut slot = self.hash.write().map_err(poisoned)?;
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(hash);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = InMemoryPasswordStore::default();
        assert_eq!(store.load_hash().unwrap(), None);
    }

    #[test]
    fn test_seeded_store() {
        let store = InMemoryPasswordStore::new(Some("$2b$04$seed".to_string()));
        assert_eq!(store.load_hash().unwrap().as_deref(), Some("$2b$04$seed"));
    }

    #[test]
    fn test_store_only_once() {
        let store = InMemoryPasswordStore::default();
        assert!(store.store_hash_if_absent("first".to_string()).unwrap());
        assert!(!store.store_hash_if_absent("second".to_string()).unwrap());
        assert_eq!(store.load_hash().unwrap().as_deref(), Some("first"));
    }
}
