//! Per-user preference storage contracts and adapters.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use crate::{storage::validate_key, StoreError};

/// Host service for user-scoped preference values stored as text per key.
///
/// Writes overwrite any existing value for the key. Lookups return `Ok(None)` when the key is
/// unset, which keeps "absent" distinct from "present with an empty value".
pub trait PreferencesStore: Send + Sync {
    /// Loads the raw text stored under `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save_pref(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Deleting an unset key succeeds.
    fn delete_pref(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPreferencesStore;

impl PreferencesStore for NoopPreferencesStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same map, so a test can keep one handle while the bridge owns another.
pub struct MemoryPreferencesStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferencesStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferencesStore for MemoryPreferencesStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(key).cloned())
    }

    fn save_pref(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
