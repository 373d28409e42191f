//! Secure secret storage contracts, status codes, and adapters.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use crate::{storage::validate_key, StoreError};

/// Status code returned by the secret-save path across the C boundary.
///
/// Values follow the platform credential API's status numbering so callers that already
/// interpret those codes keep working. `Success` is the only zero value.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretStatus {
    /// The operation completed.
    Success = 0,
    /// The operation is not implemented by the active store.
    Unimplemented = -4,
    /// An I/O error occurred in the backing store.
    Io = -36,
    /// An argument was null, empty, or not valid text.
    Param = -50,
    /// No secret store is available.
    NotAvailable = -25291,
    /// The caller is not authorized to access the entry.
    AuthFailed = -25293,
    /// The entry already exists.
    DuplicateItem = -25299,
    /// The entry does not exist.
    ItemNotFound = -25300,
    /// The store is locked and user interaction is not allowed.
    InteractionNotAllowed = -25308,
    /// Unclassified backend failure.
    Internal = -26276,
}

impl SecretStatus {
    /// Raw integer code.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Whether the status signals success.
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<Result<(), StoreError>> for SecretStatus {
    fn from(value: Result<(), StoreError>) -> Self {
        match value {
            Ok(()) => Self::Success,
            Err(err) => err.status(),
        }
    }
}

/// Host service for sensitive credential values.
pub trait SecretStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous secret.
    fn save_secret(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Loads the secret stored under `key`; `Ok(None)` when it does not exist.
    fn load_secret(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Deletes the secret under `key`. Deleting an absent secret succeeds.
    fn delete_secret(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Secret store for hosts without a credential service; every write reports unavailability.
pub struct NoopSecretStore;

impl SecretStore for NoopSecretStore {
    fn save_secret(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("no secret store on this host".into()))
    }

    fn load_secret(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn delete_secret(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("no secret store on this host".into()))
    }
}

/// Simulated access state of a [`MemorySecretStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreAvailability {
    /// Reads and writes succeed.
    #[default]
    Unlocked,
    /// Every access fails with [`StoreError::Locked`].
    Locked,
    /// Every access fails with [`StoreError::PermissionDenied`].
    Denied,
}

#[derive(Debug, Default)]
struct MemorySecrets {
    entries: HashMap<String, String>,
    availability: StoreAvailability,
}

#[derive(Debug, Clone, Default)]
/// In-memory secret store with a switchable lock state.
pub struct MemorySecretStore {
    inner: Arc<Mutex<MemorySecrets>>,
}

impl MemorySecretStore {
    /// Switches the simulated access state. Entries are kept while locked.
    pub fn set_availability(&self, availability: StoreAvailability) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .availability = availability;
    }

    fn with_access<T>(
        &self,
        key: &str,
        op: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StoreError> {
        validate_key(key)?;
        let mut secrets = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match secrets.availability {
            StoreAvailability::Unlocked => Ok(op(&mut secrets.entries)),
            StoreAvailability::Locked => Err(StoreError::Locked),
            StoreAvailability::Denied => Err(StoreError::PermissionDenied(format!(
                "access to `{key}` denied"
            ))),
        }
    }
}

impl SecretStore for MemorySecretStore {
    fn save_secret(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.with_access(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn load_secret(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_access(key, |entries| entries.get(key).cloned())
    }

    fn delete_secret(&self, key: &str) -> Result<(), StoreError> {
        self.with_access(key, |entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(SecretStatus::Success.code(), 0);
        assert_eq!(SecretStatus::Param.code(), -50);
        assert_eq!(SecretStatus::ItemNotFound.code(), -25300);
        assert_eq!(SecretStatus::InteractionNotAllowed.code(), -25308);
        assert!(SecretStatus::Success.is_success());
        assert!(!SecretStatus::AuthFailed.is_success());
    }

    #[test]
    fn memory_secret_store_round_trip_and_delete() {
        let store = MemorySecretStore::default();
        store.save_secret("api.token", "s3cr3t").expect("save");
        assert_eq!(
            store.load_secret("api.token").expect("load"),
            Some("s3cr3t".to_string())
        );
        store.delete_secret("api.token").expect("delete");
        assert_eq!(store.load_secret("api.token").expect("load"), None);
        store.delete_secret("api.token").expect("delete absent");
    }

    #[test]
    fn locked_store_rejects_access_and_keeps_entries() {
        let store = MemorySecretStore::default();
        store.save_secret("k", "v").expect("save");

        store.set_availability(StoreAvailability::Locked);
        assert_eq!(store.save_secret("k", "other"), Err(StoreError::Locked));
        assert_eq!(store.load_secret("k"), Err(StoreError::Locked));

        store.set_availability(StoreAvailability::Unlocked);
        assert_eq!(store.load_secret("k").expect("load"), Some("v".to_string()));
    }

    #[test]
    fn denied_store_maps_to_auth_failed() {
        let store = MemorySecretStore::default();
        store.set_availability(StoreAvailability::Denied);
        let status = SecretStatus::from(store.save_secret("k", "v"));
        assert_eq!(status, SecretStatus::AuthFailed);
    }

    #[test]
    fn noop_secret_store_reports_unavailable_writes() {
        let store = NoopSecretStore;
        assert_eq!(
            SecretStatus::from(store.save_secret("k", "v")),
            SecretStatus::NotAvailable
        );
        assert_eq!(store.load_secret("k").expect("load"), None);
    }
}
