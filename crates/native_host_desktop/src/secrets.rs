//! OS credential store adapter.

use keyring::Entry;
use native_host::{validate_key, SecretStore, StoreError};

/// Default keyring service name entries are filed under.
pub const DEFAULT_SECRET_SERVICE: &str = "native-bridge";

fn map_keyring_error(err: keyring::Error) -> StoreError {
    match err {
        keyring::Error::NoStorageAccess(inner) => {
            log::debug!("keyring storage not accessible: {inner}");
            StoreError::Locked
        }
        keyring::Error::PlatformFailure(inner) => StoreError::Backend(inner.to_string()),
        keyring::Error::BadEncoding(_) => {
            StoreError::Backend("stored secret is not valid UTF-8".to_string())
        }
        other => StoreError::Backend(other.to_string()),
    }
}

#[derive(Debug, Clone)]
/// Secret store backed by the platform keyring (Keychain, Credential Manager, Secret Service).
///
/// Each key becomes the account of a generic credential filed under the configured service name.
pub struct KeyringSecretStore {
    service: String,
}

impl KeyringSecretStore {
    /// Creates a store filing entries under `service`.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Service name entries are filed under.
    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<Entry, StoreError> {
        validate_key(key)?;
        Entry::new(&self.service, key).map_err(map_keyring_error)
    }
}

impl Default for KeyringSecretStore {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_SERVICE)
    }
}

impl SecretStore for KeyringSecretStore {
    fn save_secret(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entry(key)?
            .set_password(value)
            .map_err(map_keyring_error)
    }

    fn load_secret(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(map_keyring_error(err)),
        }
    }

    fn delete_secret(&self, key: &str) -> Result<(), StoreError> {
        match self.entry(key)?.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(map_keyring_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use native_host::SecretStatus;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn storage_access_failures_map_to_locked() {
        let err = map_keyring_error(keyring::Error::NoStorageAccess(Box::new(io::Error::other(
            "keychain locked",
        ))));
        assert_eq!(err, StoreError::Locked);
        assert_eq!(err.status(), SecretStatus::InteractionNotAllowed);
    }

    #[test]
    fn platform_failures_keep_their_message() {
        let err = map_keyring_error(keyring::Error::PlatformFailure(Box::new(io::Error::other(
            "dbus down",
        ))));
        assert_eq!(err, StoreError::Backend("dbus down".to_string()));
    }

    #[test]
    fn empty_keys_are_rejected_before_reaching_the_keyring() {
        let store = KeyringSecretStore::default();
        assert_eq!(store.save_secret("", "v"), Err(StoreError::EmptyKey));
        assert_eq!(store.load_secret(""), Err(StoreError::EmptyKey));
        assert_eq!(store.delete_secret(""), Err(StoreError::EmptyKey));
        assert_eq!(store.service(), DEFAULT_SECRET_SERVICE);
    }
}
