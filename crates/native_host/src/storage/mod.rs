//! Preference and secret store contracts plus their in-memory adapters.

use crate::StoreError;

pub mod prefs;
pub mod secrets;

/// Rejects keys the bridge contract leaves undefined.
///
/// Empty keys are refused by every adapter in this workspace instead of being forwarded to a host
/// store with unspecified behavior.
///
/// # Errors
///
/// Returns [`StoreError::EmptyKey`] when `key` is empty.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        Err(StoreError::EmptyKey)
    } else {
        Ok(())
    }
}
