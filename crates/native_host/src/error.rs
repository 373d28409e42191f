//! Typed failures reported by host services.

use crate::overlay::WindowHandle;
use crate::storage::secrets::SecretStatus;

/// Failure reported by a preferences or secret store.
///
/// Variants are coarse on purpose: the bridge only needs enough detail to pick a status code for
/// the secret-save path and a log line everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The key was empty.
    #[error("store key must not be empty")]
    EmptyKey,
    /// The store exists but is locked for the current session.
    #[error("store is locked")]
    Locked,
    /// The current process is not allowed to access the entry.
    #[error("access denied: {0}")]
    PermissionDenied(String),
    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Backing file or device I/O failed.
    #[error("{0}")]
    Io(String),
    /// Any other backend-reported failure.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Maps the failure onto the status code returned across the C boundary.
    pub const fn status(&self) -> SecretStatus {
        match self {
            Self::EmptyKey => SecretStatus::Param,
            Self::Locked => SecretStatus::InteractionNotAllowed,
            Self::PermissionDenied(_) => SecretStatus::AuthFailed,
            Self::Unavailable(_) => SecretStatus::NotAvailable,
            Self::Io(_) => SecretStatus::Io,
            Self::Backend(_) => SecretStatus::Internal,
        }
    }
}

/// Failure reported by an overlay host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// No live window corresponds to the handle.
    #[error("no window for handle {0}")]
    UnknownWindow(WindowHandle),
    /// The windowing backend rejected the request.
    #[error("overlay backend failure: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_stable_statuses() {
        assert_eq!(StoreError::EmptyKey.status(), SecretStatus::Param);
        assert_eq!(
            StoreError::Locked.status(),
            SecretStatus::InteractionNotAllowed
        );
        assert_eq!(
            StoreError::PermissionDenied("acl".into()).status(),
            SecretStatus::AuthFailed
        );
        assert_eq!(
            StoreError::Unavailable("no daemon".into()).status(),
            SecretStatus::NotAvailable
        );
        assert_eq!(StoreError::Io("disk".into()).status(), SecretStatus::Io);
        assert_eq!(
            StoreError::Backend("boom".into()).status(),
            SecretStatus::Internal
        );
    }

    #[test]
    fn overlay_error_names_the_handle() {
        assert_eq!(
            OverlayError::UnknownWindow(42).to_string(),
            "no window for handle 42"
        );
    }
}
