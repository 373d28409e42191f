//! Typed host-service contracts shared by the C bridge, desktop adapters, and the Tauri plugin.
//!
//! This crate is the API-first boundary for the native services the bridge delegates to: a
//! per-user preferences store, a secure secret store, and a heads-up overlay host. Concrete
//! desktop adapters live in `native_host_desktop`; the C ABI surface lives in `native_bridge`.
//! Every service here is stateless from the caller's point of view and is injected as a
//! [`NativeServices`] bundle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod host;
pub mod overlay;
pub mod storage;

pub use error::{OverlayError, StoreError};
pub use host::{CapabilityStatus, HostCapabilities, HostStrategy, NativeServices};
pub use overlay::{MemoryOverlayHost, NoopOverlayHost, OverlayHost, WindowHandle};
pub use storage::prefs::{MemoryPreferencesStore, NoopPreferencesStore, PreferencesStore};
pub use storage::secrets::{
    MemorySecretStore, NoopSecretStore, SecretStatus, SecretStore, StoreAvailability,
};
pub use storage::validate_key;
