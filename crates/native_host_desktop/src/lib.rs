//! Desktop adapters for the native services bridge.
//!
//! Preferences persist to a JSON map file in the per-user data directory, secrets go to the
//! platform keyring, and [`desktop_services`] composes both into a
//! [`native_host::NativeServices`] bundle from a [`BridgeConfig`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod prefs;
pub mod secrets;
mod services;

pub use config::{
    BridgeConfig, ConfigError, ConfigLoader, PreferencesConfig, SecretBackend, SecretsConfig,
    CONFIG_PATH_ENV, DATA_DIR_ENV,
};
pub use prefs::{FilePreferencesStore, DEFAULT_PREFS_FILE};
pub use secrets::{KeyringSecretStore, DEFAULT_SECRET_SERVICE};
pub use services::desktop_services;
