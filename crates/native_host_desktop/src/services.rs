//! Desktop service bundle composition.

use std::sync::Arc;

use native_host::{
    CapabilityStatus, HostStrategy, MemorySecretStore, NativeServices, NoopOverlayHost,
    SecretStore,
};

use crate::config::{BridgeConfig, ConfigError, SecretBackend};
use crate::prefs::FilePreferencesStore;
use crate::secrets::KeyringSecretStore;

/// Builds the desktop service bundle described by `config`.
///
/// Overlays are owned by the embedding host's windowing system, so the bundle starts with a no-op
/// overlay host and the overlay capability marked unavailable until the host injects one.
pub fn desktop_services(config: &BridgeConfig) -> Result<NativeServices, ConfigError> {
    let prefs_dir = config.preferences_dir()?;
    let preferences =
        FilePreferencesStore::with_file_name(&prefs_dir, &config.preferences.file_name)?;
    log::info!(
        "desktop preferences at {}, secrets via {:?}",
        preferences.file().display(),
        config.secrets.backend
    );

    let secrets: Arc<dyn SecretStore> = match config.secrets.backend {
        SecretBackend::Keyring => Arc::new(KeyringSecretStore::new(&config.secrets.service)),
        SecretBackend::Memory => Arc::new(MemorySecretStore::default()),
    };

    let mut services = NativeServices::new(
        Arc::new(preferences),
        secrets,
        Arc::new(NoopOverlayHost),
        HostStrategy::Desktop,
    );
    services.capabilities.overlay = CapabilityStatus::Unavailable;
    Ok(services)
}
