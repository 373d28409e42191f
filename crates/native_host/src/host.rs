//! Service bundle and capability models injected into the bridge.

use std::sync::Arc;

use crate::{
    MemoryOverlayHost, MemoryPreferencesStore, MemorySecretStore, NoopOverlayHost,
    NoopPreferencesStore, NoopSecretStore, OverlayHost, PreferencesStore, SecretStore,
};

/// Stable host strategy selected when the service bundle was composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// File-backed preferences with the OS credential store.
    Desktop,
    /// Services composed inside a Tauri application.
    Tauri,
    /// Process-local in-memory services.
    InMemory,
    /// Placeholder services for unsupported targets.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tauri => "tauri",
            Self::InMemory => "in-memory",
            Self::Stub => "stub",
        }
    }
}

/// Host availability state for one capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// The capability is backed by a real service.
    Available,
    /// The capability is not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Capability snapshot for the three bridged service domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Preference store availability.
    pub preferences: CapabilityStatus,
    /// Secret store availability.
    pub secrets: CapabilityStatus,
    /// Overlay window availability.
    pub overlay: CapabilityStatus,
}

impl HostCapabilities {
    /// Every domain available.
    pub const fn all() -> Self {
        Self {
            preferences: CapabilityStatus::Available,
            secrets: CapabilityStatus::Available,
            overlay: CapabilityStatus::Available,
        }
    }

    /// No domain available.
    pub const fn none() -> Self {
        Self {
            preferences: CapabilityStatus::Unavailable,
            secrets: CapabilityStatus::Unavailable,
            overlay: CapabilityStatus::Unavailable,
        }
    }
}

/// Host service bundle injected into the bridge.
///
/// All environment-specific service selection happens before the bundle reaches the bridge, so
/// the bridge itself stays stateless and can be exercised with in-memory services.
#[derive(Clone)]
pub struct NativeServices {
    /// User-scoped preference store.
    pub preferences: Arc<dyn PreferencesStore>,
    /// Secure credential store.
    pub secrets: Arc<dyn SecretStore>,
    /// Heads-up overlay host.
    pub overlay: Arc<dyn OverlayHost>,
    /// Availability snapshot for each domain.
    pub capabilities: HostCapabilities,
    /// Strategy that composed this bundle.
    pub host_strategy: HostStrategy,
}

impl NativeServices {
    /// Composes a bundle with every capability marked available.
    pub fn new(
        preferences: Arc<dyn PreferencesStore>,
        secrets: Arc<dyn SecretStore>,
        overlay: Arc<dyn OverlayHost>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            preferences,
            secrets,
            overlay,
            capabilities: HostCapabilities::all(),
            host_strategy,
        }
    }

    /// Placeholder bundle whose capabilities are all unavailable.
    pub fn stub() -> Self {
        Self {
            preferences: Arc::new(NoopPreferencesStore),
            secrets: Arc::new(NoopSecretStore),
            overlay: Arc::new(NoopOverlayHost),
            capabilities: HostCapabilities::none(),
            host_strategy: HostStrategy::Stub,
        }
    }

    /// Fresh in-memory bundle.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryPreferencesStore::default()),
            Arc::new(MemorySecretStore::default()),
            Arc::new(MemoryOverlayHost::default()),
            HostStrategy::InMemory,
        )
    }

    /// Replaces the overlay host and marks the overlay capability as available.
    #[must_use]
    pub fn with_overlay(mut self, overlay: Arc<dyn OverlayHost>) -> Self {
        self.overlay = overlay;
        self.capabilities.overlay = CapabilityStatus::Available;
        self
    }

    /// Overrides the capability snapshot.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

impl std::fmt::Debug for NativeServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeServices")
            .field("capabilities", &self.capabilities)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
