//! Typed bridge over an injected service bundle.

use std::sync::Arc;

use native_host::{NativeServices, OverlayHost, SecretStatus, WindowHandle};

/// Stateless façade forwarding each operation to one host service.
///
/// The bridge keeps no state of its own: every call is a single synchronous delegation to the
/// injected [`NativeServices`]. Failures on paths without a status channel are logged and
/// swallowed; secret writes report a [`SecretStatus`].
#[derive(Debug, Clone)]
pub struct Bridge {
    services: NativeServices,
}

impl Bridge {
    /// Creates a bridge over `services`.
    pub fn new(services: NativeServices) -> Self {
        Self { services }
    }

    /// Injected services.
    pub fn services(&self) -> &NativeServices {
        &self.services
    }

    /// Returns a bridge whose overlay host is replaced by `overlay`.
    #[must_use]
    pub fn with_overlay(self, overlay: Arc<dyn OverlayHost>) -> Self {
        Self {
            services: self.services.with_overlay(overlay),
        }
    }

    /// Writes `value` under `key`, replacing any existing value.
    pub fn set_user_default(&self, key: &str, value: &str) {
        if !self.services.capabilities.preferences.is_available() {
            log::debug!("set_user_default `{key}` ignored: preferences unavailable");
            return;
        }
        if let Err(err) = self.services.preferences.save_pref(key, value) {
            log::warn!("set_user_default `{key}` failed: {err}");
        }
    }

    /// Reads the value stored under `key`; `None` when unset or unreadable.
    pub fn get_user_default(&self, key: &str) -> Option<String> {
        if !self.services.capabilities.preferences.is_available() {
            return None;
        }
        self.services
            .preferences
            .load_pref(key)
            .unwrap_or_else(|err| {
                log::warn!("get_user_default `{key}` failed: {err}");
                None
            })
    }

    /// Whether a value, possibly empty, is stored under `key`.
    pub fn has_user_default(&self, key: &str) -> bool {
        self.get_user_default(key).is_some()
    }

    /// Deletes `key` from the preferences store.
    pub fn remove_user_default(&self, key: &str) {
        if !self.services.capabilities.preferences.is_available() {
            return;
        }
        if let Err(err) = self.services.preferences.delete_pref(key) {
            log::warn!("remove_user_default `{key}` failed: {err}");
        }
    }

    /// Stores a secret and reports the store's status.
    pub fn save_keychain(&self, key: &str, value: &str) -> SecretStatus {
        if !self.services.capabilities.secrets.is_available() {
            return SecretStatus::NotAvailable;
        }
        let status = SecretStatus::from(self.services.secrets.save_secret(key, value));
        if !status.is_success() {
            log::warn!("save_keychain `{key}` failed with status {}", status.code());
        }
        status
    }

    /// Loads a secret; `None` when absent, locked, or denied.
    pub fn load_keychain(&self, key: &str) -> Option<String> {
        if !self.services.capabilities.secrets.is_available() {
            return None;
        }
        self.services.secrets.load_secret(key).unwrap_or_else(|err| {
            log::warn!("load_keychain `{key}` failed: {err}");
            None
        })
    }

    /// Deletes a secret; deleting an absent secret succeeds.
    pub fn delete_keychain(&self, key: &str) -> SecretStatus {
        if !self.services.capabilities.secrets.is_available() {
            return SecretStatus::NotAvailable;
        }
        SecretStatus::from(self.services.secrets.delete_secret(key))
    }

    /// Asks the overlay host to show the loading overlay for `handle`.
    pub fn show_hud(&self, handle: WindowHandle) {
        if !self.services.capabilities.overlay.is_available() {
            log::debug!("show_hud {handle} ignored: overlay unavailable");
            return;
        }
        if let Err(err) = self.services.overlay.show_overlay(handle) {
            log::debug!("show_hud {handle}: {err}");
        }
    }

    /// Asks the overlay host to hide the loading overlay for `handle`.
    pub fn close_hud(&self, handle: WindowHandle) {
        if !self.services.capabilities.overlay.is_available() {
            return;
        }
        if let Err(err) = self.services.overlay.close_overlay(handle) {
            log::debug!("close_hud {handle}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use native_host::{
        HostCapabilities, HostStrategy, MemoryOverlayHost, MemoryPreferencesStore,
        MemorySecretStore, StoreAvailability,
    };
    use pretty_assertions::assert_eq;

    struct Fixture {
        bridge: Bridge,
        secrets: MemorySecretStore,
        overlay: MemoryOverlayHost,
    }

    fn fixture() -> Fixture {
        let secrets = MemorySecretStore::default();
        let overlay = MemoryOverlayHost::with_windows([1, 2]);
        let bridge = Bridge::new(NativeServices::new(
            Arc::new(MemoryPreferencesStore::default()),
            Arc::new(secrets.clone()),
            Arc::new(overlay.clone()),
            HostStrategy::InMemory,
        ));
        Fixture {
            bridge,
            secrets,
            overlay,
        }
    }

    #[test]
    fn preferences_round_trip_with_last_write_wins() {
        let Fixture { bridge, .. } = fixture();
        assert_eq!(bridge.get_user_default("volume"), None);
        bridge.set_user_default("volume", "3");
        bridge.set_user_default("volume", "7");
        assert_eq!(bridge.get_user_default("volume"), Some("7".to_string()));

        bridge.set_user_default("empty", "");
        assert!(bridge.has_user_default("empty"));
        bridge.remove_user_default("empty");
        assert!(!bridge.has_user_default("empty"));
    }

    #[test]
    fn empty_key_is_swallowed_on_preference_paths() {
        let Fixture { bridge, .. } = fixture();
        bridge.set_user_default("", "x");
        assert_eq!(bridge.get_user_default(""), None);
    }

    #[test]
    fn secrets_round_trip_and_report_lock_status() {
        let Fixture {
            bridge, secrets, ..
        } = fixture();
        assert_eq!(bridge.save_keychain("token", "abc"), SecretStatus::Success);
        assert_eq!(bridge.load_keychain("token"), Some("abc".to_string()));
        assert_eq!(bridge.load_keychain("unset"), None);

        secrets.set_availability(StoreAvailability::Locked);
        assert_eq!(
            bridge.save_keychain("token", "new"),
            SecretStatus::InteractionNotAllowed
        );
        assert_eq!(bridge.load_keychain("token"), None);

        secrets.set_availability(StoreAvailability::Denied);
        assert_eq!(bridge.save_keychain("token", "new"), SecretStatus::AuthFailed);

        secrets.set_availability(StoreAvailability::Unlocked);
        assert_eq!(bridge.delete_keychain("token"), SecretStatus::Success);
        assert_eq!(bridge.delete_keychain("token"), SecretStatus::Success);
        assert_eq!(bridge.save_keychain("", "v"), SecretStatus::Param);
    }

    #[test]
    fn overlay_show_close_and_invalid_handles() {
        let Fixture {
            bridge, overlay, ..
        } = fixture();
        bridge.show_hud(1);
        assert_eq!(overlay.visible_handles(), vec![1]);
        bridge.close_hud(1);
        assert!(overlay.visible_handles().is_empty());

        bridge.close_hud(2);
        bridge.show_hud(404);
        bridge.close_hud(404);
        assert!(overlay.visible_handles().is_empty());
    }

    #[test]
    fn unavailable_capabilities_short_circuit() {
        let Fixture {
            bridge, overlay, ..
        } = fixture();
        let services = bridge
            .services()
            .clone()
            .with_capabilities(HostCapabilities::none());
        let bridge = Bridge::new(services);

        bridge.set_user_default("k", "v");
        assert_eq!(bridge.get_user_default("k"), None);
        assert_eq!(bridge.save_keychain("k", "v"), SecretStatus::NotAvailable);
        assert_eq!(bridge.delete_keychain("k"), SecretStatus::NotAvailable);
        bridge.show_hud(1);
        assert!(!overlay.is_visible(1));
    }

    #[test]
    fn with_overlay_swaps_only_the_overlay_host() {
        let Fixture { bridge, .. } = fixture();
        bridge.set_user_default("kept", "yes");
        let replacement = MemoryOverlayHost::default();
        let bridge = bridge.with_overlay(Arc::new(replacement.clone()));

        bridge.show_hud(55);
        assert!(replacement.is_visible(55));
        assert_eq!(bridge.get_user_default("kept"), Some("yes".to_string()));
    }
}
