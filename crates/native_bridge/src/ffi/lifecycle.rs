//! Version, initialization, and installation probes.

use std::ffi::c_char;
use std::path::Path;

use native_host::SecretStatus;
use native_host_desktop::{desktop_services, BridgeConfig, ConfigError};

use super::guarded;
use super::strings::borrow_str;
use crate::registry;

/// ABI version of the exported surface.
pub const NATIVE_BRIDGE_API_VERSION: u32 = 1;

/// ABI version to coordinate with the embedding host.
#[no_mangle]
pub extern "C" fn native_bridge_api_version() -> u32 {
    NATIVE_BRIDGE_API_VERSION
}

/// Whether a service bundle is installed.
#[no_mangle]
pub extern "C" fn native_bridge_is_installed() -> bool {
    guarded("native_bridge_is_installed", false, registry::is_installed)
}

fn init_status(err: &ConfigError) -> SecretStatus {
    match err {
        ConfigError::Read { .. } => SecretStatus::Io,
        ConfigError::Parse { .. } => SecretStatus::Param,
        ConfigError::NoDataDir => SecretStatus::NotAvailable,
        ConfigError::Store(store) => store.status(),
    }
}

/// Builds the desktop service bundle and installs it.
///
/// `config_path` names a TOML config file; NULL falls back to `NATIVE_BRIDGE_CONFIG` and then to
/// built-in defaults. An overlay backend registered earlier is carried over to the new bundle.
///
/// # Returns
/// `0` on success, `-36` when the config file cannot be read, `-50` when it is invalid, and
/// `-25291` when no per-user data directory exists.
///
/// # Safety
/// `config_path` must be NULL or point to a NUL-terminated string valid for the duration of the
/// call.
#[no_mangle]
pub unsafe extern "C" fn native_bridge_init(config_path: *const c_char) -> i32 {
    guarded("native_bridge_init", SecretStatus::Internal.code(), || {
        let path = if config_path.is_null() {
            None
        } else {
            // SAFETY: forwarded caller contract.
            match unsafe { borrow_str(config_path, "config_path") } {
                Some(path) => Some(Path::new(path)),
                None => return SecretStatus::Param.code(),
            }
        };

        let services = match BridgeConfig::load(path).and_then(|config| desktop_services(&config))
        {
            Ok(services) => services,
            Err(err) => {
                log::error!("native_bridge_init failed: {err}");
                return init_status(&err).code();
            }
        };

        let previous = registry::current();
        registry::install(services);
        if let Some(previous) = previous {
            if previous.services().capabilities.overlay.is_available() {
                registry::install_overlay(previous.services().overlay.clone());
            }
        }
        SecretStatus::Success.code()
    })
}
