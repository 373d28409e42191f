//! Process-level slot holding the bundle the C entry points delegate to.
//!
//! The C surface has no context parameter, so the embedding host installs a [`NativeServices`]
//! bundle once and every entry point reads it. The bridge itself stays stateless; this slot is
//! the only composition root.

use std::sync::{Arc, PoisonError, RwLock};

use native_host::{NativeServices, OverlayHost};

use crate::Bridge;

static INSTALLED: RwLock<Option<Bridge>> = RwLock::new(None);

/// Installs `services`, returning the previously installed bridge.
pub fn install(services: NativeServices) -> Option<Bridge> {
    log::info!(
        "installing native services ({})",
        services.host_strategy.as_str()
    );
    INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(Bridge::new(services))
}

/// Removes the installed bridge.
pub fn uninstall() -> Option<Bridge> {
    INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// Whether a bundle is installed.
pub fn is_installed() -> bool {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Snapshot of the installed bridge.
///
/// Callers receive a clone so no lock is held while host services run.
pub fn current() -> Option<Bridge> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the overlay host of the installed bridge. Returns `false` when nothing is installed.
pub fn install_overlay(overlay: Arc<dyn OverlayHost>) -> bool {
    let mut slot = INSTALLED.write().unwrap_or_else(PoisonError::into_inner);
    match slot.take() {
        Some(bridge) => {
            *slot = Some(bridge.with_overlay(overlay));
            true
        }
        None => false,
    }
}
