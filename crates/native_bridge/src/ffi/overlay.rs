//! Heads-up overlay entry points and host callback injection.

use std::sync::Arc;

use native_host::{OverlayError, OverlayHost, SecretStatus, WindowHandle};

use super::{guarded, with_bridge};
use crate::registry;

/// Host callback receiving the window number an overlay request targets.
pub type OverlayCallback = extern "C" fn(window_number: isize);

/// Overlay host that forwards requests to callbacks registered by the embedding host.
#[derive(Debug, Clone, Copy)]
struct CallbackOverlayHost {
    show: OverlayCallback,
    close: OverlayCallback,
}

impl OverlayHost for CallbackOverlayHost {
    fn show_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError> {
        (self.show)(handle);
        Ok(())
    }

    fn close_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError> {
        (self.close)(handle);
        Ok(())
    }
}

/// Registers the host's windowing callbacks as the overlay backend of the installed bundle.
///
/// Returns `0` on success, `-50` when either callback is NULL, and `-25291` when no bundle is
/// installed yet.
#[no_mangle]
pub extern "C" fn native_bridge_register_overlay(
    show: Option<OverlayCallback>,
    close: Option<OverlayCallback>,
) -> i32 {
    guarded("native_bridge_register_overlay", SecretStatus::Internal.code(), || {
        let (Some(show), Some(close)) = (show, close) else {
            return SecretStatus::Param.code();
        };
        if registry::install_overlay(Arc::new(CallbackOverlayHost { show, close })) {
            SecretStatus::Success.code()
        } else {
            log::warn!("overlay callbacks registered before native services were installed");
            SecretStatus::NotAvailable.code()
        }
    })
}

/// Shows the loading overlay attached to `window_number`.
///
/// The handle is forwarded untouched; unknown handles are a host-defined no-op.
#[no_mangle]
pub extern "C" fn hud_show(window_number: isize) {
    guarded("hud_show", (), || {
        with_bridge("hud_show", (), |bridge| bridge.show_hud(window_number));
    });
}

/// Hides the loading overlay attached to `window_number`.
///
/// Closing an overlay that was never shown is a no-op.
#[no_mangle]
pub extern "C" fn close_hud(window_number: isize) {
    guarded("close_hud", (), || {
        with_bridge("close_hud", (), |bridge| bridge.close_hud(window_number));
    });
}
