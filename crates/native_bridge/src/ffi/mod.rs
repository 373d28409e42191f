//! C ABI entry points.
//!
//! Every function is panic-safe via `catch_unwind`, checks pointers before dereferencing them,
//! and delegates to the installed [`Bridge`](crate::Bridge). Calls made before a bundle is
//! installed return NULL, report `SecretStatus::NotAvailable`, or do nothing.

use std::panic::{catch_unwind, UnwindSafe};

use crate::{registry, Bridge};

mod lifecycle;
mod overlay;
mod preferences;
mod secrets;
mod strings;

pub use lifecycle::{
    native_bridge_api_version, native_bridge_init, native_bridge_is_installed,
    NATIVE_BRIDGE_API_VERSION,
};
pub use overlay::{close_hud, hud_show, native_bridge_register_overlay, OverlayCallback};
pub use preferences::{get_user_default, has_user_default, remove_user_default, set_user_default};
pub use secrets::{delete_keychain, load_keychain, save_keychain};
pub use strings::native_bridge_free_string;

/// Runs `body` without letting a panic cross the boundary.
fn guarded<T>(op: &str, fallback: T, body: impl FnOnce() -> T + UnwindSafe) -> T {
    catch_unwind(body).unwrap_or_else(|_| {
        log::error!("{op} panicked; returning fallback");
        fallback
    })
}

/// Runs `body` against the installed bridge, or returns `fallback` when none is installed.
fn with_bridge<T>(op: &str, fallback: T, body: impl FnOnce(&Bridge) -> T) -> T {
    match registry::current() {
        Some(bridge) => body(&bridge),
        None => {
            log::warn!("{op} called before native services were installed");
            fallback
        }
    }
}
