//! C-linkage bridge from plugin runtimes to native user services.
//!
//! The exported functions read and write a per-user preferences store, save and load secrets in
//! the platform credential store, and show or close a loading overlay over a host window. Each
//! call is a single synchronous delegation to a [`native_host::NativeServices`] bundle that the
//! embedding host installs through [`install`] or `native_bridge_init`.
//!
//! Ownership across the boundary:
//!
//! - text arguments are borrowed for the call only and never retained;
//! - text results are allocated here and owned by the caller, who releases them with
//!   `native_bridge_free_string`.
//!
//! The published C declarations live in `include/native_bridge.h`.
//!
//! ```rust
//! use native_bridge::Bridge;
//! use native_host::NativeServices;
//!
//! let bridge = Bridge::new(NativeServices::in_memory());
//! bridge.set_user_default("theme", "dark");
//! assert_eq!(bridge.get_user_default("theme").as_deref(), Some("dark"));
//! assert!(bridge.save_keychain("token", "s3cr3t").is_success());
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod ffi;
mod registry;

pub use bridge::Bridge;
pub use registry::{current, install, install_overlay, is_installed, uninstall};
