//! Tauri plugin exposing the native services bridge to webview front ends.
//!
//! Commands are registered under the `native-bridge` plugin name
//! (`plugin:native-bridge|get_user_default`, ...). Preferences and secrets go through the same
//! desktop adapters as the C library; overlays are rendered by the front end in response to
//! [`HUD_EVENT`] while pointer input to the parent window is blocked.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod commands;
mod overlay;

use std::sync::Arc;

use native_bridge::Bridge;
use native_host::HostStrategy;
use native_host_desktop::{desktop_services, BridgeConfig};
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};

pub use overlay::{HudEvent, WindowHandles, HUD_EVENT};

use overlay::TauriOverlayHost;

/// Plugin state shared by every command.
pub struct NativeBridgeState {
    bridge: Bridge,
    handles: WindowHandles,
}

impl NativeBridgeState {
    /// Bridge the commands delegate to.
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// Label/handle mapping used for overlay requests.
    pub fn handles(&self) -> &WindowHandles {
        &self.handles
    }
}

/// Initializes the plugin with configuration from `NATIVE_BRIDGE_CONFIG` or defaults.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    build(None)
}

/// Initializes the plugin with an explicit configuration.
pub fn init_with_config<R: Runtime>(config: BridgeConfig) -> TauriPlugin<R> {
    build(Some(config))
}

fn build<R: Runtime>(config: Option<BridgeConfig>) -> TauriPlugin<R> {
    Builder::new("native-bridge")
        .invoke_handler(tauri::generate_handler![
            commands::set_user_default,
            commands::get_user_default,
            commands::save_keychain,
            commands::load_keychain,
            commands::show_hud,
            commands::close_hud,
            commands::set_theme
        ])
        .setup(move |app, _api| {
            let config = match config {
                Some(config) => config,
                None => BridgeConfig::load(None)?,
            };
            let handles = WindowHandles::default();
            let mut services = desktop_services(&config)?.with_overlay(Arc::new(
                TauriOverlayHost::new(app.clone(), handles.clone()),
            ));
            services.host_strategy = HostStrategy::Tauri;
            log::debug!(
                "native bridge plugin ready (secrets backend: {:?})",
                config.secrets.backend
            );
            app.manage(NativeBridgeState {
                bridge: Bridge::new(services),
                handles,
            });
            Ok(())
        })
        .build()
}
