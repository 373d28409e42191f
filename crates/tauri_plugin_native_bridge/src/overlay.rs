//! Overlay host backed by Tauri webview windows.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use native_host::{OverlayError, OverlayHost, WindowHandle};
use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager, Runtime};

/// Event emitted to a window when its overlay is shown or hidden.
pub const HUD_EVENT: &str = "native-bridge://hud";

/// Payload of [`HUD_EVENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudEvent {
    /// Handle of the window the overlay belongs to.
    pub handle: WindowHandle,
    /// Whether the overlay is now visible.
    pub visible: bool,
}

#[derive(Debug, Default)]
struct HandleTable {
    by_label: HashMap<String, WindowHandle>,
    next: WindowHandle,
}

/// Stable mapping between webview labels and the integer handles the bridge forwards.
///
/// Handles are assigned on first use, start at `1`, and are never reused within a process.
#[derive(Debug, Clone, Default)]
pub struct WindowHandles {
    inner: Arc<Mutex<HandleTable>>,
}

impl WindowHandles {
    /// Returns the handle for `label`, assigning a new one on first use.
    pub fn handle_for(&self, label: &str) -> WindowHandle {
        let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = table.by_label.get(label) {
            return *handle;
        }
        table.next += 1;
        let handle = table.next;
        table.by_label.insert(label.to_string(), handle);
        handle
    }

    /// Returns the label a handle was assigned to.
    pub fn label_for(&self, handle: WindowHandle) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .by_label
            .iter()
            .find_map(|(label, assigned)| (*assigned == handle).then(|| label.clone()))
    }
}

/// Overlay host that blocks pointer input on the parent window and asks its front end to render
/// the loading overlay through [`HUD_EVENT`].
pub(crate) struct TauriOverlayHost<R: Runtime> {
    app: AppHandle<R>,
    handles: WindowHandles,
}

impl<R: Runtime> TauriOverlayHost<R> {
    pub(crate) fn new(app: AppHandle<R>, handles: WindowHandles) -> Self {
        Self { app, handles }
    }

    fn toggle(&self, handle: WindowHandle, visible: bool) -> Result<(), OverlayError> {
        let label = self
            .handles
            .label_for(handle)
            .ok_or(OverlayError::UnknownWindow(handle))?;
        let window = self
            .app
            .get_webview_window(&label)
            .ok_or(OverlayError::UnknownWindow(handle))?;
        window
            .set_ignore_cursor_events(visible)
            .map_err(|err| OverlayError::Backend(format!("pointer toggle failed: {err}")))?;
        self.app
            .emit_to(label.as_str(), HUD_EVENT, HudEvent { handle, visible })
            .map_err(|err| OverlayError::Backend(format!("hud event dispatch failed: {err}")))
    }
}

impl<R: Runtime> OverlayHost for TauriOverlayHost<R> {
    fn show_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError> {
        self.toggle(handle, true)
    }

    fn close_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError> {
        self.toggle(handle, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn handles_are_stable_per_label_and_start_at_one() {
        let handles = WindowHandles::default();
        assert_eq!(handles.handle_for("main"), 1);
        assert_eq!(handles.handle_for("settings"), 2);
        assert_eq!(handles.handle_for("main"), 1);
        assert_eq!(handles.label_for(2).as_deref(), Some("settings"));
        assert_eq!(handles.label_for(3), None);
    }

    #[test]
    fn clones_share_assignments() {
        let handles = WindowHandles::default();
        let shared = handles.clone();
        let main = handles.handle_for("main");
        assert_eq!(shared.label_for(main).as_deref(), Some("main"));
    }

    #[test]
    fn hud_event_serializes_for_the_front_end() {
        let payload = serde_json::to_value(HudEvent {
            handle: 4,
            visible: true,
        })
        .expect("serialize hud event");
        assert_eq!(payload, serde_json::json!({ "handle": 4, "visible": true }));
    }
}
