//! Heads-up overlay host contracts and adapters.

use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex, PoisonError},
};

use crate::OverlayError;

/// Opaque host window number the overlay is attached to.
///
/// The bridge never owns or validates a handle; it only forwards it to the [`OverlayHost`].
pub type WindowHandle = isize;

/// Host windowing service that shows and hides the loading overlay for a window.
pub trait OverlayHost: Send + Sync {
    /// Shows the overlay for `handle`. Showing an already visible overlay replaces it.
    fn show_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError>;

    /// Hides the overlay for `handle`. Hiding an overlay that was never shown is a no-op.
    fn close_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Overlay host for targets without a windowing system.
pub struct NoopOverlayHost;

impl OverlayHost for NoopOverlayHost {
    fn show_overlay(&self, _handle: WindowHandle) -> Result<(), OverlayError> {
        Ok(())
    }

    fn close_overlay(&self, _handle: WindowHandle) -> Result<(), OverlayError> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct OverlayState {
    windows: Option<BTreeSet<WindowHandle>>,
    visible: BTreeSet<WindowHandle>,
}

#[derive(Debug, Clone, Default)]
/// In-memory overlay host that records which handles currently show an overlay.
///
/// By default every handle is accepted. [`MemoryOverlayHost::with_windows`] restricts the host
/// to a fixed window set so unknown handles are reported as [`OverlayError::UnknownWindow`].
pub struct MemoryOverlayHost {
    inner: Arc<Mutex<OverlayState>>,
}

impl MemoryOverlayHost {
    /// Creates a host that only knows the given windows.
    pub fn with_windows(windows: impl IntoIterator<Item = WindowHandle>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(OverlayState {
                windows: Some(windows.into_iter().collect()),
                visible: BTreeSet::new(),
            })),
        }
    }

    /// Whether an overlay is visible for `handle`.
    pub fn is_visible(&self, handle: WindowHandle) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .visible
            .contains(&handle)
    }

    /// Handles with a visible overlay, in ascending order.
    pub fn visible_handles(&self) -> Vec<WindowHandle> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .visible
            .iter()
            .copied()
            .collect()
    }
}

impl OverlayState {
    fn check_known(&self, handle: WindowHandle) -> Result<(), OverlayError> {
        match &self.windows {
            Some(windows) if !windows.contains(&handle) => {
                Err(OverlayError::UnknownWindow(handle))
            }
            _ => Ok(()),
        }
    }
}

impl OverlayHost for MemoryOverlayHost {
    fn show_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError> {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        state.check_known(handle)?;
        state.visible.insert(handle);
        Ok(())
    }

    fn close_overlay(&self, handle: WindowHandle) -> Result<(), OverlayError> {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        state.check_known(handle)?;
        state.visible.remove(&handle);
        Ok(())
    }
}
