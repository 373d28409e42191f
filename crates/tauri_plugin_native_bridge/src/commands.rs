//! Typed Tauri command handlers delegating to the bridge.

use native_host::validate_key;
use tauri::{AppHandle, Manager, Runtime, State, Theme, WebviewWindow};

use crate::NativeBridgeState;

fn checked_key(key: &str) -> Result<(), String> {
    validate_key(key).map_err(|err| err.to_string())
}

fn webview<R: Runtime>(app: &AppHandle<R>, label: &str) -> Result<WebviewWindow<R>, String> {
    app.get_webview_window(label)
        .ok_or_else(|| format!("no webview window labelled `{label}`"))
}

/// Writes a preference value.
#[tauri::command]
pub(crate) fn set_user_default(
    state: State<'_, NativeBridgeState>,
    key: String,
    value: String,
) -> Result<(), String> {
    checked_key(&key)?;
    state.bridge.set_user_default(&key, &value);
    Ok(())
}

/// Reads a preference value; `null` when unset.
#[tauri::command]
pub(crate) fn get_user_default(
    state: State<'_, NativeBridgeState>,
    key: String,
) -> Result<Option<String>, String> {
    checked_key(&key)?;
    Ok(state.bridge.get_user_default(&key))
}

/// Stores a secret; `true` when the store reported success.
#[tauri::command]
pub(crate) fn save_keychain(
    state: State<'_, NativeBridgeState>,
    key: String,
    value: String,
) -> Result<bool, String> {
    checked_key(&key)?;
    Ok(state.bridge.save_keychain(&key, &value).is_success())
}

/// Loads a secret; `null` when absent or inaccessible.
#[tauri::command]
pub(crate) fn load_keychain(
    state: State<'_, NativeBridgeState>,
    key: String,
) -> Result<Option<String>, String> {
    checked_key(&key)?;
    Ok(state.bridge.load_keychain(&key))
}

/// Shows the loading overlay over the webview window `label`.
#[tauri::command]
pub(crate) fn show_hud<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, NativeBridgeState>,
    label: String,
) -> Result<(), String> {
    webview(&app, &label)?;
    let handle = state.handles.handle_for(&label);
    state.bridge.show_hud(handle);
    Ok(())
}

/// Hides the loading overlay over the webview window `label`.
#[tauri::command]
pub(crate) fn close_hud<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, NativeBridgeState>,
    label: String,
) -> Result<(), String> {
    webview(&app, &label)?;
    let handle = state.handles.handle_for(&label);
    state.bridge.close_hud(handle);
    Ok(())
}

/// Forces a window theme; `null` follows the system theme.
#[tauri::command]
pub(crate) fn set_theme<R: Runtime>(
    app: AppHandle<R>,
    label: String,
    theme: Option<Theme>,
) -> Result<(), String> {
    webview(&app, &label)?
        .set_theme(theme)
        .map_err(|err| format!("failed to set theme on `{label}`: {err}"))
}
