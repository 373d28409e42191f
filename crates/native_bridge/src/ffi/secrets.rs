//! Secret store entry points.

use std::ffi::c_char;
use std::ptr;

use native_host::SecretStatus;

use super::strings::{borrow_str, into_owned_ptr};
use super::{guarded, with_bridge};

/// Stores `value` under `key` in the secure credential store.
///
/// # Returns
/// - `0` on success
/// - `-50` when an argument is NULL, empty, or not UTF-8
/// - `-25291` when no credential store is installed
/// - `-25308` when the store is locked, `-25293` when access is denied
/// - another non-zero platform status for any other failure
///
/// # Safety
/// `key` and `value` must each be NULL or point to a NUL-terminated string valid for the
/// duration of the call. Neither pointer is retained.
#[no_mangle]
pub unsafe extern "C" fn save_keychain(key: *const c_char, value: *const c_char) -> i32 {
    guarded("save_keychain", SecretStatus::Internal.code(), || {
        // SAFETY: forwarded caller contract.
        let (Some(key), Some(value)) =
            (unsafe { borrow_str(key, "key") }, unsafe { borrow_str(value, "value") })
        else {
            return SecretStatus::Param.code();
        };
        with_bridge("save_keychain", SecretStatus::NotAvailable, |bridge| {
            bridge.save_keychain(key, value)
        })
        .code()
    })
}

/// Loads the secret stored under `key`.
///
/// Returns NULL when the secret is absent or cannot be read (locked, denied). The caller owns
/// the result and must release it with `native_bridge_free_string`.
///
/// # Safety
/// `key` must be NULL or point to a NUL-terminated string valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn load_keychain(key: *const c_char) -> *mut c_char {
    guarded("load_keychain", ptr::null_mut(), || {
        // SAFETY: forwarded caller contract.
        let Some(key) = (unsafe { borrow_str(key, "key") }) else {
            return ptr::null_mut();
        };
        into_owned_ptr(with_bridge("load_keychain", None, |bridge| {
            bridge.load_keychain(key)
        }))
    })
}

/// Deletes the secret stored under `key`. Deleting an absent secret returns `0`.
///
/// Status codes follow [`save_keychain`].
///
/// # Safety
/// `key` must be NULL or point to a NUL-terminated string valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn delete_keychain(key: *const c_char) -> i32 {
    guarded("delete_keychain", SecretStatus::Internal.code(), || {
        // SAFETY: forwarded caller contract.
        let Some(key) = (unsafe { borrow_str(key, "key") }) else {
            return SecretStatus::Param.code();
        };
        with_bridge("delete_keychain", SecretStatus::NotAvailable, |bridge| {
            bridge.delete_keychain(key)
        })
        .code()
    })
}
