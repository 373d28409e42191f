//! Preference store entry points.

use std::ffi::c_char;
use std::ptr;

use super::strings::{borrow_str, into_owned_ptr};
use super::{guarded, with_bridge};

/// Writes `value` under `key` in the preferences store, overwriting any existing value.
///
/// No status is reported; NULL or non-UTF-8 arguments make the call a no-op.
///
/// # Safety
/// `key` and `value` must each be NULL or point to a NUL-terminated string that stays valid for
/// the duration of the call. Neither pointer is retained.
#[no_mangle]
pub unsafe extern "C" fn set_user_default(key: *const c_char, value: *const c_char) {
    guarded("set_user_default", (), || {
        // SAFETY: forwarded caller contract.
        let (Some(key), Some(value)) =
            (unsafe { borrow_str(key, "key") }, unsafe { borrow_str(value, "value") })
        else {
            return;
        };
        with_bridge("set_user_default", (), |bridge| {
            bridge.set_user_default(key, value);
        });
    });
}

/// Reads the value stored under `key`.
///
/// Returns NULL when the key is unset, and a non-NULL empty string when the key holds an empty
/// value. The caller owns the result and must release it with `native_bridge_free_string`.
///
/// # Safety
/// `key` must be NULL or point to a NUL-terminated string valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn get_user_default(key: *const c_char) -> *mut c_char {
    guarded("get_user_default", ptr::null_mut(), || {
        // SAFETY: forwarded caller contract.
        let Some(key) = (unsafe { borrow_str(key, "key") }) else {
            return ptr::null_mut();
        };
        into_owned_ptr(with_bridge("get_user_default", None, |bridge| {
            bridge.get_user_default(key)
        }))
    })
}

/// Returns whether `key` holds a value, including an empty one.
///
/// # Safety
/// `key` must be NULL or point to a NUL-terminated string valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn has_user_default(key: *const c_char) -> bool {
    guarded("has_user_default", false, || {
        // SAFETY: forwarded caller contract.
        let Some(key) = (unsafe { borrow_str(key, "key") }) else {
            return false;
        };
        with_bridge("has_user_default", false, |bridge| {
            bridge.has_user_default(key)
        })
    })
}

/// Deletes `key` from the preferences store. Removing an unset key is a no-op.
///
/// # Safety
/// `key` must be NULL or point to a NUL-terminated string valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn remove_user_default(key: *const c_char) {
    guarded("remove_user_default", (), || {
        // SAFETY: forwarded caller contract.
        let Some(key) = (unsafe { borrow_str(key, "key") }) else {
            return;
        };
        with_bridge("remove_user_default", (), |bridge| {
            bridge.remove_user_default(key);
        });
    });
}
