//! Text marshalling across the C boundary.
//!
//! Inputs are borrowed for the duration of a call and never retained. Outputs are freshly
//! allocated `CString`s whose ownership moves to the caller, who must hand them back to
//! [`native_bridge_free_string`].

use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Borrows a NUL-terminated UTF-8 string. Returns `None` for NULL or invalid UTF-8.
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated buffer that stays valid for `'a`.
pub(crate) unsafe fn borrow_str<'a>(ptr: *const c_char, what: &str) -> Option<&'a str> {
    if ptr.is_null() {
        log::debug!("{what} is null");
        return None;
    }
    // SAFETY: non-null, and the caller guarantees NUL termination and validity.
    match unsafe { CStr::from_ptr(ptr) }.to_str() {
        Ok(text) => Some(text),
        Err(err) => {
            log::warn!("{what} is not valid UTF-8: {err}");
            None
        }
    }
}

/// Moves `value` into a caller-owned C string; NULL for `None` or interior NUL bytes.
pub(crate) fn into_owned_ptr(value: Option<String>) -> *mut c_char {
    let Some(value) = value else {
        return ptr::null_mut();
    };
    match CString::new(value) {
        Ok(text) => text.into_raw(),
        Err(err) => {
            log::warn!(
                "value contains an interior NUL at byte {}; returning null",
                err.nul_position()
            );
            ptr::null_mut()
        }
    }
}

/// Releases a string returned by this library.
///
/// Passing NULL is a no-op.
///
/// # Safety
/// `ptr` must be NULL or a pointer previously returned by this library that has not been freed.
/// Strings allocated by any other allocator must not be passed here.
#[no_mangle]
pub unsafe extern "C" fn native_bridge_free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: the caller guarantees `ptr` came from `CString::into_raw` in this library.
    drop(unsafe { CString::from_raw(ptr) });
}
