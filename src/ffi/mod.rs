//! C FFI layer for external renderers and host loops.
//!
//! This module exports C ABI functions for use from LuaJIT FFI or any C host.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

use std::ffi::{c_char, CStr};

pub mod grid;
pub mod lifecycle;
pub mod region;

pub use grid::{va_get_cell, va_get_dimension, va_population, va_set_cell, va_step};
pub use lifecycle::{
    va_create, va_create_from_config, va_destroy, va_get_generation, va_tick_interval_ms,
};
pub use region::{va_extract_region, va_import_region};

/// Borrow a NUL-terminated UTF-8 string, or None if null or not UTF-8.
///
/// # Safety
/// - `ptr` must be null or point to a valid NUL-terminated string
unsafe fn str_arg<'a>(ptr: *const c_char, what: &str) -> Option<&'a str> {
    if ptr.is_null() {
        tracing::warn!(what, "null string argument");
        return None;
    }
    match CStr::from_ptr(ptr).to_str() {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(what, error = %e, "string argument is not UTF-8");
            None
        }
    }
}
