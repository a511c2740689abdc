//! Region extraction and import FFI functions.

use crate::automaton::{self, Coordinate};
use crate::state::State;

/// Number of bytes a `[min, max)` region spans before clamping.
fn region_len(min_x: i32, min_y: i32, min_z: i32, max_x: i32, max_y: i32, max_z: i32) -> usize {
    let span = |lo: i32, hi: i32| (hi as i64 - lo as i64).max(0) as usize;
    span(min_x, max_x) * span(min_y, max_y) * span(min_z, max_z)
}

/// Extracts a rectangular region of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// This matches the layout expected by `va_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y) * (max_z - min_z)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn va_extract_region(
    ptr: *const State,
    out_buf: *mut u8,
    min_x: i32,
    min_y: i32,
    min_z: i32,
    max_x: i32,
    max_y: i32,
    max_z: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let len = region_len(min_x, min_y, min_z, max_x, max_y, max_z);
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);

    match automaton::extract_region(
        state.grid(),
        buf_slice,
        Coordinate::new(min_x, min_y, min_z),
        Coordinate::new(max_x, max_y, max_z),
    ) {
        Ok(written) => written as u64,
        Err(e) => {
            tracing::warn!(error = %e, "va_extract_region failed");
            0
        }
    }
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected to be in z,y,x order (matching `va_extract_region`).
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y) * (max_z - min_z)` bytes
///
/// # Returns
/// 0 on success, 1 on error.
#[no_mangle]
pub unsafe extern "C" fn va_import_region(
    ptr: *mut State,
    in_buf: *const u8,
    min_x: i32,
    min_y: i32,
    min_z: i32,
    max_x: i32,
    max_y: i32,
    max_z: i32,
) -> i32 {
    if ptr.is_null() || in_buf.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    let len = region_len(min_x, min_y, min_z, max_x, max_y, max_z);
    let buf_slice = std::slice::from_raw_parts(in_buf, len);

    match automaton::import_region(
        state.grid(),
        buf_slice,
        Coordinate::new(min_x, min_y, min_z),
        Coordinate::new(max_x, max_y, max_z),
    ) {
        Ok(grid) => {
            state.replace_grid(grid);
            0
        }
        Err(e) => {
            tracing::warn!(error = %e, "va_import_region failed");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{grid, lifecycle};
    use std::ffi::CString;
    use std::ptr;

    unsafe fn create8() -> *mut State {
        let rule = CString::new("B3S2,3").unwrap();
        lifecycle::va_create(8, 8, 8, rule.as_ptr())
    }

    #[test]
    fn test_extract_region() {
        unsafe {
            let state = create8();
            grid::va_set_cell(state, 2, 2, 2, 1);
            grid::va_set_cell(state, 3, 2, 2, 1);

            let mut buffer = vec![0u8; 64];
            let bytes = va_extract_region(state, buffer.as_mut_ptr(), 2, 2, 2, 6, 6, 6);

            assert_eq!(bytes, 64);
            assert_eq!(buffer[0], 1);
            assert_eq!(buffer[1], 1);
            assert_eq!(buffer[2], 0);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_import_region() {
        unsafe {
            let state = create8();

            let mut buffer = vec![0u8; 64];
            buffer[0] = 1;
            buffer[1] = 1;

            assert_eq!(va_import_region(state, buffer.as_ptr(), 2, 2, 2, 6, 6, 6), 0);
            assert_eq!(grid::va_get_cell(state, 2, 2, 2), 1);
            assert_eq!(grid::va_get_cell(state, 3, 2, 2), 1);
            assert_eq!(grid::va_population(state), 2);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_inverted_region_touches_nothing() {
        unsafe {
            let state = create8();
            let mut buffer = vec![0u8; 8];
            assert_eq!(
                va_extract_region(state, buffer.as_mut_ptr(), 4, 4, 4, 2, 2, 2),
                0
            );
            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let mut buffer = vec![0u8; 64];

            assert_eq!(
                va_extract_region(ptr::null(), buffer.as_mut_ptr(), 0, 0, 0, 4, 4, 4),
                0
            );
            assert_eq!(
                va_import_region(ptr::null_mut(), buffer.as_ptr(), 0, 0, 0, 4, 4, 4),
                1
            );

            let state = create8();
            assert_eq!(
                va_extract_region(state, ptr::null_mut(), 0, 0, 0, 4, 4, 4),
                0
            );
            assert_eq!(va_import_region(state, ptr::null(), 0, 0, 0, 4, 4, 4), 1);
            lifecycle::va_destroy(state);
        }
    }
}
