//! Cell access, dimension queries, and stepping.

use crate::automaton::Coordinate;
use crate::state::State;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or out-of-bounds coordinate).
#[no_mangle]
pub unsafe extern "C" fn va_set_cell(ptr: *mut State, x: i32, y: i32, z: i32, alive: u8) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    match state.set_cell(Coordinate::new(x, y, z), alive != 0) {
        Ok(()) => 0,
        Err(e) => {
            tracing::warn!(error = %e, "va_set_cell ignored");
            1
        }
    }
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn va_get_cell(ptr: *const State, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    u8::from((*ptr).grid().is_alive(Coordinate::new(x, y, z)))
}

/// Number of live cells in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn va_population(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).grid().population() as u64
}

/// Writes the grid extents into the three out-pointers.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - each out-pointer must be valid for a `u32` write, or null
///
/// # Returns
/// 0 on success, 1 if any pointer is null.
#[no_mangle]
pub unsafe extern "C" fn va_get_dimension(
    ptr: *const State,
    width: *mut u32,
    height: *mut u32,
    length: *mut u32,
) -> i32 {
    if ptr.is_null() || width.is_null() || height.is_null() || length.is_null() {
        return 1;
    }

    let dim = (*ptr).grid().dim();
    *width = dim.width();
    *height = dim.height();
    *length = dim.length();
    0
}

/// Advances the automaton by one generation using the state's rule.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn va_step(ptr: *mut State) {
    if ptr.is_null() {
        return;
    }

    (*ptr).advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ffi::CString;
    use std::ptr;

    unsafe fn create(w: u32, h: u32, l: u32) -> *mut State {
        let rule = CString::new("B3S2,3").unwrap();
        lifecycle::va_create(w, h, l, rule.as_ptr())
    }

    #[test]
    fn test_set_and_get_cell() {
        unsafe {
            let state = create(8, 8, 8);

            assert_eq!(va_set_cell(state, 0, 0, 0, 1), 0);
            assert_eq!(va_get_cell(state, 0, 0, 0), 1);
            assert_eq!(va_population(state), 1);

            assert_eq!(va_set_cell(state, 0, 0, 0, 0), 0);
            assert_eq!(va_get_cell(state, 0, 0, 0), 0);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        unsafe {
            let state = create(4, 4, 4);

            assert_eq!(va_get_cell(state, -1, 0, 0), 0);
            assert_eq!(va_get_cell(state, 4, 0, 0), 0);

            assert_eq!(va_set_cell(state, -1, 0, 0, 1), 1);
            assert_eq!(va_set_cell(state, 4, 0, 0, 1), 1);
            assert_eq!(va_population(state), 0);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_get_dimension() {
        unsafe {
            let state = create(5, 6, 7);
            let (mut w, mut h, mut l) = (0u32, 0u32, 0u32);

            assert_eq!(va_get_dimension(state, &mut w, &mut h, &mut l), 0);
            assert_eq!((w, h, l), (5, 6, 7));
            assert_eq!(va_get_dimension(state, ptr::null_mut(), &mut h, &mut l), 1);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_step() {
        unsafe {
            let state = create(3, 3, 1);

            va_set_cell(state, 0, 1, 0, 1);
            va_set_cell(state, 1, 1, 0, 1);
            va_set_cell(state, 2, 1, 0, 1);

            va_step(state);

            assert_eq!(lifecycle::va_get_generation(state), 1);
            assert_eq!(va_get_cell(state, 1, 0, 0), 1);
            assert_eq!(va_get_cell(state, 1, 1, 0), 1);
            assert_eq!(va_get_cell(state, 1, 2, 0), 1);
            assert_eq!(va_get_cell(state, 0, 1, 0), 0);
            assert_eq!(va_get_cell(state, 2, 1, 0), 0);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(va_set_cell(ptr::null_mut(), 0, 0, 0, 1), 1);
            assert_eq!(va_get_cell(ptr::null(), 0, 0, 0), 0);
            assert_eq!(va_population(ptr::null()), 0);
            va_step(ptr::null_mut()); // Should not crash
        }
    }
}
