//! State creation, destruction, and generation queries.

use std::ffi::c_char;

use super::str_arg;
use crate::automaton::{parse_rule, Dimension, Grid};
use crate::config::SimulationConfig;
use crate::state::State;

/// Creates an empty simulation of the given dimensions driven by `rule`.
///
/// # Safety
/// - `rule` must be null or point to a NUL-terminated rulestring
///
/// # Returns
/// A pointer to a new State, or null if the rule or dimensions are invalid.
/// The returned pointer must eventually be freed with `va_destroy()`.
#[no_mangle]
pub unsafe extern "C" fn va_create(
    width: u32,
    height: u32,
    length: u32,
    rule: *const c_char,
) -> *mut State {
    let Some(rulestring) = str_arg(rule, "rule") else {
        return std::ptr::null_mut();
    };

    let built = parse_rule(rulestring).and_then(|rule| {
        let dim = Dimension::new(width, height, length)?;
        Ok(State::new(Grid::empty(dim), rule))
    });

    match built {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(e) => {
            tracing::warn!(error = %e, "va_create rejected input");
            std::ptr::null_mut()
        }
    }
}

/// Creates a randomly seeded simulation from a JSON `SimulationConfig`.
///
/// # Safety
/// - `json` must be null or point to a NUL-terminated UTF-8 string
///
/// # Returns
/// A pointer to a new State, or null if the configuration is invalid.
#[no_mangle]
pub unsafe extern "C" fn va_create_from_config(json: *const c_char) -> *mut State {
    let Some(json) = str_arg(json, "config") else {
        return std::ptr::null_mut();
    };

    match SimulationConfig::from_json(json).and_then(|config| config.build()) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(e) => {
            tracing::warn!(error = %e, "va_create_from_config rejected input");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation state and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `va_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn va_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter from a state.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn va_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the configured delay between generations, in milliseconds.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The tick interval, or 0 if ptr is null or none was configured.
#[no_mangle]
pub unsafe extern "C" fn va_tick_interval_ms(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).tick_interval_ms()
}
