//! Voxel Life - sparse 3D Life-like cellular automata.
//!
//! A grid is an immutable set of live coordinates inside a fixed box. Each
//! generation is computed from the previous one by a `B<counts>S<counts>`
//! rule over the 26-cell Moore neighbourhood, with hard edges.
//!
//! Rust callers use the `automaton`, `config`, and `state` modules directly.
//! Renderers and host loops in other languages use the C ABI in `ffi`.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{
    neighbors, parse_rule, random_grid, step, Coordinate, Dimension, Grid, Neighbours, Rule,
};
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use state::State;
