//! Core automaton logic: sparse grids, rules, neighbours, and stepping.
//!
//! Every operation here reads an immutable `Grid` and returns a new one.
//! The state handle and FFI layer build on these functions.

pub mod grid;
pub mod neighbors;
pub mod random;
pub mod region;
pub mod rule;
pub mod stepping;

pub use grid::{Coordinate, Dimension, Grid};
pub use neighbors::{neighbors, Neighbours};
pub use random::random_grid;
pub use region::{extract_region, import_region};
pub use rule::{parse_rule, Rule, MAX_NEIGHBORS};
pub use stepping::step;
