//! Error types for rule parsing, grid construction, and configuration.

use thiserror::Error;

use crate::automaton::{Coordinate, Dimension};

/// Errors raised while building simulation inputs.
///
/// Stepping and neighbour queries never fail; every variant here comes from
/// building a `Rule`, `Grid`, or `State`, or from region buffer I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// The rulestring does not have the `B<counts>S<counts>` shape.
    #[error("invalid rule format: {0:?} (expected B<n,..>S<m,..>)")]
    InvalidRuleFormat(String),

    /// A count in the rulestring is not a non-negative integer.
    #[error("invalid rule token {0:?}: expected a non-negative integer")]
    InvalidRuleToken(String),

    /// Extents must be in `1..=i32::MAX` and the volume must fit in `usize`.
    #[error("invalid dimension {width}x{height}x{length}: extents must be in 1..=2147483647 with an addressable volume")]
    InvalidDimension { width: u32, height: u32, length: u32 },

    /// A live cell lies outside the grid's box.
    #[error("cell {coord} is outside the {dim} box")]
    CellOutOfBounds { coord: Coordinate, dim: Dimension },

    /// Density for the random initializer is outside `[0, 1]`.
    #[error("density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    /// Malformed JSON configuration.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A region buffer is too small for the requested box.
    #[error("region buffer holds {actual} bytes, {required} required")]
    Region { required: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
