//! Random initial grids.

use std::collections::HashSet;

use rand::Rng;

use super::grid::{Coordinate, Dimension, Grid};
use crate::error::{Error, Result};

/// Build a `side x side x length` grid seeded with roughly `density` live cells.
///
/// Draws `floor(density * volume)` flat indices with replacement, so
/// collisions can leave fewer live cells than requested. Index `idx`
/// decodes to `x = (idx / side) % side`, `y = idx % side`, `z = idx / side²`.
pub fn random_grid<R: Rng>(
    density: f64,
    side: u32,
    length: u32,
    rng: &mut R,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidDensity(density));
    }
    let dim = Dimension::new(side, side, length)?;

    let side = side as usize;
    let layer_area = side * side;
    let size = dim.volume();
    let draws = (density * size as f64) as usize;

    let cells: HashSet<Coordinate> = (0..draws)
        .map(|_| rng.gen_range(0..size))
        .map(|idx| {
            Coordinate::new(
                ((idx / side) % side) as i32,
                (idx % side) as i32,
                (idx / layer_area) as i32,
            )
        })
        .collect();

    tracing::debug!(%dim, draws, population = cells.len(), "random grid");
    Ok(Grid::from_cells_unchecked(dim, cells))
}
