//! Moore neighbourhood resolution with hard-edge boundaries.

use std::collections::HashSet;

use super::grid::{Coordinate, Grid};

/// In-box neighbours of one coordinate, split by whether they are alive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub alive: HashSet<Coordinate>,
    pub dead: HashSet<Coordinate>,
}

impl Neighbours {
    /// The count rule evaluation consumes.
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Size of the in-box neighbourhood (26 in the interior, fewer at edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.alive.len() + self.dead.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty() && self.dead.is_empty()
    }
}

/// Resolve the Moore neighbourhood (26 neighbours) of `coord` within `grid`.
///
/// Out-of-box offsets are skipped entirely rather than counted as dead, so a
/// corner cell has 7 neighbours. There is no wraparound.
pub fn neighbors(grid: &Grid, coord: Coordinate) -> Neighbours {
    let dim = grid.dim();
    let mut result = Neighbours::default();

    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }

                // Offsets past the i32 range are outside every box
                let (Some(x), Some(y), Some(z)) = (
                    coord.x.checked_add(dx),
                    coord.y.checked_add(dy),
                    coord.z.checked_add(dz),
                ) else {
                    continue;
                };

                let n = Coordinate::new(x, y, z);
                if !dim.contains(n) {
                    continue;
                }

                if grid.is_alive(n) {
                    result.alive.insert(n);
                } else {
                    result.dead.insert(n);
                }
            }
        }
    }

    result
}
