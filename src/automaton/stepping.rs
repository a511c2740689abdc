//! Generation transitions driven by a birth/survival rule.

use std::collections::{HashMap, HashSet};

use super::grid::{Coordinate, Grid};
use super::neighbors::neighbors;
use super::rule::Rule;

/// Per-coordinate count of live cells a dead coordinate touches.
///
/// Missing keys read as zero; `bump` inserts or increments.
#[derive(Debug, Default)]
struct BirthTally {
    counts: HashMap<Coordinate, usize>,
}

impl BirthTally {
    #[inline]
    fn bump(&mut self, c: Coordinate) {
        *self.counts.entry(c).or_insert(0) += 1;
    }

    fn births<'a>(&'a self, rule: &'a Rule) -> impl Iterator<Item = Coordinate> + 'a {
        self.counts
            .iter()
            .filter(|&(_, &count)| rule.births(count))
            .map(|(&c, _)| c)
    }
}

/// Compute the next generation of `grid` under `rule`.
///
/// Only live cells and their dead neighbours are visited. All reads come
/// from `grid`, which is left untouched; the result is a new grid with the
/// same dimension. An empty grid always steps to an empty grid.
pub fn step(grid: &Grid, rule: &Rule) -> Grid {
    let mut next_cells: HashSet<Coordinate> = grid.cells().clone();
    let mut tally = BirthTally::default();
    let mut deaths = 0usize;

    for &cell in grid.cells() {
        let n = neighbors(grid, cell);

        if !rule.survives(n.alive_count()) {
            next_cells.remove(&cell);
            deaths += 1;
        }

        for &dead in &n.dead {
            tally.bump(dead);
        }
    }

    let before = next_cells.len();
    next_cells.extend(tally.births(rule));
    let births = next_cells.len() - before;

    tracing::debug!(
        population = grid.population(),
        deaths,
        births,
        candidates = tally.counts.len(),
        "stepped generation"
    );

    Grid::from_cells_unchecked(grid.dim(), next_cells)
}
