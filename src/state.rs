//! Harness-facing simulation state.

use crate::automaton::{step, Coordinate, Grid, Rule};
use crate::error::Result;

/// The current generation of a running simulation plus the rule driving it.
///
/// Only the current grid is retained; advancing replaces it.
#[derive(Clone, Debug)]
pub struct State {
    grid: Grid,
    rule: Rule,
    generation: u64,
    tick_interval_ms: u64,
}

impl State {
    pub fn new(grid: Grid, rule: Rule) -> Self {
        Self {
            grid,
            rule,
            generation: 0,
            tick_interval_ms: 0,
        }
    }

    /// Attach the harness cadence; the state itself never sleeps.
    pub fn with_tick_interval(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    /// Step forward one generation and return the new grid.
    pub fn advance(&mut self) -> &Grid {
        self.grid = step(&self.grid, &self.rule);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced"
        );
        &self.grid
    }

    /// Replace the current grid with `grid`, keeping the generation counter.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Set one cell alive or dead in the current grid.
    pub fn set_cell(&mut self, c: Coordinate, alive: bool) -> Result<()> {
        self.grid = self.grid.with_cell(c, alive)?;
        Ok(())
    }
}
