//! Sparse grid data model: dimensions, coordinates, and the live-cell set.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};

/// Largest extent along any axis; every in-box coordinate fits in `i32`.
pub const MAX_EXTENT: u32 = i32::MAX as u32;

/// Extents of the simulation box `[0,width) x [0,height) x [0,length)`.
///
/// Each extent is in `1..=MAX_EXTENT` and the volume fits in `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    width: u32,
    height: u32,
    length: u32,
}

impl Dimension {
    /// Create a dimension, rejecting zero or oversized extents.
    pub fn new(width: u32, height: u32, length: u32) -> Result<Self> {
        let extent_ok = |e: u32| (1..=MAX_EXTENT).contains(&e);
        let volume = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(length as usize));

        if !(extent_ok(width) && extent_ok(height) && extent_ok(length)) || volume.is_none() {
            return Err(Error::InvalidDimension {
                width,
                height,
                length,
            });
        }
        Ok(Self {
            width,
            height,
            length,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Total number of cells in the box.
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.length as usize
    }

    /// Check if a coordinate lies within the box.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0
            && (c.x as u32) < self.width
            && c.y >= 0
            && (c.y as u32) < self.height
            && c.z >= 0
            && (c.z as u32) < self.length
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.length)
    }
}

/// A cell location. May lie outside the box while neighbours are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One generation: a dimension plus the set of live coordinates inside it.
///
/// Immutable once built. Every coordinate in `cells` lies within `dim`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dim: Dimension,
    cells: HashSet<Coordinate>,
}

impl Grid {
    /// Build a grid, rejecting cells outside the box.
    pub fn new<I>(dim: Dimension, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let cells: HashSet<Coordinate> = cells.into_iter().collect();
        if let Some(&coord) = cells.iter().find(|&&c| !dim.contains(c)) {
            return Err(Error::CellOutOfBounds { coord, dim });
        }
        Ok(Self { dim, cells })
    }

    /// A grid with no live cells.
    pub fn empty(dim: Dimension) -> Self {
        Self {
            dim,
            cells: HashSet::new(),
        }
    }

    /// Callers guarantee every cell is inside `dim`.
    pub(crate) fn from_cells_unchecked(dim: Dimension, cells: HashSet<Coordinate>) -> Self {
        debug_assert!(cells.iter().all(|&c| dim.contains(c)));
        Self { dim, cells }
    }

    #[inline]
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    #[inline]
    pub fn cells(&self) -> &HashSet<Coordinate> {
        &self.cells
    }

    #[inline]
    pub fn is_alive(&self, c: Coordinate) -> bool {
        self.cells.contains(&c)
    }

    /// Number of live cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Return a new grid with one cell set alive or dead.
    pub fn with_cell(&self, c: Coordinate, alive: bool) -> Result<Self> {
        if !self.dim.contains(c) {
            return Err(Error::CellOutOfBounds {
                coord: c,
                dim: self.dim,
            });
        }
        let mut cells = self.cells.clone();
        if alive {
            cells.insert(c);
        } else {
            cells.remove(&c);
        }
        Ok(Self::from_cells_unchecked(self.dim, cells))
    }
}
