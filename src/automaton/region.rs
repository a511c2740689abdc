//! Dense region extraction and import for renderers.
//!
//! Buffers are laid out in z,y,x order (z changes slowest, x fastest), one
//! byte per cell: 1 = alive, 0 = dead. Region bounds are `[min, max)` and are
//! clamped to the grid's box.

use rayon::prelude::*;

use super::grid::{Coordinate, Dimension, Grid};
use crate::error::{Error, Result};

/// Clamped `[min, max)` box, or None when it is empty or inverted.
fn clamp_region(
    dim: Dimension,
    min: Coordinate,
    max: Coordinate,
) -> Option<(Coordinate, Coordinate)> {
    let clamp = |v: i32, extent: u32| v.max(0).min(i32::try_from(extent).unwrap_or(i32::MAX));

    let lo = Coordinate::new(
        clamp(min.x, dim.width()),
        clamp(min.y, dim.height()),
        clamp(min.z, dim.length()),
    );
    let hi = Coordinate::new(
        clamp(max.x, dim.width()),
        clamp(max.y, dim.height()),
        clamp(max.z, dim.length()),
    );

    if lo.x >= hi.x || lo.y >= hi.y || lo.z >= hi.z {
        return None;
    }
    Some((lo, hi))
}

/// Rasterize a region of `grid` into `out_buf`.
///
/// # Returns
/// Number of bytes written; 0 for an empty region.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min: Coordinate,
    max: Coordinate,
) -> Result<usize> {
    let Some((lo, hi)) = clamp_region(grid.dim(), min, max) else {
        return Ok(0);
    };

    let width = (hi.x - lo.x) as usize;
    let height = (hi.y - lo.y) as usize;
    let depth = (hi.z - lo.z) as usize;
    let layer_size = width * height;
    let total_size = layer_size * depth;

    if out_buf.len() < total_size {
        return Err(Error::Region {
            required: total_size,
            actual: out_buf.len(),
        });
    }

    // Each z layer is independent; the grid is only read.
    out_buf[..total_size]
        .par_chunks_mut(layer_size)
        .enumerate()
        .for_each(|(i, layer)| {
            let z = lo.z + i as i32;
            let mut offset = 0;
            for y in lo.y..hi.y {
                for x in lo.x..hi.x {
                    layer[offset] = u8::from(grid.is_alive(Coordinate::new(x, y, z)));
                    offset += 1;
                }
            }
        });

    Ok(total_size)
}

/// Return a new grid whose region is replaced by the content of `in_buf`.
///
/// Input values are normalized: 0 = dead, any non-zero = alive. Cells
/// outside the region are carried over unchanged.
pub fn import_region(
    grid: &Grid,
    in_buf: &[u8],
    min: Coordinate,
    max: Coordinate,
) -> Result<Grid> {
    let Some((lo, hi)) = clamp_region(grid.dim(), min, max) else {
        return Ok(grid.clone());
    };

    let total_size = (hi.x - lo.x) as usize * (hi.y - lo.y) as usize * (hi.z - lo.z) as usize;
    if in_buf.len() < total_size {
        return Err(Error::Region {
            required: total_size,
            actual: in_buf.len(),
        });
    }

    let mut cells = grid.cells().clone();
    let mut offset = 0;
    for z in lo.z..hi.z {
        for y in lo.y..hi.y {
            for x in lo.x..hi.x {
                let c = Coordinate::new(x, y, z);
                if in_buf[offset] == 0 {
                    cells.remove(&c);
                } else {
                    cells.insert(c);
                }
                offset += 1;
            }
        }
    }

    Ok(Grid::from_cells_unchecked(grid.dim(), cells))
}
