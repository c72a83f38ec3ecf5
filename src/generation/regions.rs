//! Connected region extraction
//!
//! Breadth-first flood fill over orthogonal neighbors. A region is a maximal
//! 4-connected set of cells sharing one state; diagonal contact does not join
//! two regions.

use std::collections::VecDeque;

use crate::cell::{Cell, CaveGrid};
use crate::tilemap::Tilemap;

/// One connected region, tiles listed in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub cell: Cell,
    pub tiles: Vec<(usize, usize)>,
}

impl Region {
    /// Number of cells in the region.
    pub fn size(&self) -> usize {
        self.tiles.len()
    }
}

/// The region containing `(x, y)`.
pub fn get_region(grid: &CaveGrid, x: usize, y: usize) -> Region {
    let mut visited = Tilemap::new_with(grid.width, grid.height, false);
    flood_region(grid, x, y, &mut visited)
}

/// Every region of the given state, discovered by an x-major scan.
pub fn get_all_regions(grid: &CaveGrid, cell: Cell) -> Vec<Region> {
    let mut visited = Tilemap::new_with(grid.width, grid.height, false);
    let mut regions = Vec::new();

    for x in 0..grid.width {
        for y in 0..grid.height {
            if !*visited.get(x, y) && *grid.get(x, y) == cell {
                regions.push(flood_region(grid, x, y, &mut visited));
            }
        }
    }

    regions
}

/// Flood fill from `(x, y)`, marking every reached cell in `visited`.
fn flood_region(grid: &CaveGrid, x: usize, y: usize, visited: &mut Tilemap<bool>) -> Region {
    let cell = *grid.get(x, y);
    let mut tiles = Vec::new();
    let mut queue = VecDeque::new();

    visited.set(x, y, true);
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        tiles.push((cx, cy));

        for (nx, ny) in grid.neighbors(cx, cy) {
            if !*visited.get(nx, ny) && *grid.get(nx, ny) == cell {
                visited.set(nx, ny, true);
                queue.push_back((nx, ny));
            }
        }
    }

    Region { cell, tiles }
}
