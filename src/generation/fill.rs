//! Initial random fill
//!
//! Every cell is sampled independently from the seeded stream, except cells on
//! an outer edge with no neighboring area, which start as wall and consume no
//! random draw.

use crate::area::{AreaDescriptor, Side};
use crate::cell::{Cell, CaveGrid};
use crate::seeds::SeededRandom;

/// Fill `grid` with noise: a draw above `fill_percent` is wall, anything else open.
pub fn random_fill(
    grid: &mut CaveGrid,
    area: &dyn AreaDescriptor,
    fill_percent: u32,
    rng: &mut SeededRandom,
) {
    let size = grid.width;
    let sealed: Vec<Side> = Side::ALL
        .iter()
        .copied()
        .filter(|&side| !area.has_neighbor(side))
        .collect();

    for x in 0..size {
        for y in 0..size {
            let on_sealed_edge = sealed.iter().any(|side| side.contains(size, x, y));
            let cell = if on_sealed_edge || rng.next_percent() > fill_percent {
                Cell::Wall
            } else {
                Cell::Open
            };
            grid.set(x, y, cell);
        }
    }
}
