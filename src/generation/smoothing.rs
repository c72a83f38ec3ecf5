//! Cellular automaton smoothing
//!
//! Majority rule over the 8-neighborhood: more than four wall neighbors turns a
//! cell to wall, fewer than four turns it open, exactly four leaves it alone.
//! Cells are updated in place in x-major order, so later cells in a pass see
//! the already-updated values of earlier ones. The outer ring is never smoothed;
//! the edge rules own it.

use super::edges::EdgeStitcher;
use crate::cell::{Cell, CaveGrid};

/// Wall-neighbor count at which a cell is left unchanged.
const MAJORITY_THRESHOLD: usize = 4;

/// Run `passes` smoothing passes, re-applying the edge rules before each one.
pub fn smooth(grid: &mut CaveGrid, passes: u32, edges: &EdgeStitcher<'_>) {
    for _ in 0..passes {
        edges.apply(grid);
        smooth_pass(grid);
    }
}

/// One in-place pass over the interior cells.
pub fn smooth_pass(grid: &mut CaveGrid) {
    let size = grid.width;
    for x in 0..size {
        for y in 0..size {
            let Some(neighbors) = grid.neighbors_8(x, y) else {
                continue;
            };
            let walls = neighbors
                .iter()
                .filter(|&&(nx, ny)| grid.get(nx, ny).is_wall())
                .count();

            let next = next_state(*grid.get(x, y), walls);
            grid.set(x, y, next);
        }
    }
}

fn next_state(current: Cell, walls: usize) -> Cell {
    if walls > MAJORITY_THRESHOLD {
        Cell::Wall
    } else if walls < MAJORITY_THRESHOLD {
        Cell::Open
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{Area, Lineage, Side};

    #[test]
    fn test_isolated_speck_is_removed() {
        let mut grid = CaveGrid::new_with(7, 7, Cell::Wall);
        grid.set(3, 3, Cell::Open);
        smooth_pass(&mut grid);
        assert_eq!(grid.count(&Cell::Open), 0);
    }

    #[test]
    fn test_majority_rule_thresholds() {
        assert_eq!(next_state(Cell::Open, 5), Cell::Wall);
        assert_eq!(next_state(Cell::Wall, 3), Cell::Open);
        assert_eq!(next_state(Cell::Open, 4), Cell::Open);
        assert_eq!(next_state(Cell::Wall, 4), Cell::Wall);
        assert_eq!(next_state(Cell::Open, 0), Cell::Open);
        assert_eq!(next_state(Cell::Wall, 8), Cell::Wall);
    }

    #[test]
    fn test_pass_sees_earlier_updates() {
        // (1, 2) starts with 5 wall neighbors. (1, 1) is visited first and
        // opens, leaving (1, 2) at a tie of 4, so it stays open. A
        // double-buffered pass would have walled it.
        let mut grid = CaveGrid::new_with(5, 5, Cell::Open);
        for y in 0..5 {
            grid.set(0, y, Cell::Wall);
        }
        grid.set(1, 1, Cell::Wall);
        grid.set(1, 3, Cell::Wall);
        smooth_pass(&mut grid);
        assert!(grid.get(1, 1).is_open());
        assert!(grid.get(1, 2).is_open());
    }

    #[test]
    fn test_outer_ring_untouched_by_pass() {
        let mut grid = CaveGrid::new_with(6, 6, Cell::Wall);
        grid.set(0, 3, Cell::Open);
        smooth_pass(&mut grid);
        assert_eq!(*grid.get(0, 3), Cell::Open);
    }

    #[test]
    fn test_smooth_reapplies_edges_each_pass() {
        let area = Area::isolated(0).with_neighbor(Side::Top);
        let edges = EdgeStitcher::new(&area, Lineage::Root, 9).unwrap();
        let mut grid = CaveGrid::new_with(9, 9, Cell::Open);
        smooth(&mut grid, 3, &edges);

        for i in 0..9 {
            assert_eq!(*grid.get(0, i), Cell::Wall);
            assert_eq!(*grid.get(8, i), Cell::Wall);
            assert_eq!(*grid.get(i, 0), Cell::Wall);
        }
        assert!(grid.get(4, 4).is_open());
    }
}
