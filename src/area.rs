//! Area descriptors and the edge patterns shared between adjacent areas
//!
//! An area is one generated cave grid in a larger layout. The layout itself is
//! decided elsewhere; generation only needs to know which sides have a
//! neighboring area, which side leads back to the parent, and the parent's
//! boundary cells so the two grids line up at the seam.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CaveGrid};

/// One side of a square area.
///
/// Index order matches the layout tooling: 0 = top (`y = size - 1`),
/// 1 = right (`x = size - 1`), 2 = bottom (`y = 0`), 3 = left (`x = 0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// The side of the neighboring area that touches this one.
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Cell at `along` on the line `depth` cells in from this side.
    ///
    /// `along` runs over x for top/bottom and over y for left/right, so an
    /// edge pattern index lines up with the matching neighbor's pattern.
    pub fn cell_at(self, size: usize, depth: usize, along: usize) -> (usize, usize) {
        match self {
            Side::Top => (along, size - 1 - depth),
            Side::Right => (size - 1 - depth, along),
            Side::Bottom => (along, depth),
            Side::Left => (depth, along),
        }
    }

    /// True when `(x, y)` lies on this side's outermost row/column.
    pub fn contains(self, size: usize, x: usize, y: usize) -> bool {
        match self {
            Side::Top => y == size - 1,
            Side::Right => x == size - 1,
            Side::Bottom => y == 0,
            Side::Left => x == 0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        };
        write!(f, "{}", name)
    }
}

/// Read-only view of an area's place in the layout.
pub trait AreaDescriptor {
    /// Identity used in logs and handed to the mesh builder.
    fn identity(&self) -> u32;

    /// Whether a neighboring area exists on `side`. Sides without a neighbor
    /// are sealed with wall.
    fn has_neighbor(&self, side: Side) -> bool;

    /// Side connected to the parent area, `None` for the root of the layout.
    fn parent_side(&self) -> Option<Side>;

    /// Side receiving the exit gap when this area is terminal: the last side
    /// (in index order) that has a neighbor and is not the parent side.
    fn transition_side(&self) -> Option<Side> {
        let parent = self.parent_side();
        Side::ALL
            .iter()
            .rev()
            .copied()
            .find(|&side| self.has_neighbor(side) && Some(side) != parent)
    }
}

/// Plain area descriptor, as produced by a layout pass or a config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub identity: u32,
    /// Neighbor flags indexed by [`Side::index`].
    pub neighbors: [bool; 4],
    pub parent_side: Option<Side>,
}

impl Area {
    /// An area with no neighbors at all: fully enclosed.
    pub fn isolated(identity: u32) -> Self {
        Self {
            identity,
            neighbors: [false; 4],
            parent_side: None,
        }
    }

    pub fn with_neighbor(mut self, side: Side) -> Self {
        self.neighbors[side.index()] = true;
        self
    }

    pub fn with_parent(mut self, side: Side) -> Self {
        self.parent_side = Some(side);
        self.neighbors[side.index()] = true;
        self
    }
}

impl AreaDescriptor for Area {
    fn identity(&self) -> u32 {
        self.identity
    }

    fn has_neighbor(&self, side: Side) -> bool {
        self.neighbors[side.index()] || self.parent_side == Some(side)
    }

    fn parent_side(&self) -> Option<Side> {
        self.parent_side
    }
}

/// Cell states along one side of an area, shared with the adjacent area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgePattern {
    pub side: Side,
    pub cells: Vec<Cell>,
}

impl EdgePattern {
    pub fn new(side: Side, cells: Vec<Cell>) -> Self {
        Self { side, cells }
    }

    /// Read the outermost row/column of `grid` on `side`.
    pub fn from_grid(grid: &CaveGrid, side: Side) -> Self {
        let size = grid.width;
        let cells = (0..size)
            .map(|along| {
                let (x, y) = side.cell_at(size, 0, along);
                *grid.get(x, y)
            })
            .collect();
        Self { side, cells }
    }

    /// The same pattern seen from the neighbor across the seam.
    pub fn for_child(&self) -> Self {
        Self {
            side: self.side.opposite(),
            cells: self.cells.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }
}

/// Where an area sits in the generation tree.
#[derive(Clone, Copy, Debug)]
pub enum Lineage<'a> {
    /// First area of the layout; nothing to stitch to.
    Root,
    /// Child of an already generated area whose boundary must be continued.
    Child(&'a EdgePattern),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilemap::Tilemap;

    #[test]
    fn test_side_index_order_and_opposites() {
        for (index, side) in Side::ALL.into_iter().enumerate() {
            assert_eq!(side.index(), index);
            assert_eq!(side.opposite().opposite(), side);
        }
        assert_eq!(Side::Top.opposite(), Side::Bottom);
    }

    #[test]
    fn test_cell_at_depth() {
        assert_eq!(Side::Top.cell_at(10, 0, 3), (3, 9));
        assert_eq!(Side::Right.cell_at(10, 2, 3), (7, 3));
        assert_eq!(Side::Bottom.cell_at(10, 1, 3), (3, 1));
        assert_eq!(Side::Left.cell_at(10, 0, 3), (0, 3));
    }

    #[test]
    fn test_parent_side_counts_as_neighbor() {
        let area = Area::isolated(1).with_parent(Side::Left);
        assert!(area.has_neighbor(Side::Left));
        assert!(!area.has_neighbor(Side::Right));
    }

    #[test]
    fn test_transition_side_prefers_last_eligible_side() {
        let area = Area::isolated(2)
            .with_parent(Side::Left)
            .with_neighbor(Side::Top)
            .with_neighbor(Side::Right);
        assert_eq!(area.transition_side(), Some(Side::Right));

        let dead_end = Area::isolated(3).with_parent(Side::Left);
        assert_eq!(dead_end.transition_side(), None);
    }

    #[test]
    fn test_edge_pattern_reads_outer_row() {
        let mut grid: Tilemap<Cell> = Tilemap::new(4, 4);
        grid.set(1, 3, Cell::Open);
        grid.set(3, 2, Cell::Open);

        let top = EdgePattern::from_grid(&grid, Side::Top);
        assert_eq!(top.cells, vec![Cell::Wall, Cell::Open, Cell::Wall, Cell::Wall]);

        let right = EdgePattern::from_grid(&grid, Side::Right);
        assert_eq!(right.open_count(), 1);
        assert_eq!(right.cells[2], Cell::Open);
        assert_eq!(right.for_child().side, Side::Left);
    }
}
