//! Boundary stitching between adjacent areas
//!
//! Three rules keep an area consistent with its neighbors:
//! - the parent's edge pattern is imprinted on the side facing the parent,
//! - sides without a neighbor are sealed with wall,
//! - a terminal area gets one exit gap cut into an outward side.
//!
//! The first two are re-applied before every smoothing pass; the gap is cut
//! once, right after the initial fill.

use tracing::debug;

use crate::area::{AreaDescriptor, EdgePattern, Lineage, Side};
use crate::cell::{Cell, CaveGrid};
use crate::error::ConfigError;
use crate::seeds::SeededRandom;

/// Rows/columns nearest the parent side that copy the parent's pattern.
pub const PARENT_EDGE_DEPTH: usize = 3;
/// Depth of the wall strip holding the transition gap.
pub const TRANSITION_DEPTH: usize = 10;
/// Width of the open transition gap.
pub const TRANSITION_WIDTH: usize = 8;
/// Minimum distance between the gap and either corner of its side.
pub const TRANSITION_MARGIN: usize = 15;

/// Edge rules for one area, validated against the grid size up front.
pub struct EdgeStitcher<'a> {
    area: &'a dyn AreaDescriptor,
    parent: Option<(Side, &'a EdgePattern)>,
}

impl<'a> EdgeStitcher<'a> {
    pub fn new(
        area: &'a dyn AreaDescriptor,
        lineage: Lineage<'a>,
        size: usize,
    ) -> Result<Self, ConfigError> {
        let parent = match lineage {
            Lineage::Root => None,
            Lineage::Child(pattern) => {
                let side = area.parent_side().ok_or(ConfigError::MissingParentSide {
                    identity: area.identity(),
                })?;
                if pattern.len() != size {
                    return Err(ConfigError::EdgePatternLength {
                        expected: size,
                        actual: pattern.len(),
                    });
                }
                Some((side, pattern))
            }
        };

        Ok(Self { area, parent })
    }

    /// Apply the per-pass rules: parent imprint first, then sealing.
    pub fn apply(&self, grid: &mut CaveGrid) {
        self.imprint_parent_edge(grid);
        self.enforce_closed_edges(grid);
    }

    /// Broadcast the parent's pattern across the lines nearest the parent side.
    pub fn imprint_parent_edge(&self, grid: &mut CaveGrid) {
        let Some((side, pattern)) = self.parent else {
            return;
        };
        let size = grid.width;

        for depth in 0..PARENT_EDGE_DEPTH.min(size) {
            for (along, &cell) in pattern.cells.iter().enumerate() {
                let (x, y) = side.cell_at(size, depth, along);
                grid.set(x, y, cell);
            }
        }
    }

    /// Wall off the outermost row/column of every side without a neighbor.
    pub fn enforce_closed_edges(&self, grid: &mut CaveGrid) {
        let size = grid.width;
        for side in Side::ALL {
            if self.area.has_neighbor(side) {
                continue;
            }
            for along in 0..size {
                let (x, y) = side.cell_at(size, 0, along);
                grid.set(x, y, Cell::Wall);
            }
        }
    }
}

/// Where the exit of a terminal area was cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionGap {
    pub side: Side,
    /// Index along the side of the first open cell.
    pub offset: usize,
}

/// Cut the exit of a terminal area: a wall strip `TRANSITION_DEPTH` deep along
/// the transition side with a `TRANSITION_WIDTH`-wide open gap at a seeded offset.
pub fn carve_transition_gap(
    grid: &mut CaveGrid,
    area: &dyn AreaDescriptor,
    rng: &mut SeededRandom,
) -> Result<TransitionGap, ConfigError> {
    let size = grid.width;
    if size <= 2 * TRANSITION_MARGIN {
        return Err(ConfigError::AreaTooSmallForTransition {
            size,
            min: 2 * TRANSITION_MARGIN,
        });
    }

    let side = area
        .transition_side()
        .ok_or(ConfigError::MissingTransitionSide {
            identity: area.identity(),
        })?;
    let offset = rng.range(TRANSITION_MARGIN, size - TRANSITION_MARGIN);
    let gap = offset..offset + TRANSITION_WIDTH;

    for depth in 0..TRANSITION_DEPTH {
        for along in 0..size {
            let (x, y) = side.cell_at(size, depth, along);
            let cell = if gap.contains(&along) { Cell::Open } else { Cell::Wall };
            grid.set(x, y, cell);
        }
    }

    debug!(
        area = area.identity(),
        %side,
        offset,
        "transition gap carved"
    );

    Ok(TransitionGap { side, offset })
}
