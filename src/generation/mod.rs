//! Cave generation pipeline
//!
//! One call to [`CaveGenerator::create_map`] produces one finished area:
//!
//! 1. random fill from the seeded stream (`fill`),
//! 2. the transition gap for terminal areas (`edges`),
//! 3. `smooth_amount` smoothing passes with edge rules re-applied (`smoothing`),
//! 4. region cleanup into rooms (`regions`, `rooms`),
//! 5. passages until every room reaches the main room (`connect`, `passages`),
//! 6. one finishing smoothing pass.

pub mod connect;
pub mod edges;
pub mod fill;
pub mod passages;
pub mod regions;
pub mod rooms;
pub mod smoothing;

use tracing::info;

use crate::area::{AreaDescriptor, EdgePattern, Lineage, Side};
use crate::cell::{Cell, CaveGrid};
use crate::config::CaveConfig;
use crate::error::{GenerationError, Result};
use crate::mesh::MeshBuilder;
use crate::seeds::{CaveSeed, SeededRandom};

use self::connect::{connect_rooms, Passage};
use self::edges::{carve_transition_gap, EdgeStitcher, TransitionGap};
use self::regions::get_all_regions;
use self::rooms::Room;

/// Passes applied after cleanup to round off carved passages.
const FINISHING_PASSES: u32 = 1;

/// A finished area.
#[derive(Clone, Debug)]
pub struct CaveMap {
    pub grid: CaveGrid,
    /// The seed actually used, so a random-seed run can be replayed.
    pub seed: CaveSeed,
    /// Rooms as they stood when the last passage was carved. The finishing
    /// smoothing pass may shift their outlines by a cell.
    pub rooms: Vec<Room>,
    pub passages: Vec<Passage>,
    pub transition: Option<TransitionGap>,
    pub passage_radius: i32,
}

impl CaveMap {
    pub fn size(&self) -> usize {
        self.grid.width
    }

    /// Cell at a signed coordinate, rejecting anything outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell> {
        self.grid
            .try_get(x, y)
            .copied()
            .ok_or(GenerationError::OutOfBounds { x, y, size: self.size() })
    }

    /// The boundary pattern a neighbor on `side` has to continue.
    pub fn edge(&self, side: Side) -> EdgePattern {
        EdgePattern::from_grid(&self.grid, side)
    }

    pub fn main_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.is_main)
    }

    pub fn open_cell_count(&self) -> usize {
        self.grid.count(&Cell::Open)
    }

    /// True when all open cells form one 4-connected region.
    pub fn is_fully_connected(&self) -> bool {
        get_all_regions(&self.grid, Cell::Open).len() <= 1
    }
}

/// Runs the pipeline for a fixed configuration.
#[derive(Clone, Debug)]
pub struct CaveGenerator {
    config: CaveConfig,
}

impl CaveGenerator {
    /// Validates the configuration up front.
    pub fn new(config: CaveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate one area.
    ///
    /// `lineage` carries the parent's edge pattern for non-root areas;
    /// `terminal` areas get an exit gap on their transition side.
    pub fn create_map(
        &self,
        area: &dyn AreaDescriptor,
        lineage: Lineage<'_>,
        terminal: bool,
    ) -> Result<CaveMap> {
        let config = &self.config;
        let size = config.size;
        let seed = config.resolve_seed();
        let edges = EdgeStitcher::new(area, lineage, size)?;
        let mut rng = SeededRandom::new(&seed);

        info!(area = area.identity(), %seed, size, terminal, "generating cave");

        let mut grid = CaveGrid::new(size, size);
        fill::random_fill(&mut grid, area, config.fill_percent, &mut rng);

        let transition = if terminal {
            Some(carve_transition_gap(&mut grid, area, &mut rng)?)
        } else {
            None
        };

        smoothing::smooth(&mut grid, config.smooth_amount, &edges);

        let mut rooms = rooms::clean_up(&mut grid, config.min_wall_size, config.min_room_size)?;
        let passages = connect_rooms(&mut grid, &mut rooms, config.passage_radius)?;

        smoothing::smooth(&mut grid, FINISHING_PASSES, &edges);

        info!(
            area = area.identity(),
            rooms = rooms.len(),
            passages = passages.len(),
            open = grid.count(&Cell::Open),
            "cave generated"
        );

        Ok(CaveMap {
            grid,
            seed,
            rooms,
            passages,
            transition,
            passage_radius: config.passage_radius,
        })
    }

    /// Generate one area and hand it to a mesh builder.
    pub fn build_with<B: MeshBuilder>(
        &self,
        area: &dyn AreaDescriptor,
        lineage: Lineage<'_>,
        terminal: bool,
        builder: &mut B,
    ) -> Result<(CaveMap, B::Output)> {
        let map = self.create_map(area, lineage, terminal)?;
        let output = builder.generate_mesh(&map.grid, map.passage_radius, &map.seed, area);
        Ok((map, output))
    }
}
