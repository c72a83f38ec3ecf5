//! Cell states and coordinates of a cave grid.

use serde::{Deserialize, Serialize};

use crate::tilemap::Tilemap;

/// State of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Solid rock.
    #[default]
    Wall,
    /// Walkable floor.
    Open,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    /// ASCII glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
        }
    }
}

/// The square grid every pipeline stage works on.
pub type CaveGrid = Tilemap<Cell>;

/// Integer grid coordinate. Signed so line tracing and brush offsets can step
/// outside the grid before being range-checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.
    pub fn distance_sq(self, other: Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position::new(x as i32, y as i32)
    }
}
