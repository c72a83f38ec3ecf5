//! Region cleanup and room construction
//!
//! Small wall specks are hollowed out, small floor pockets are filled in, and
//! every surviving floor region becomes a [`Room`]. Rooms live in a plain
//! vector and refer to each other by [`RoomId`], their index in that vector.

use tracing::debug;

use super::regions::get_all_regions;
use crate::cell::{Cell, CaveGrid, Position};
use crate::error::{GenerationError, Result};
use crate::tilemap::ORTHOGONAL;

/// Index of a room in the room list returned by [`clean_up`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// A floor region that survived cleanup.
#[derive(Clone, Debug)]
pub struct Room {
    pub tiles: Vec<Position>,
    /// Tiles touching a wall or the grid border. A tile appears once per
    /// qualifying orthogonal neighbor, so concave corners are listed twice or more.
    pub edge_tiles: Vec<Position>,
    pub connected: Vec<RoomId>,
    pub size: usize,
    pub reaches_main: bool,
    pub is_main: bool,
}

impl Room {
    /// Build a room from its tiles, reading `grid` to find its edge tiles.
    pub fn new(tiles: Vec<Position>, grid: &CaveGrid) -> Self {
        let mut edge_tiles = Vec::new();
        for &tile in &tiles {
            for (dx, dy) in ORTHOGONAL {
                let (nx, ny) = (tile.x + dx, tile.y + dy);
                match grid.try_get(nx, ny) {
                    None | Some(Cell::Wall) => edge_tiles.push(tile),
                    Some(Cell::Open) => {}
                }
            }
        }

        Self {
            size: tiles.len(),
            tiles,
            edge_tiles,
            connected: Vec::new(),
            reaches_main: false,
            is_main: false,
        }
    }

    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connected.contains(&other)
    }
}

/// Remove undersized regions and return the surviving rooms, largest first.
///
/// The first room is the main room. Equal sizes keep discovery order.
pub fn clean_up(grid: &mut CaveGrid, min_wall_size: usize, min_room_size: usize) -> Result<Vec<Room>> {
    let mut walls_removed = 0;
    for region in get_all_regions(grid, Cell::Wall) {
        if region.size() < min_wall_size {
            walls_removed += 1;
            for &(x, y) in &region.tiles {
                grid.set(x, y, Cell::Open);
            }
        }
    }

    let mut pockets_removed = 0;
    let mut rooms = Vec::new();
    for region in get_all_regions(grid, Cell::Open) {
        if region.size() < min_room_size {
            pockets_removed += 1;
            for &(x, y) in &region.tiles {
                grid.set(x, y, Cell::Wall);
            }
        } else {
            let tiles = region.tiles.iter().copied().map(Position::from).collect();
            rooms.push(Room::new(tiles, grid));
        }
    }

    debug!(walls_removed, pockets_removed, rooms = rooms.len(), "regions cleaned up");

    if rooms.is_empty() {
        return Err(GenerationError::NoRooms {
            size: grid.width,
            min_room_size,
        });
    }

    rooms.sort_by(|a, b| b.size.cmp(&a.size));
    rooms[0].is_main = true;
    rooms[0].reaches_main = true;

    Ok(rooms)
}
