//! Room connection
//!
//! Two greedy phases carve passages until every room can reach the main room:
//! 1. every room without a connection is linked to its nearest other room,
//! 2. while some room is unreachable, the closest pair between the reachable
//!    and unreachable sets is linked and reachability spreads through the
//!    connection graph.
//!
//! Distances are squared Euclidean distances between edge tiles. The first
//! strict minimum found wins; there is no secondary tie-break.

use std::collections::VecDeque;

use tracing::debug;

use super::passages::carve_passage;
use super::rooms::{Room, RoomId};
use crate::cell::{CaveGrid, Position};
use crate::error::{GenerationError, Result};

/// One carved passage between two rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Passage {
    pub from: RoomId,
    pub to: RoomId,
    pub start: Position,
    pub end: Position,
}

/// Closest edge-tile pair found between two rooms.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    room_a: RoomId,
    room_b: RoomId,
    tile_a: Position,
    tile_b: Position,
    distance: i64,
}

/// Run both phases. On return every room has `reaches_main` set.
pub fn connect_rooms(grid: &mut CaveGrid, rooms: &mut [Room], radius: i32) -> Result<Vec<Passage>> {
    let mut passages = connect_nearest(grid, rooms, radius);
    passages.extend(ensure_reachable(grid, rooms, radius)?);
    Ok(passages)
}

/// Phase 1: link each still-unconnected room to its nearest other room.
pub fn connect_nearest(grid: &mut CaveGrid, rooms: &mut [Room], radius: i32) -> Vec<Passage> {
    let mut passages = Vec::new();

    for index in 0..rooms.len() {
        let room_a = RoomId(index);
        if !rooms[index].connected.is_empty() {
            continue;
        }

        let pairs: Vec<(RoomId, RoomId)> = (0..rooms.len())
            .map(RoomId)
            .filter(|&room_b| room_b != room_a && !rooms[index].is_connected(room_b))
            .map(|room_b| (room_a, room_b))
            .collect();

        if let Some(best) = closest_pair(rooms, &pairs) {
            passages.push(connect(grid, rooms, best, radius));
        }
    }

    passages
}

/// Phase 2: bridge the reachable and unreachable sets until none is left unreachable.
pub fn ensure_reachable(grid: &mut CaveGrid, rooms: &mut [Room], radius: i32) -> Result<Vec<Passage>> {
    let mut passages = Vec::new();

    loop {
        let (reached, unreached): (Vec<RoomId>, Vec<RoomId>) =
            (0..rooms.len()).map(RoomId).partition(|id| rooms[id.0].reaches_main);
        if unreached.is_empty() {
            break;
        }

        let pairs: Vec<(RoomId, RoomId)> = unreached
            .iter()
            .flat_map(|&a| reached.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| !rooms[a.0].is_connected(b))
            .collect();

        match closest_pair(rooms, &pairs) {
            Some(best) => passages.push(connect(grid, rooms, best, radius)),
            None => {
                return Err(GenerationError::Disconnected {
                    unreached: unreached.len(),
                })
            }
        }
    }

    Ok(passages)
}

/// Minimum-distance edge-tile pair over the given room pairs.
fn closest_pair(rooms: &[Room], pairs: &[(RoomId, RoomId)]) -> Option<Candidate> {
    pairs
        .iter()
        .flat_map(|&(room_a, room_b)| {
            let tiles_b = &rooms[room_b.0].edge_tiles;
            rooms[room_a.0].edge_tiles.iter().flat_map(move |&tile_a| {
                tiles_b.iter().map(move |&tile_b| Candidate {
                    room_a,
                    room_b,
                    tile_a,
                    tile_b,
                    distance: tile_a.distance_sq(tile_b),
                })
            })
        })
        .fold(None, |best: Option<Candidate>, candidate| match best {
            Some(current) if current.distance <= candidate.distance => Some(current),
            _ => Some(candidate),
        })
}

/// Record a symmetric link, spread reachability, and carve the passage.
fn connect(grid: &mut CaveGrid, rooms: &mut [Room], link: Candidate, radius: i32) -> Passage {
    let (a, b) = (link.room_a, link.room_b);

    if rooms[a.0].reaches_main {
        mark_reachable(rooms, b);
    } else if rooms[b.0].reaches_main {
        mark_reachable(rooms, a);
    }
    rooms[a.0].connected.push(b);
    rooms[b.0].connected.push(a);

    carve_passage(grid, link.tile_a, link.tile_b, radius);
    debug!(
        from = a.0,
        to = b.0,
        start = ?(link.tile_a.x, link.tile_a.y),
        end = ?(link.tile_b.x, link.tile_b.y),
        distance_sq = link.distance,
        "passage carved"
    );

    Passage {
        from: a,
        to: b,
        start: link.tile_a,
        end: link.tile_b,
    }
}

/// Mark `start` and everything connected to it as reaching the main room.
fn mark_reachable(rooms: &mut [Room], start: RoomId) {
    let mut frontier = VecDeque::from([start]);
    while let Some(id) = frontier.pop_front() {
        let room = &mut rooms[id.0];
        if room.reaches_main {
            continue;
        }
        room.reaches_main = true;
        frontier.extend(room.connected.iter().copied());
    }
}
