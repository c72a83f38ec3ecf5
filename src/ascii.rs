//! ASCII rendering and export for finished areas
//!
//! Rows are printed top-down, so the first line of output is `y = size - 1`
//! (the top side) and the last is `y = 0` (the bottom side).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::area::{AreaDescriptor, Side};
use crate::cell::CaveGrid;
use crate::generation::CaveMap;

/// Render the grid with one glyph per cell.
pub fn render_ascii(grid: &CaveGrid) -> String {
    let mut out = String::with_capacity((grid.width + 1) * grid.height);
    for y in (0..grid.height).rev() {
        for x in 0..grid.width {
            out.push(grid.get(x, y).glyph());
        }
        out.push('\n');
    }
    out
}

/// Render an edge pattern on one line.
pub fn render_edge(map: &CaveMap, side: Side) -> String {
    map.edge(side).cells.iter().map(|c| c.glyph()).collect()
}

/// Write a text report for one area: header, map, room list and edges.
pub fn export_map_file(
    map: &CaveMap,
    area: &dyn AreaDescriptor,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    let size = map.size();

    writeln!(file, "=== CAVE AREA {} ===", area.identity())?;
    writeln!(file, "Seed: {}", map.seed)?;
    writeln!(file, "Size: {}x{}", size, size)?;
    writeln!(
        file,
        "Open cells: {} ({:.1}%)",
        map.open_cell_count(),
        100.0 * map.open_cell_count() as f64 / (size * size) as f64
    )?;
    if let Some(gap) = map.transition {
        writeln!(file, "Transition gap: {} side at {}", gap.side, gap.offset)?;
    }
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    writeln!(file, "=== MAP ===")?;
    write!(file, "{}", render_ascii(&map.grid))?;
    writeln!(file)?;

    writeln!(file, "=== ROOMS ===")?;
    for (index, room) in map.rooms.iter().enumerate() {
        let marker = if room.is_main { " (main)" } else { "" };
        writeln!(
            file,
            "#{:<3} {:>5} cells, {:>5} edge tiles, {} links{}",
            index,
            room.size,
            room.edge_tiles.len(),
            room.connected.len(),
            marker
        )?;
    }
    writeln!(file, "Passages carved: {}", map.passages.len())?;
    writeln!(file)?;

    writeln!(file, "=== EDGES ===")?;
    for side in Side::ALL {
        let edge = map.edge(side);
        writeln!(
            file,
            "{:<6} {} ({} open)",
            side.to_string(),
            render_edge(map, side),
            edge.open_count()
        )?;
    }

    Ok(())
}
