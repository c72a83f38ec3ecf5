//! Passage carving
//!
//! A passage is an integer line between two tiles with a filled disc stamped
//! at every point, which leaves a rounded tunnel of uniform width.

use crate::cell::{Cell, CaveGrid, Position};

/// Integer line from `from` towards `to` by error accumulation.
///
/// Steps along the axis with the larger delta and accumulates error on the
/// other one. Emits `max(|dx|, |dy|)` points starting with `from`; the
/// destination itself is not included, and equal endpoints yield no points.
pub fn get_line(from: Position, to: Position) -> Vec<Position> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut step = dx.signum();
    let mut gradient_step = dy.signum();
    let mut longest = dx.abs();
    let mut shortest = dy.abs();

    let inverted = longest < shortest;
    if inverted {
        longest = dy.abs();
        shortest = dx.abs();
        step = dy.signum();
        gradient_step = dx.signum();
    }

    let mut line = Vec::with_capacity(longest as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut gradient_accumulation = longest / 2;

    for _ in 0..longest {
        line.push(Position::new(x, y));

        if inverted {
            y += step;
        } else {
            x += step;
        }

        gradient_accumulation += shortest;
        if gradient_accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            gradient_accumulation -= longest;
        }
    }

    line
}

/// Open every in-range cell within `radius` of `center` (`dx² + dy² <= r²`).
///
/// Only the part of the disc's bounding box that overlaps the grid is visited.
pub fn draw_circle(grid: &mut CaveGrid, center: Position, radius: i32) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
    let r_sq = r * r;

    let x_range = (cx - r).max(0)..=(cx + r).min(grid.width as i64 - 1);
    for x in x_range {
        let dx = x - cx;
        for y in (cy - r).max(0)..=(cy + r).min(grid.height as i64 - 1) {
            let dy = y - cy;
            if dx * dx + dy * dy <= r_sq {
                grid.set(x as usize, y as usize, Cell::Open);
            }
        }
    }
}

/// Carve a tunnel from `from` to `to` with a brush of `radius`.
pub fn carve_passage(grid: &mut CaveGrid, from: Position, to: Position, radius: i32) {
    for point in get_line(from, to) {
        draw_circle(grid, point, radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_horizontal_line_excludes_destination() {
        let line = get_line(Position::new(0, 0), Position::new(4, 0));
        let expected: Vec<Position> = (0..4).map(|x| Position::new(x, 0)).collect();
        assert_eq!(line, expected);
    }

    #[test]
    fn test_steep_line_drives_on_y() {
        let line = get_line(Position::new(0, 0), Position::new(2, 6));
        assert_eq!(line.len(), 6);
        for (i, p) in line.iter().enumerate() {
            assert_eq!(p.y, i as i32);
        }
        assert_eq!(line[0], Position::new(0, 0));
        assert!(line.last().map_or(false, |p| p.x <= 2));
    }

    #[test]
    fn test_identical_endpoints_yield_nothing() {
        assert!(get_line(Position::new(3, 3), Position::new(3, 3)).is_empty());
    }

    #[test]
    fn test_circle_clipped_at_border() {
        let mut grid = CaveGrid::new(10, 10);
        draw_circle(&mut grid, Position::new(0, 0), 2);
        // Quarter disc of radius 2: (0,0),(1,0),(2,0),(0,1),(1,1),(0,2).
        assert_eq!(grid.count(&Cell::Open), 6);
    }

    #[test]
    fn test_oversized_brush_is_clipped() {
        let mut grid = CaveGrid::new(10, 10);
        draw_circle(&mut grid, Position::new(5, 5), 50_000);
        assert_eq!(grid.count(&Cell::Open), 100);

        let mut far = CaveGrid::new(10, 10);
        draw_circle(&mut far, Position::new(40, 40), 3);
        assert_eq!(far.count(&Cell::Open), 0);
    }

    #[test]
    fn test_band_extent_matches_radius() {
        let mut grid = CaveGrid::new(30, 30);
        carve_passage(&mut grid, Position::new(0, 0), Position::new(10, 0), 10);

        let open_at_x5: Vec<usize> = (0..30).filter(|&y| grid.get(5, y).is_open()).collect();
        let expected: Vec<usize> = (0..30).filter(|&y| y * y <= 100).collect();
        assert_eq!(open_at_x5, expected);
    }

    proptest! {
        #[test]
        fn prop_line_steps_are_unit_and_bounded(
            x0 in -20i32..20, y0 in -20i32..20, x1 in -20i32..20, y1 in -20i32..20,
        ) {
            let from = Position::new(x0, y0);
            let to = Position::new(x1, y1);
            let line = get_line(from, to);

            let longest = (x1 - x0).abs().max((y1 - y0).abs());
            prop_assert_eq!(line.len() as i32, longest);
            if let Some(first) = line.first() {
                prop_assert_eq!(*first, from);
            }
            for pair in line.windows(2) {
                prop_assert!((pair[1].x - pair[0].x).abs() <= 1);
                prop_assert!((pair[1].y - pair[0].y).abs() <= 1);
            }
            for p in &line {
                prop_assert!(p.x >= x0.min(x1) && p.x <= x0.max(x1));
                prop_assert!(p.y >= y0.min(y1) && p.y <= y0.max(y1));
            }
        }
    }
}
