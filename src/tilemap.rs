/// Orthogonal offsets in x-major order.
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// A bounded 2D tilemap grid. Coordinates outside the grid are rejected, never wrapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Flat index of `(x, y)`. Panics outside the grid in every build, so a
    /// bad column can never alias a cell on the next row.
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} tilemap",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// True when the signed coordinate lies inside the grid.
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Signed lookup; `None` outside the grid.
    pub fn try_get(&self, x: i32, y: i32) -> Option<&T> {
        if self.in_range(x, y) {
            Some(self.get(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Orthogonal neighbors (4-connectivity) that lie inside the grid,
    /// in x-major order: left, down, up, right.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        ORTHOGONAL
            .iter()
            .map(|&(dx, dy)| (x as i32 + dx, y as i32 + dy))
            .filter(|&(nx, ny)| self.in_range(nx, ny))
            .map(|(nx, ny)| (nx as usize, ny as usize))
            .collect()
    }

    /// All 8 surrounding cells, or `None` when any of them falls outside the grid.
    pub fn neighbors_8(&self, x: usize, y: usize) -> Option<[(usize, usize); 8]> {
        if x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height {
            return None;
        }

        Some([
            (x + 1, y),
            (x - 1, y),
            (x, y - 1),
            (x, y + 1),
            (x + 1, y + 1),
            (x - 1, y - 1),
            (x + 1, y - 1),
            (x - 1, y + 1),
        ])
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.data.iter().filter(|v| *v == value).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_range_checks() {
        let map: Tilemap<u8> = Tilemap::new(4, 3);
        assert!(map.in_range(0, 0));
        assert!(map.in_range(3, 2));
        assert!(!map.in_range(-1, 0));
        assert!(!map.in_range(4, 0));
        assert!(!map.in_range(0, 3));
        assert_eq!(map.try_get(5, 5), None);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 tilemap")]
    fn test_column_past_width_never_wraps() {
        let map = Tilemap::new_with(3, 3, 0u8);
        // (3, 0) would alias (0, 1) in the flat buffer.
        map.get(3, 0);
    }

    #[test]
    fn test_neighbors_at_corner_and_center() {
        let map: Tilemap<u8> = Tilemap::new(5, 5);
        assert_eq!(map.neighbors(0, 0), vec![(0, 1), (1, 0)]);
        assert_eq!(map.neighbors(2, 2).len(), 4);
        assert!(map.neighbors_8(0, 2).is_none());
        assert!(map.neighbors_8(4, 2).is_none());
        assert_eq!(map.neighbors_8(2, 2).map(|n| n.len()), Some(8));
    }
}
