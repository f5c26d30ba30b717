use serde::{Deserialize, Serialize};

use super::state::Point;

/// Bounded playing field, measured in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Divide a pixel canvas into whole cells, dropping any partial cell
    pub fn from_canvas(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        let cell = cell_size.max(1);
        Self {
            width: (canvas_width / cell) as i32,
            height: (canvas_height / cell) as i32,
        }
    }

    /// Check if a point lies in [0, width) x [0, height)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_canvas_floors() {
        assert_eq!(Grid::from_canvas(400, 400, 20), Grid::new(20, 20));
        assert_eq!(Grid::from_canvas(410, 399, 20), Grid::new(20, 19));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 20);

        assert!(grid.contains(Point::new(0, 0)));
        assert!(grid.contains(Point::new(19, 19)));
        assert!(!grid.contains(Point::new(-1, 0)));
        assert!(!grid.contains(Point::new(20, 0)));
        assert!(!grid.contains(Point::new(0, 20)));
        assert!(!grid.contains(Point::new(0, -1)));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(3, 2);
        let cells: Vec<Point> = grid.cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Point::new(0, 0));
        assert_eq!(cells[5], Point::new(2, 1));
        assert!(cells.iter().all(|&p| grid.contains(p)));
    }
}
