use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use grid_util::rect::Rect;
use std::str::FromStr;

use crate::error::ParseGridError;

/// Read-only view of a `rows x cols` occupancy matrix where `true` marks a blocked cell. Points
/// index it as `x` for the row and `y` for the column.
pub trait Occupancy {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Only called for points accepted by [in_bounds](Self::in_bounds).
    fn is_blocked(&self, x: usize, y: usize) -> bool;

    fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.rows()
            && (point.y as usize) < self.cols()
    }
    /// In bounds and not blocked.
    fn is_free(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.is_blocked(point.x as usize, point.y as usize)
    }
}

/// A [BoolGrid] is read with rows along its width and columns along its height.
impl Occupancy for BoolGrid {
    fn rows(&self) -> usize {
        self.width
    }
    fn cols(&self) -> usize {
        self.height
    }
    fn is_blocked(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }
    fn in_bounds(&self, point: Point) -> bool {
        self.point_in_bounds(point)
    }
}

/// Owned occupancy grid backed by a [BoolGrid].
#[derive(Clone, Debug, Default)]
pub struct OccupancyGrid {
    pub grid: BoolGrid,
}

impl OccupancyGrid {
    pub fn new(rows: usize, cols: usize, blocked: bool) -> OccupancyGrid {
        OccupancyGrid {
            grid: BoolGrid::new(rows, cols, blocked),
        }
    }
    /// Builds a grid by querying `is_blocked(x, y)` once per cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut is_blocked: F) -> OccupancyGrid
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut grid = BoolGrid::new(rows, cols, false);
        for x in 0..rows {
            for y in 0..cols {
                grid.set(x, y, is_blocked(x, y));
            }
        }
        OccupancyGrid { grid }
    }
    /// Panics if `(x, y)` is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, blocked: bool) {
        assert!(self.grid.index_in_bounds(x, y), "({x}, {y}) out of bounds");
        self.grid.set(x, y, blocked);
    }
    pub fn set_point(&mut self, point: Point, blocked: bool) {
        assert!(self.grid.point_in_bounds(point), "{point} out of bounds");
        self.grid.set_point(point, blocked);
    }
    /// Blocks or frees every cell of `rect` (rows along `x`, columns along `y`), clipped to the
    /// grid.
    pub fn set_rect(&mut self, rect: &Rect, blocked: bool) {
        let clipped = Rect {
            x1: rect.x1.max(0),
            x2: rect.x2.min(self.grid.width as i32),
            y1: rect.y1.max(0),
            y2: rect.y2.min(self.grid.height as i32),
        };
        if clipped.x1 < clipped.x2 && clipped.y1 < clipped.y2 {
            self.grid.set_rectangle(&clipped, blocked);
        }
    }
    pub fn blocked_count(&self) -> usize {
        self.grid
            .rect()
            .points_in()
            .into_iter()
            .filter(|p| self.grid.get_point(*p))
            .count()
    }
}

impl From<BoolGrid> for OccupancyGrid {
    fn from(grid: BoolGrid) -> OccupancyGrid {
        OccupancyGrid { grid }
    }
}

/// Cell-wise equality; the padding bits of the backing words are ignored.
impl PartialEq for OccupancyGrid {
    fn eq(&self, other: &Self) -> bool {
        self.grid.width == other.grid.width
            && self.grid.height == other.grid.height
            && self
                .grid
                .rect()
                .points_in()
                .into_iter()
                .all(|p| self.grid.get_point(p) == other.grid.get_point(p))
    }
}

impl Eq for OccupancyGrid {}

impl Occupancy for OccupancyGrid {
    fn rows(&self) -> usize {
        self.grid.rows()
    }
    fn cols(&self) -> usize {
        self.grid.cols()
    }
    fn is_blocked(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    fn in_bounds(&self, point: Point) -> bool {
        self.grid.point_in_bounds(point)
    }
}

/// The `walls[x][y]` layout used by editors that keep one vector per row. Rows may differ in
/// length: cells past the end of a short row count as out of bounds, and `cols` reports the
/// longest row.
impl Occupancy for Vec<Vec<bool>> {
    fn rows(&self) -> usize {
        self.len()
    }
    fn cols(&self) -> usize {
        self.iter().map(Vec::len).max().unwrap_or(0)
    }
    fn is_blocked(&self, x: usize, y: usize) -> bool {
        self[x][y]
    }
    fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && self
                .get(point.x as usize)
                .map_or(false, |row| (point.y as usize) < row.len())
    }
}

/// Parses one row per line: `#` is a wall, `.`, `S` and `G` are free. Surrounding blank lines and
/// trailing whitespace are ignored.
impl FromStr for OccupancyGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect::<Vec<_>>();
        let lines = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(ParseGridError::Empty),
        };
        let cols = lines[0].chars().count();
        let mut grid = BoolGrid::new(lines.len(), cols, false);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseGridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let blocked = match c {
                    '#' => true,
                    '.' | 'S' | 'G' => false,
                    found => return Err(ParseGridError::UnknownCell { row, col, found }),
                };
                grid.set(row, col, blocked);
            }
        }
        Ok(OccupancyGrid { grid })
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for x in 0..self.rows() {
            let line = (0..self.cols())
                .map(|y| if self.is_blocked(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let grid: OccupancyGrid = "S.#\n.##\n..G\n".parse().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert!(grid.is_blocked(0, 2));
        assert!(grid.is_blocked(1, 1));
        assert!(!grid.is_blocked(2, 0));
        assert_eq!(grid.blocked_count(), 3);
        assert_eq!(grid.to_string(), "..#\n.##\n...\n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("\n\n".parse::<OccupancyGrid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "...\n..\n".parse::<OccupancyGrid>(),
            Err(ParseGridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            ".x.".parse::<OccupancyGrid>(),
            Err(ParseGridError::UnknownCell {
                row: 0,
                col: 1,
                found: 'x'
            })
        );
    }

    #[test]
    fn bounds_and_freedom() {
        let mut grid = OccupancyGrid::new(2, 3, false);
        grid.set(1, 2, true);
        assert!(grid.in_bounds(Point::new(1, 2)));
        assert!(!grid.in_bounds(Point::new(2, 0)));
        assert!(!grid.in_bounds(Point::new(0, 3)));
        assert!(!grid.in_bounds(Point::new(-1, 0)));
        assert!(!grid.is_free(Point::new(1, 2)));
        assert!(grid.is_free(Point::new(0, 0)));
        assert!(!grid.is_free(Point::new(0, -1)));
    }

    #[test]
    fn set_rect_clips_to_grid() {
        let mut grid = OccupancyGrid::new(4, 4, false);
        grid.set_rect(&Rect::new(2, -3, 8, 5), true);
        assert_eq!(grid.blocked_count(), 4);
        assert!(grid.is_blocked(3, 0) && grid.is_blocked(2, 1));
        grid.set_rect(&Rect::new(10, 10, 3, 3), true);
        assert_eq!(grid.blocked_count(), 4);
    }

    #[test]
    fn bool_grid_orientation() {
        // Rows run along the width of the backing grid.
        let mut bool_grid = BoolGrid::new(3, 2, false);
        bool_grid.set(2, 1, true);
        assert_eq!(bool_grid.rows(), 3);
        assert_eq!(bool_grid.cols(), 2);
        assert!(!bool_grid.is_free(Point::new(2, 1)));
        assert!(!bool_grid.in_bounds(Point::new(1, 2)));
        let grid = OccupancyGrid::from(bool_grid);
        assert_eq!(grid.to_string(), "..\n..\n.#\n");
    }

    #[test]
    fn ragged_rows_are_out_of_bounds() {
        let walls = vec![vec![false; 3], vec![false], vec![false; 2]];
        assert_eq!(walls.cols(), 3);
        assert!(walls.in_bounds(Point::new(0, 2)));
        assert!(!walls.in_bounds(Point::new(1, 1)));
        assert!(!walls.is_free(Point::new(2, 2)));
        assert!(walls.is_free(Point::new(2, 1)));
        assert!(!walls.in_bounds(Point::new(3, 0)));
    }

    #[test]
    fn nested_vectors_and_from_fn_agree() {
        let walls = vec![vec![false, true], vec![false, false], vec![true, false]];
        let grid = OccupancyGrid::from_fn(3, 2, |x, y| walls[x][y]);
        assert_eq!(walls.rows(), grid.rows());
        assert_eq!(walls.cols(), grid.cols());
        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(walls.is_blocked(x, y), grid.is_blocked(x, y));
            }
        }
    }
}
