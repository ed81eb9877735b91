//! Error types for path searches and grid parsing.

use grid_util::point::Point;
use thiserror::Error;

/// Reasons a search request is rejected or abandoned. An unreachable goal is not an error: it is
/// reported as an empty path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("point {point} lies outside the {rows}x{cols} grid")]
    OutOfBounds { point: Point, rows: usize, cols: usize },

    #[error("point {point} is blocked")]
    BlockedEndpoint { point: Point },

    #[error("search gave up after expanding {expanded} nodes (limit {limit})")]
    ExpansionLimit { limit: usize, expanded: usize },
}

/// Failure to read an ASCII map into an [OccupancyGrid](crate::grid::OccupancyGrid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("map contains no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell character {found:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, found: char },
}

pub type Result<T> = std::result::Result<T, SearchError>;
