//! # octile_astar
//!
//! Shortest paths on 2D occupancy grids with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is 8-directional with
//! integer costs: 10 for a straight step and 14 for a diagonal one. The heuristic is the
//! [octile distance](https://theory.stanford.edu/~amitp/GameProgramming/Heuristics.html#diagonal-distance)
//! in the same units, so returned paths are optimal.
//!
//! Diagonal steps may not squeeze between two blocked corner cells; [CornerRule] selects whether
//! a single blocked corner is enough to forbid them. Optionally,
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are computed
//! first so that disconnected endpoints are rejected without searching.
//!
//! ```
//! use octile_astar::{OccupancyGrid, PathSearch, Point};
//!
//! let grid: OccupancyGrid = "S..\n.#.\n..G".parse().unwrap();
//! let path = PathSearch::new()
//!     .find_path(&grid, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap();
//! assert_eq!(octile_astar::path_cost(&path), 34);
//! ```
pub mod astar;
pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod moves;
pub mod search;

pub use components::Components;
pub use config::{CornerRule, SearchConfig};
pub use error::{ParseGridError, Result, SearchError};
pub use grid::{Occupancy, OccupancyGrid};
pub use grid_util::point::Point;
pub use search::{path_cost, PathSearch, SearchResult};

/// Cost of an axis-aligned step.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of a diagonal step, 10 times an approximation of √2.
pub const DIAGONAL_COST: i32 = 14;
