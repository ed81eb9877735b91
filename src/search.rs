use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    astar::{astar, Outcome},
    components::Components,
    config::SearchConfig,
    error::{Result, SearchError},
    grid::Occupancy,
    moves::{heuristic, move_cost, successors},
};

/// A found path together with its cost and the number of nodes expanded to find it. An
/// unreachable goal yields an empty path with cost 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Vec<Point>,
    pub cost: i32,
    pub expanded: usize,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Sums the step costs along a path. Empty and single-point paths cost 0.
pub fn path_cost(path: &[Point]) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| move_cost(b.x - a.x, b.y - a.y))
        .sum()
}

/// A* over 8-connected occupancy grids with [STRAIGHT_COST](crate::STRAIGHT_COST) and
/// [DIAGONAL_COST](crate::DIAGONAL_COST) steps. Holds no per-search state, so one instance can
/// serve any number of grids and calls.
#[derive(Clone, Debug, Default)]
pub struct PathSearch {
    pub config: SearchConfig,
}

impl PathSearch {
    pub fn new() -> PathSearch {
        PathSearch::default()
    }

    pub fn with_config(config: SearchConfig) -> PathSearch {
        PathSearch { config }
    }

    /// Computes a shortest path from `start` to `goal`, both included. Returns an empty path if the
    /// goal cannot be reached.
    pub fn find_path<G>(&self, grid: &G, start: Point, goal: Point) -> Result<Vec<Point>>
    where
        G: Occupancy + ?Sized,
    {
        self.search(grid, start, goal).map(|r| r.path)
    }

    /// Like [find_path](Self::find_path), but also reports the path cost and search effort.
    pub fn search<G>(&self, grid: &G, start: Point, goal: Point) -> Result<SearchResult>
    where
        G: Occupancy + ?Sized,
    {
        check_endpoint(grid, start)?;
        check_endpoint(grid, goal)?;
        if self.config.use_components
            && Components::generate(grid, self.config.corner_rule).unreachable(&start, &goal)
        {
            debug!("{} and {} are on different components", start, goal);
            return Ok(SearchResult::default());
        }
        self.search_unchecked(grid, start, goal)
    }

    /// Same as [search](Self::search) with a precomputed component map. The map must have been
    /// generated from the same grid contents; a map built with another [CornerRule](crate::CornerRule)
    /// is ignored.
    pub fn search_with_components<G>(
        &self,
        grid: &G,
        components: &Components,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult>
    where
        G: Occupancy + ?Sized,
    {
        check_endpoint(grid, start)?;
        check_endpoint(grid, goal)?;
        if components.corner_rule() != self.config.corner_rule {
            warn!("Component map uses a different corner rule, searching without it");
        } else if components.unreachable(&start, &goal) {
            debug!("{} and {} are on different components", start, goal);
            return Ok(SearchResult::default());
        }
        self.search_unchecked(grid, start, goal)
    }

    fn search_unchecked<G>(&self, grid: &G, start: Point, goal: Point) -> Result<SearchResult>
    where
        G: Occupancy + ?Sized,
    {
        debug!("Searching from {} to {}", start, goal);
        let rule = self.config.corner_rule;
        match astar(
            &start,
            |node| successors(grid, node, rule),
            |point| heuristic(point, &goal),
            |point| *point == goal,
            self.config.expansion_limit,
        ) {
            Outcome::Found {
                path,
                cost,
                expanded,
            } => {
                debug!(
                    "Found path of {} points with cost {} after {} expansions",
                    path.len(),
                    cost,
                    expanded
                );
                Ok(SearchResult {
                    path,
                    cost,
                    expanded,
                })
            }
            Outcome::Exhausted { expanded } => {
                debug!("{} is not reachable from {} ({} expansions)", goal, start, expanded);
                Ok(SearchResult {
                    expanded,
                    ..SearchResult::default()
                })
            }
            // Only a configured limit can abort a search.
            Outcome::Aborted { expanded } => Err(SearchError::ExpansionLimit {
                limit: self.config.expansion_limit.unwrap_or(expanded),
                expanded,
            }),
        }
    }
}

fn check_endpoint<G>(grid: &G, point: Point) -> Result<()>
where
    G: Occupancy + ?Sized,
{
    if !grid.in_bounds(point) {
        return Err(SearchError::OutOfBounds {
            point,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if grid.is_blocked(point.x as usize, point.y as usize) {
        return Err(SearchError::BlockedEndpoint { point });
    }
    Ok(())
}
