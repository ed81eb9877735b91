use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::{
    config::CornerRule,
    grid::Occupancy,
    moves::{can_move, DIRECTIONS},
};

/// Connected components of the free cells of a grid under a given [CornerRule]. Two cells share a
/// component exactly when a path exists between them, so a single lookup answers reachability
/// without running a search.
#[derive(Clone, Debug)]
pub struct Components {
    corner_rule: CornerRule,
    /// Component id per cell, laid out like the searched grid: rows along the width.
    labels: SimpleGrid<usize>,
}

impl Components {
    /// Links every free cell to its legal neighbours. Moves are symmetric under both corner rules,
    /// so looking at the four forward directions (down, right and the two diagonals below)
    /// covers every edge once.
    pub fn generate<G>(grid: &G, corner_rule: CornerRule) -> Components
    where
        G: Occupancy + ?Sized,
    {
        let rows = grid.rows();
        let cols = grid.cols();
        info!("Generating connected components for a {}x{} grid", rows, cols);
        let mut labels: SimpleGrid<usize> = SimpleGrid::new(rows, cols, 0);
        let mut sets = UnionFind::new(rows * cols);
        for x in 0..rows as i32 {
            for y in 0..cols as i32 {
                let point = Point::new(x, y);
                if !grid.is_free(point) {
                    continue;
                }
                let ix = labels.get_ix_point(&point);
                for (dx, dy) in DIRECTIONS {
                    if dx < 0 || (dx == 0 && dy < 0) {
                        continue;
                    }
                    let n = Point::new(x + dx, y + dy);
                    if can_move(grid, point, n, corner_rule) {
                        sets.union(ix, labels.get_ix_point(&n));
                    }
                }
            }
        }
        for x in 0..rows {
            for y in 0..cols {
                let root = sets.find(labels.get_ix(x, y));
                labels.set(x, y, root);
            }
        }
        Components {
            corner_rule,
            labels,
        }
    }

    pub fn corner_rule(&self) -> CornerRule {
        self.corner_rule
    }

    /// Retrieves the component id a given [Point] belongs to. Blocked cells are singleton
    /// components.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.labels
            .point_in_bounds(*point)
            .then(|| self.labels.get_point(*point))
    }

    /// Checks if start and goal are on the same component. Out-of-bounds points reach nothing.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.component(start), self.component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}
