use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{config::CornerRule, grid::Occupancy, DIAGONAL_COST, STRAIGHT_COST};

/// The 8 neighbour offsets: the 4 axis-aligned moves first, then the diagonals. Expansion follows
/// this order, which keeps tie-breaking between equal-cost paths reproducible.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) type Successors = SmallVec<[(Point, i32); 8]>;

pub fn is_diagonal(dx: i32, dy: i32) -> bool {
    dx != 0 && dy != 0
}

/// [STRAIGHT_COST] for axis-aligned steps, [DIAGONAL_COST] for diagonal ones.
pub fn move_cost(dx: i32, dy: i32) -> i32 {
    if is_diagonal(dx, dy) {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

/// Octile distance in integer cost units: as many diagonal steps as possible, then straight ones.
/// Equal to `10 * max(dx, dy) + 4 * min(dx, dy)`, which never exceeds the cost of any real path,
/// walls or not.
pub fn heuristic(p1: &Point, p2: &Point) -> i32 {
    let dx = (p1.x - p2.x).abs();
    let dy = (p1.y - p2.y).abs();
    STRAIGHT_COST * (dx + dy) + (DIAGONAL_COST - 2 * STRAIGHT_COST) * dx.min(dy)
}

/// Whether a single step from `from` to the adjacent cell `to` is legal. `from` is assumed to be
/// in bounds.
pub fn can_move<G>(grid: &G, from: Point, to: Point, rule: CornerRule) -> bool
where
    G: Occupancy + ?Sized,
{
    debug_assert!((from.x - to.x).abs() <= 1 && (from.y - to.y).abs() <= 1);
    if !grid.is_free(to) {
        return false;
    }
    if !is_diagonal(to.x - from.x, to.y - from.y) {
        return true;
    }
    // Both corners share a row or column with an in-bounds endpoint, so they are in bounds too.
    let corner_a = grid.is_free(Point::new(from.x, to.y));
    let corner_b = grid.is_free(Point::new(to.x, from.y));
    match rule {
        CornerRule::BothBlocked => corner_a || corner_b,
        CornerRule::AnyBlocked => corner_a && corner_b,
    }
}

/// Legal neighbours of `pos` paired with the cost of stepping onto them, in [DIRECTIONS] order.
pub(crate) fn successors<G>(grid: &G, pos: &Point, rule: CornerRule) -> Successors
where
    G: Occupancy + ?Sized,
{
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| (Point::new(pos.x + dx, pos.y + dy), move_cost(dx, dy)))
        .filter(|&(p, _)| can_move(grid, *pos, p, rule))
        .collect()
}
