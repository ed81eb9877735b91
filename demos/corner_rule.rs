use octile_astar::{CornerRule, OccupancyGrid, PathSearch, Point, SearchConfig};

// Compares the two corner rules on a grid where the shortest route clips wall corners.
// S marks the start and G the goal.
const MAP: &str = "
S.#...
.#..#.
...#.G
";

fn main() {
    let grid: OccupancyGrid = match MAP.parse() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Could not parse map: {}", e);
            return;
        }
    };
    let start = Point::new(0, 0);
    let goal = Point::new(2, 5);
    for rule in [CornerRule::BothBlocked, CornerRule::AnyBlocked] {
        let search = PathSearch::with_config(SearchConfig::default().with_corner_rule(rule));
        match search.search(&grid, start, goal) {
            Ok(result) if result.is_found() => println!(
                "{:?}: cost {} over {} cells, {} expansions",
                rule,
                result.cost,
                result.path.len(),
                result.expanded
            ),
            Ok(result) => println!("{:?}: no path ({} expansions)", rule, result.expanded),
            Err(e) => println!("{:?}: {}", rule, e),
        }
    }
}
