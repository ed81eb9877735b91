use octile_astar::{path_cost, OccupancyGrid, PathSearch, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Rows are indexed by x and columns by y.

fn main() {
    let mut grid = OccupancyGrid::new(3, 3, false);
    grid.set(1, 1, true);
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    match PathSearch::new().find_path(&grid, start, end) {
        Ok(path) if !path.is_empty() => {
            println!("Path (cost {}):", path_cost(&path));
            for p in path {
                println!("{:?}", p);
            }
        }
        Ok(_) => println!("{} is not reachable from {}", end, start),
        Err(e) => println!("Invalid request: {}", e),
    }
}
