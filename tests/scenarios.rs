use octile_astar::{path_cost, OccupancyGrid, PathSearch, Point, SearchError};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn open_three_by_three() {
    let grid = OccupancyGrid::new(3, 3, false);
    let path = PathSearch::new().find_path(&grid, p(0, 0), p(2, 2)).unwrap();
    assert_eq!(path, vec![p(0, 0), p(1, 1), p(2, 2)]);
    assert_eq!(path_cost(&path), 28);
}

#[test]
fn both_corners_blocked() {
    let mut grid = OccupancyGrid::new(3, 3, false);
    grid.set(0, 1, true);
    grid.set(1, 0, true);
    let path = PathSearch::new().find_path(&grid, p(0, 0), p(1, 1)).unwrap();
    assert!(path.is_empty());
}

#[test]
fn solid_wall_separates() {
    // .....#....
    // .....#....
    // .....#....
    // .....#....
    let grid: OccupancyGrid = ".....#....\n".repeat(4).parse().unwrap();
    let search = PathSearch::new();
    assert!(search.find_path(&grid, p(0, 0), p(3, 9)).unwrap().is_empty());
    assert!(search.find_path(&grid, p(2, 4), p(1, 6)).unwrap().is_empty());
    assert_eq!(
        search.find_path(&grid, p(0, 0), p(3, 4)).unwrap().len(),
        5
    );
}

#[test]
fn single_point_path() {
    let grid: OccupancyGrid = "#.#\n...".parse().unwrap();
    let search = PathSearch::new();
    let result = search.search(&grid, p(0, 1), p(0, 1)).unwrap();
    assert_eq!(result.path, vec![p(0, 1)]);
    assert_eq!(result.cost, 0);
    assert_eq!(path_cost(&result.path), 0);
}

#[test]
fn diagonal_gap_forces_detour() {
    // S#....
    // .#.#..
    // .##...
    // ......
    // The diagonal from (2, 3) up to the goal squeezes between (1, 3) and (2, 2), so the path
    // continues around (1, 3) and enters the goal from the top row.
    let grid: OccupancyGrid = "S#....\n.#.#..\n.##...\n......".parse().unwrap();
    let start = p(0, 0);
    let goal = p(1, 2);
    let path = PathSearch::new().find_path(&grid, start, goal).unwrap();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(!path.windows(2).any(|w| w[0] == p(2, 3) && w[1] == goal));
    // (0,0) (1,0) (2,0) (3,1) (3,2) (2,3) (1,4) (0,3) (1,2)
    assert_eq!(path_cost(&path), 10 + 10 + 14 + 10 + 14 + 14 + 14 + 14);
}

#[test]
fn unreachable_is_not_an_error() {
    let grid: OccupancyGrid = ".#.\n.#.\n.#.".parse().unwrap();
    let search = PathSearch::new();
    assert_eq!(search.find_path(&grid, p(0, 0), p(2, 2)), Ok(vec![]));
    assert!(matches!(
        search.find_path(&grid, p(0, 0), p(0, 3)),
        Err(SearchError::OutOfBounds { .. })
    ));
}
