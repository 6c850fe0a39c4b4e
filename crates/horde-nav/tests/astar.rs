use horde_nav::{find_path, Cell, Endpoint, Grid, Path, PathEvent, PathFinder, VecSink};

fn open(cols: usize, rows: usize) -> Grid {
    Grid::new(cols, rows).unwrap()
}

#[test]
fn start_equal_goal_yields_single_cell() {
    let grid = open(5, 5);
    let path = find_path(Cell::new(2, 2), Cell::new(2, 2), &grid);
    assert_eq!(path.cells(), &[Cell::new(2, 2)]);
}

#[test]
fn out_of_bounds_start_yields_empty_and_reports_endpoint() {
    let grid = open(5, 5);
    let mut sink = VecSink::default();
    let path = PathFinder::default().find_path_with(
        Cell::new(-1, 0),
        Cell::new(0, 0),
        &grid,
        &mut sink,
    );

    assert!(path.is_empty());
    assert_eq!(
        sink.events,
        vec![PathEvent::OutOfBounds {
            endpoint: Endpoint::Start,
            cell: Cell::new(-1, 0),
        }]
    );
}

#[test]
fn out_of_bounds_goal_yields_empty() {
    let grid = open(5, 5);
    let mut sink = VecSink::default();
    let path =
        PathFinder::default().find_path_with(Cell::new(0, 0), Cell::new(5, 0), &grid, &mut sink);

    assert!(path.is_empty());
    assert!(matches!(
        sink.events.as_slice(),
        [PathEvent::OutOfBounds {
            endpoint: Endpoint::Goal,
            ..
        }]
    ));
}

#[test]
fn blocked_start_yields_empty() {
    let mut grid = open(5, 5);
    grid.set_blocked(Cell::new(0, 0), true);
    let mut sink = VecSink::default();

    let path =
        PathFinder::default().find_path_with(Cell::new(0, 0), Cell::new(3, 3), &grid, &mut sink);

    assert!(path.is_empty());
    assert_eq!(sink.tags(), vec!["blocked"]);
}

#[test]
fn blocked_goal_yields_empty() {
    let mut grid = open(5, 5);
    grid.set_blocked(Cell::new(3, 3), true);

    let path = find_path(Cell::new(0, 0), Cell::new(3, 3), &grid);
    assert!(path.is_empty());
}

#[test]
fn open_grid_path_is_manhattan_optimal() {
    let grid = open(10, 10);
    let path = find_path(Cell::new(0, 0), Cell::new(3, 4), &grid);

    assert_eq!(path.len(), 8);
    assert_eq!(path.cost(), 7);
    assert_eq!(path.first(), Some(Cell::new(0, 0)));
    assert_eq!(path.last(), Some(Cell::new(3, 4)));
    assert!(path.is_valid_on(&grid));
}

#[test]
fn path_routes_around_wall_through_gap() {
    let grid = Grid::from_ascii(
        "
        .....
        ..#..
        ..#..
        ..#..
        .....
        ",
    )
    .unwrap();
    // Wall spans rows 1..=3 in column 2; the shortest detour goes over or under it.
    let path = find_path(Cell::new(0, 2), Cell::new(4, 2), &grid);

    assert!(path.is_valid_on(&grid));
    assert_eq!(path.first(), Some(Cell::new(0, 2)));
    assert_eq!(path.last(), Some(Cell::new(4, 2)));
    assert_eq!(path.cost(), 8);
    assert!(!path.cells().contains(&Cell::new(2, 2)));
}

#[test]
fn search_is_deterministic_for_same_input() {
    let mut grid = open(10, 10);
    for y in 0..10 {
        grid.set_blocked(Cell::new(5, y), true);
    }
    grid.set_blocked(Cell::new(5, 5), false);

    let a = find_path(Cell::new(1, 1), Cell::new(8, 8), &grid);
    let b = find_path(Cell::new(1, 1), Cell::new(8, 8), &grid);

    assert_eq!(a, b);
    assert!(a.cells().contains(&Cell::new(5, 5)));
}

#[test]
fn enclosed_goal_falls_back_to_closest_reachable_cell() {
    // Goal (3,1) is walkable but walled in on all four sides.
    let grid = Grid::from_ascii(
        "
        ...#...
        ..#.#..
        ...#...
        .......
        ",
    )
    .unwrap();
    let mut sink = VecSink::default();

    let path =
        PathFinder::default().find_path_with(Cell::new(0, 3), Cell::new(3, 1), &grid, &mut sink);

    assert!(path.is_valid_on(&grid));
    assert_eq!(path.first(), Some(Cell::new(0, 3)));
    // Several reachable cells sit two steps away; the column-major scan meets (1,1) first.
    assert_eq!(path.last(), Some(Cell::new(1, 1)));
    assert_eq!(
        sink.tags(),
        vec![
            "search_started",
            "unreachable",
            "fallback_target",
            "search_started",
            "path_found",
        ]
    );
    assert!(sink.events.contains(&PathEvent::FallbackTarget {
        requested: Cell::new(3, 1),
        substitute: Cell::new(1, 1),
        attempt: 1,
    }));
}

#[test]
fn disconnected_region_gives_path_to_nearest_reachable_cell() {
    // Start lives in the left pocket; goal is across a solid wall.
    let grid = Grid::from_ascii(
        "
        ..#...
        ..#...
        ..#...
        ",
    )
    .unwrap();

    let path = find_path(Cell::new(0, 0), Cell::new(4, 1), &grid);

    assert!(path.is_valid_on(&grid));
    assert_eq!(path.first(), Some(Cell::new(0, 0)));
    assert_eq!(path.last(), Some(Cell::new(1, 1)));
}

#[test]
fn isolated_start_yields_empty_when_closest_cell_is_start() {
    let grid = Grid::from_ascii(
        "
        .#...
        ##...
        .....
        ",
    )
    .unwrap();
    let mut sink = VecSink::default();

    let path =
        PathFinder::default().find_path_with(Cell::new(0, 0), Cell::new(4, 2), &grid, &mut sink);

    assert_eq!(path, Path::empty());
    assert_eq!(sink.tags().last().copied(), Some("no_path"));
    assert!(!sink.tags().contains(&"fallback_target"));
}

#[test]
fn zero_fallback_attempts_disables_retry() {
    let grid = Grid::from_ascii(
        "
        ..#...
        ..#...
        ",
    )
    .unwrap();
    let mut sink = VecSink::default();

    let path = PathFinder::new()
        .with_max_fallback_attempts(0)
        .find_path_with(Cell::new(0, 0), Cell::new(5, 0), &grid, &mut sink);

    assert!(path.is_empty());
    assert_eq!(sink.tags(), vec!["search_started", "unreachable", "no_path"]);
}

#[test]
fn expansion_budget_stops_search_without_fallback() {
    let grid = open(30, 30);
    let mut sink = VecSink::default();

    let path = PathFinder::new()
        .with_max_expansions(Some(3))
        .find_path_with(Cell::new(0, 0), Cell::new(29, 29), &grid, &mut sink);

    assert!(path.is_empty());
    assert_eq!(sink.tags(), vec!["search_started", "budget_exhausted", "no_path"]);
}

#[test]
fn generous_budget_does_not_change_result() {
    let grid = open(12, 12);
    let unbounded = find_path(Cell::new(0, 0), Cell::new(11, 7), &grid);
    let bounded = PathFinder::new()
        .with_max_expansions(Some(10_000))
        .find_path(Cell::new(0, 0), Cell::new(11, 7), &grid);

    assert_eq!(unbounded, bounded);
}
