use horde_nav::{find_path, Cell, Grid};
use proptest::prelude::*;

const COLS: usize = 12;
const ROWS: usize = 9;

fn grid_strategy() -> impl Strategy<Value = Grid> {
    // Roughly one blocked cell in four.
    prop::collection::vec(prop::bool::weighted(0.25), COLS * ROWS).prop_map(|flags| {
        let rows = flags
            .chunks(COLS)
            .map(|row| row.iter().map(|&b| u8::from(b)).collect())
            .collect();
        Grid::from_rows(rows).expect("fixed dimensions")
    })
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (0..COLS as i32, 0..ROWS as i32).prop_map(|(x, y)| Cell::new(x, y))
}

proptest! {
    #[test]
    fn returned_paths_are_connected_and_walkable(
        grid in grid_strategy(),
        start in cell_strategy(),
        goal in cell_strategy(),
    ) {
        let path = find_path(start, goal, &grid);
        if !path.is_empty() {
            prop_assert!(path.is_valid_on(&grid));
            prop_assert_eq!(path.first(), Some(start));
            let mut seen = std::collections::HashSet::new();
            prop_assert!(path.cells().iter().all(|c| seen.insert(*c)), "path revisits a cell");
        }
    }

    #[test]
    fn fallback_never_ends_farther_from_goal_than_start(
        grid in grid_strategy(),
        start in cell_strategy(),
        goal in cell_strategy(),
    ) {
        let path = find_path(start, goal, &grid);
        if let Some(last) = path.last() {
            if last != goal {
                prop_assert!(last.manhattan(goal) <= start.manhattan(goal));
                prop_assert!(last != start);
            }
        }
    }

    #[test]
    fn open_grid_paths_have_manhattan_length(
        start in cell_strategy(),
        goal in cell_strategy(),
    ) {
        let grid = Grid::new(COLS, ROWS).unwrap();
        let path = find_path(start, goal, &grid);
        prop_assert_eq!(path.len() as u32, start.manhattan(goal) + 1);
        prop_assert_eq!(path.last(), Some(goal));
    }
}
