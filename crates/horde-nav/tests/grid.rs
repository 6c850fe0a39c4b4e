use horde_core::Vec2;
use horde_nav::{Cell, CellMapping, Grid, GridError};

#[test]
fn from_rows_reads_row_major_flags() {
    let grid = Grid::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1]]).unwrap();

    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.rows(), 2);
    assert!(grid.is_blocked(Cell::new(1, 0)));
    assert!(grid.is_blocked(Cell::new(2, 1)));
    assert!(grid.is_walkable(Cell::new(0, 1)));
}

#[test]
fn from_rows_rejects_bad_input() {
    assert_eq!(
        Grid::from_rows(Vec::new()),
        Err(GridError::Empty { cols: 0, rows: 0 })
    );
    assert_eq!(
        Grid::from_rows(vec![vec![0, 0], vec![0]]),
        Err(GridError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        Grid::from_rows(vec![vec![0, 2]]),
        Err(GridError::InvalidFlag {
            row: 0,
            col: 1,
            value: 2
        })
    );
}

#[test]
fn from_ascii_rejects_unknown_glyphs() {
    let err = Grid::from_ascii("..x").unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidGlyph {
            row: 0,
            col: 2,
            glyph: 'x'
        }
    );
    assert!(err.to_string().contains("unknown glyph"));
}

#[test]
fn ascii_round_trip_preserves_layout() {
    let picture = "#..\n.#.\n..#\n";
    let grid = Grid::from_ascii(picture).unwrap();
    assert_eq!(grid.to_ascii(), picture);
}

#[test]
fn out_of_bounds_counts_as_blocked() {
    let mut grid = Grid::new(2, 2).unwrap();
    assert!(grid.is_blocked(Cell::new(-1, 0)));
    assert!(grid.is_blocked(Cell::new(0, 2)));
    assert!(!grid.set_blocked(Cell::new(5, 5), true));
}

#[test]
fn block_rect_clips_to_grid() {
    let mut grid = Grid::new(4, 4).unwrap();
    grid.block_rect(Cell::new(2, 2), 5, 5);

    let summary = grid.summary();
    assert_eq!(summary.blocked, 4);
    assert_eq!(grid.walkable_cells().count(), 12);
    assert!(grid.is_blocked(Cell::new(3, 3)));
}

#[test]
fn mapping_floors_world_coordinates() {
    let mapping = CellMapping::new(64.0);
    assert_eq!(mapping.world_to_cell(Vec2::new(0.0, 0.0)), Cell::new(0, 0));
    assert_eq!(mapping.world_to_cell(Vec2::new(63.9, 64.0)), Cell::new(0, 1));
    assert_eq!(mapping.world_to_cell(Vec2::new(-1.0, 10.0)), Cell::new(-1, 0));
    assert_eq!(mapping.cell_center(Cell::new(2, 1)), Vec2::new(160.0, 96.0));
}

#[test]
fn mapping_clamps_into_grid() {
    let grid = Grid::new(20, 11).unwrap();
    let mapping = CellMapping::new(64.0);
    assert_eq!(
        mapping.clamp_to_grid(Vec2::new(-50.0, 5000.0), &grid),
        Cell::new(0, 10)
    );
    assert_eq!(
        mapping.clamp_to_grid(Vec2::new(1279.0, 700.0), &grid),
        Cell::new(19, 10)
    );
}

#[test]
fn block_world_point_marks_cell_under_object() {
    let mut grid = Grid::new(4, 4).unwrap();
    let mapping = CellMapping::new(64.0);

    assert!(mapping.block_world_point(&mut grid, Vec2::new(130.0, 70.0)));
    assert!(grid.is_blocked(Cell::new(2, 1)));

    assert!(!mapping.block_world_point(&mut grid, Vec2::new(900.0, 10.0)));
    assert_eq!(grid.summary().blocked, 1);
}

#[test]
fn invalid_cell_size_falls_back_to_one() {
    assert_eq!(CellMapping::new(0.0).cell_size(), 1.0);
    assert_eq!(CellMapping::new(f32::NAN).cell_size(), 1.0);
}
