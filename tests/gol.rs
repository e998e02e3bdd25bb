use ndarray::Array2;
use rulegrid::{step, Grid, LifeRule};

fn blinker_horizontal() -> Grid {
    Grid::from_cells(Array2::from_shape_fn((5, 5), |(y, x)| {
        (y == 2 && (1..=3).contains(&x)) as u32
    }))
}

fn blinker_vertical() -> Grid {
    Grid::from_cells(Array2::from_shape_fn((5, 5), |(y, x)| {
        (x == 2 && (1..=3).contains(&y)) as u32
    }))
}

#[test]
fn gol_blinker() {
    let grid = step(&blinker_horizontal(), None, None);
    assert_eq!(grid, blinker_vertical());
    let grid = step(&grid, None, None);
    assert_eq!(grid, blinker_horizontal());
}

#[test]
fn gol_glider_wraps() {
    // A glider returns to its shape shifted by (1, 1) every 4 generations, so on a 6x6 torus it
    // is back where it started after 24.
    let start = Grid::from_cells(Array2::from_shape_fn((6, 6), |(y, x)| {
        matches!((y, x), (0, 1) | (1, 2) | (2, 0) | (2, 1) | (2, 2)) as u32
    }));
    let mut grid = start.clone();
    for generation in 1..=24 {
        grid = grid.step(&LifeRule::default());
        assert_eq!(grid.population(), 5, "generation {}", generation);
    }
    assert_eq!(grid, start);
}

#[test]
fn gol_block_is_still() {
    let mut grid = Grid::new(4, 4);
    for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        grid.set(row, col, 1);
    }
    assert_eq!(step(&grid, None, None), grid);
}
