use rulegrid::{parse_pattern_file, Error, Grid, Simulation, SimulationConfig};

const GLIDER: &str = "\
#N Glider
#C The smallest spaceship.
x = 3, y = 3, rule = B3/S23
bob$2bo$3o!
";

fn sim(rows: usize, cols: usize) -> Simulation {
    Simulation::new(SimulationConfig {
        rows,
        cols,
        ..SimulationConfig::default()
    })
}

#[test]
fn pattern_is_centered_in_the_grid() {
    let mut sim = sim(9, 9);
    sim.tick();
    let pattern = sim.import_pattern(GLIDER).unwrap();
    assert_eq!(pattern.rule.as_deref(), Some("B3/S23"));
    assert_eq!(sim.generation(), 0);

    let grid = sim.grid();
    assert_eq!(grid.dim(), (9, 9));
    assert_eq!(grid.population(), 5);
    // Offset is (9 - 3) / 2 = 3 on both axes.
    for (row, col) in [(3, 4), (4, 5), (5, 3), (5, 4), (5, 5)] {
        assert_eq!(grid.get(row, col), Some(1), "({}, {})", row, col);
    }
}

#[test]
fn oversized_pattern_is_clipped() {
    let mut sim = sim(2, 2);
    sim.import_pattern("x = 4, y = 4\n4o$4o$4o$4o!").unwrap();
    assert_eq!(sim.grid().population(), 4);
}

#[test]
fn glider_runs_under_the_fallback_rule() {
    let mut sim = sim(12, 12);
    sim.import_pattern(GLIDER).unwrap();
    for _ in 0..4 {
        sim.tick();
    }
    assert_eq!(sim.generation(), 4);
    assert_eq!(sim.grid().population(), 5);
    // After four generations the glider has moved one cell down and to the right.
    for (row, col) in [(5, 6), (6, 7), (7, 5), (7, 6), (7, 7)] {
        assert_eq!(sim.grid().get(row, col), Some(1), "({}, {})", row, col);
    }
}

#[test]
fn grid_from_pattern_matches_its_size() {
    let pattern = parse_pattern_file(GLIDER).unwrap();
    let grid = Grid::from_pattern(&pattern);
    assert_eq!(grid.dim(), (pattern.height, pattern.width));
    assert_eq!(grid.population(), pattern.population());
}

#[test]
fn bad_pattern_leaves_the_grid_alone() {
    let mut sim = sim(5, 5);
    sim.set_cell(1, 1, 2);
    assert!(sim.import_pattern("x = 3, y = 3\nbo$2bz$3o!").is_err());
    assert_eq!(sim.grid().get(1, 1), Some(2));
    assert!(sim.pattern().is_none());
}

#[test]
fn oversized_pattern_is_rejected_without_touching_the_grid() {
    let mut sim = sim(5, 5);
    sim.import_pattern(GLIDER).unwrap();
    sim.tick();
    let before = sim.grid().clone();

    for text in [
        "x = 4000000000, y = 4000000000\no!",
        "x = 100000, y = 100000\no!",
    ] {
        assert!(matches!(
            sim.import_pattern(text),
            Err(Error::PatternTooLarge { .. })
        ));
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.pattern().map(|p| p.width), Some(3));
    }
}
