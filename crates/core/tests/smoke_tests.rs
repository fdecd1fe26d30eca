use burrow_core::{Cell, CellRole, ConfigPatch, Grid, Phase, Pos, preset_file};

#[test]
fn test_smoke_lifecycle_moves_through_every_phase() {
    let mut grid = Grid::new(25, 25, 2024);
    assert_eq!(grid.phase(), Phase::Unconfigured);

    grid.configure(&ConfigPatch::new().min(60_u32).density(0.25));
    assert_eq!(grid.phase(), Phase::Configured);

    grid.step();
    assert_eq!(grid.phase(), Phase::Generating);

    grid.generate();
    assert_eq!(grid.phase(), Phase::Completed);
    assert!(grid.open_count() >= 60);
}

#[test]
fn test_smoke_unconfigured_grid_uses_defaults() {
    let mut grid = Grid::new(20, 20, 5);
    let map = grid.generate();

    assert!(map.open_count >= 20, "default minimum is twenty open cells");
    assert_eq!(map.count(Cell::Open), map.open_count);
}

#[test]
fn test_smoke_every_decided_cell_has_a_role() {
    let mut grid = Grid::new(30, 20, 31);
    grid.configure(&ConfigPatch::new().min(80_u32).density(0.4).linearity(0.7));
    let map = grid.generate();

    for pos in map.positions() {
        let role = map.role_at(pos);
        match map.cell_at(pos) {
            Some(Cell::Unvisited) => assert_eq!(role, None),
            Some(Cell::Open) => assert!(matches!(
                role,
                Some(CellRole::Start | CellRole::End | CellRole::Open)
            )),
            Some(Cell::Closed) => assert_eq!(role, Some(CellRole::Closed)),
            None => panic!("positions() yielded {pos:?} outside the map"),
        }
        assert_eq!(grid.role_at(pos), role);
    }
}

#[test]
fn test_smoke_degenerate_dimensions_complete_quietly() {
    for (width, height) in [(0.0, 0.0), (-4.0, 10.0), (f64::NAN, 3.0), (1.0, 1.0), (2.0, 2.0)] {
        let mut grid = Grid::from_loose_dimensions(width, height, 1);
        grid.configure(&ConfigPatch::new().min(10_u32).density(1.0));
        grid.generate();
        assert!(grid.is_completed(), "{width}x{height} should complete");
        assert!(grid.open_count() <= 1);
    }
}

#[test]
fn test_smoke_preset_document_drives_generation() {
    let preset = preset_file::parse_json(
        r#"{
            "grid": {"width": 40, "height": 24, "seed": 8},
            "generation": {"min": 100, "max": "180", "density": 0.3, "speed": 12}
        }"#,
    )
    .expect("preset json should parse");

    let mut grid = preset.build_grid(10.0, 10.0, 0);
    let map = grid.generate();

    assert_eq!((map.width, map.height), (40, 24));
    assert!((100..=180).contains(&map.open_count), "open count {}", map.open_count);
    assert_eq!(map.cell_at(Pos::new(0, 0)).map(|cell| cell == Cell::Open), Some(false));
}
