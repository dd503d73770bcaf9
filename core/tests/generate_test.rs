use walkgrid::seed::rng_from_seed;
use walkgrid::{DiamondSquare2D, GeneratorConfig, Grid, RandomWalk2D, generate};

fn config(dimension: usize, steps: usize, step_range: u32, seed: &str) -> GeneratorConfig {
    GeneratorConfig {
        dimension,
        steps,
        step_range,
        ..GeneratorConfig::with_seed(seed)
    }
}

#[test]
fn test_scenario_seed_test() {
    let c = config(17, 10, 3, "test");
    let m = generate(&c).expect("valid config");

    assert_eq!(m.seed, "test");
    assert_eq!(m.path.len(), 10);
    assert_eq!(m.grid.total_weight(), 11);
    let (sx, sy) = m.start;
    assert!((5..11).contains(&sx) && (5..11).contains(&sy));
    assert!(m.start_cell().weight >= 1);

    // start position depends only on the seed
    let again = generate(&c).unwrap();
    assert_eq!(again.start, m.start);
}

#[test]
fn test_scenario_seed_test_exact_walk() {
    let m = generate(&config(17, 10, 3, "test")).unwrap();
    assert_eq!(m.start, (5, 8));
    assert_eq!(
        m.path,
        vec![
            (5, 6),
            (4, 6),
            (4, 8),
            (3, 8),
            (5, 8),
            (5, 9),
            (6, 9),
            (6, 10),
            (5, 10),
            (7, 10),
        ]
    );
    // (5, 8) is both the start and the fifth stop
    assert_eq!(m.start_cell().weight, 2);
}

#[test]
fn test_determinism_full_pipeline() {
    let mut c = config(33, 200, 5, "determinism");
    c.mark_endpoints = true;
    let a = generate(&c).unwrap();
    let b = generate(&c).unwrap();
    assert_eq!(a, b);
    for (ca, cb) in a.grid.cells().zip(b.grid.cells()) {
        assert_eq!(ca.elevation.to_bits(), cb.elevation.to_bits());
        assert_eq!(ca.weight, cb.weight);
        assert_eq!(ca.neighbors(), cb.neighbors());
    }

    let other = generate(&config(33, 200, 5, "determinism!")).unwrap();
    assert_ne!(a.path, other.path);
}

#[test]
fn test_path_connectivity_and_weights() {
    for seed in ["a", "b", "c", "long walk"] {
        let m = generate(&config(33, 150, 5, seed)).unwrap();
        assert_eq!(m.grid.total_weight(), 151);

        let mut prev = m.start;
        for &(x, y) in &m.path {
            assert!(m.grid.get(x, y).is_neighbor(prev), "seed {} broke at ({}, {})", seed, x, y);
            prev = (x, y);
        }
        // every visited cell is either the start or somewhere on the path
        for cell in m.grid.cells().filter(|c| c.visited()) {
            assert!(cell.position() == m.start || m.path.contains(&cell.position()));
        }
    }
}

#[test]
fn test_zero_steps() {
    let m = generate(&config(17, 0, 2, "still")).unwrap();
    assert!(m.path.is_empty());
    assert_eq!(m.grid.total_weight(), 1);
    assert_eq!(m.grid.visited_count(), 1);
}

#[test]
fn test_walk_directions_from_seed() {
    let mut rng = rng_from_seed("directions");
    let mut walk = RandomWalk2D::new(Grid::reset(65, 1.0), &mut rng, 6).unwrap();
    walk.run(1000);
    for pair in walk.history().windows(2) {
        assert_ne!(pair[0].direction, pair[1].direction);
    }
}

#[test]
fn test_height_map_5x5_reproducible() {
    let run = || {
        let mut ds = DiamondSquare2D::new(&Grid::reset(5, 1.0), 5.0, rng_from_seed("test"));
        ds.generate(4);
        ds.into_height_map()
    };
    let a = run();
    assert_eq!(a.len(), 5);
    assert!(a.iter().all(|row| row.len() == 5));
    let b = run();
    for (ra, rb) in a.iter().zip(&b) {
        for (va, vb) in ra.iter().zip(rb) {
            assert_eq!(va.to_bits(), vb.to_bits());
        }
    }
}

#[test]
fn test_height_map_5x5_exact_values() {
    let mut ds = DiamondSquare2D::new(&Grid::reset(5, 1.0), 5.0, rng_from_seed("test"));
    ds.generate(4);
    let expected: [[f32; 5]; 5] = [
        [0.82922816, -0.8890139, -1.1409315, -1.4632881, -1.5858426],
        [-0.6401541, 0.4468923, -0.50455546, 0.48062885, -0.62616324],
        [0.1919542, 0.37022355, 1.1745598, -0.30759215, 0.4155761],
        [-1.3656789, -0.7322476, 0.69464827, -0.5383967, 0.55199033],
        [0.71123695, -0.7978022, 0.35644525, -0.52097106, -1.0705823],
    ];
    for (y, row) in ds.height_map().iter().enumerate() {
        for (x, v) in row.iter().enumerate() {
            assert_eq!(v.to_bits(), expected[y][x].to_bits(), "map[{}][{}] = {}", y, x, v);
        }
    }
}

#[test]
fn test_generated_map_serializes() {
    let m = generate(&config(17, 5, 3, "json")).unwrap();
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["seed"], "json");
    assert_eq!(json["path"].as_array().map(|p| p.len()), Some(5));
    assert_eq!(json["grid"]["dimension"], 17);
}
