use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::ConfigurationError;
use crate::fractal2::DiamondSquare2D;
use crate::grid::{Cell, CellKind, Grid};
use crate::seed::rng_from_seed;
use crate::walk2::RandomWalk2D;

// Output of one generation pass, handed to whatever renders or consumes it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMap {
    pub seed: String, // resolved seed, replays the same map when fed back in
    pub grid: Grid,
    pub start: (usize, usize),
    pub path: Vec<(usize, usize)>,
}

impl GeneratedMap {
    // Path cells in visiting order, read live from the grid
    pub fn path_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.path.iter().map(move |&(x, y)| self.grid.get(x, y))
    }

    pub fn start_cell(&self) -> &Cell {
        self.grid.get(self.start.0, self.start.1)
    }
}

// Reset, walk, optionally raise terrain, optionally tag endpoints.
// Every random draw comes from one generator seeded by the resolved seed string.
pub fn generate(config: &GeneratorConfig) -> Result<GeneratedMap, ConfigurationError> {
    config.validate()?;

    let seed = config.resolve_seed();
    info!(
        "generating {0}x{0} map, seed={1:?}, steps={2}, step_range={3}",
        config.dimension, seed, config.steps, config.step_range
    );
    let mut rng = rng_from_seed(&seed);

    let grid = Grid::reset(config.dimension, config.scale);
    let mut walk = RandomWalk2D::new(grid, &mut rng, config.step_range)?;
    walk.run(config.steps);
    let start = walk.start();
    let (mut grid, path) = walk.into_parts();
    debug!("walk done: {} cells visited", grid.visited_count());

    if config.elevation {
        let mut ds = DiamondSquare2D::new(&grid, config.roughness, &mut rng);
        ds.generate(config.dimension - 1);
        grid.merge_elevations(ds.height_map());
        debug!("elevation merged, roughness={}", config.roughness);
    }

    if config.mark_endpoints {
        mark_endpoints(&mut grid, &mut rng);
    }

    info!(
        "map ready: {} path cells, total weight {}",
        path.len(),
        grid.total_weight()
    );
    Ok(GeneratedMap {
        seed,
        grid,
        start,
        path,
    })
}

// Two uniform picks over the whole grid. They may coincide, in which case End wins.
fn mark_endpoints<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let dim = grid.dimension();
    for kind in [CellKind::Start, CellKind::End] {
        let x = rng.gen_range(0..dim);
        let y = rng.gen_range(0..dim);
        grid.get_mut(x, y).kind = kind;
        debug!("marked {:?} at ({}, {})", kind, x, y);
    }
}

// Owns a config and the most recent map. Each regeneration throws the old map away.
#[derive(Debug, Default)]
pub struct MapGenerator {
    config: GeneratorConfig,
    map: Option<GeneratedMap>,
}

impl MapGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config, map: None })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn map(&self) -> Option<&GeneratedMap> {
        self.map.as_ref()
    }

    pub fn regenerate(&mut self) -> Result<&GeneratedMap, ConfigurationError> {
        self.map = None;
        let map: &GeneratedMap = self.map.insert(generate(&self.config)?);
        Ok(map)
    }
}
