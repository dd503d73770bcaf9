use log::trace;
use rand::Rng;
use serde::Serialize;

use crate::config::validate_step_range;
use crate::error::{ConfigurationError, MIN_WALK_DIMENSION};
use crate::grid::Grid;

// Cells kept between the start position and the border
pub const START_MARGIN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    // Uniform draw over the four cardinal directions
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    // (dx, dy) for moving `distance` cells this way. Up is +y.
    pub fn delta(self, distance: i64) -> (i64, i64) {
        match self {
            Direction::Up => (0, distance),
            Direction::Right => (distance, 0),
            Direction::Down => (0, -distance),
            Direction::Left => (-distance, 0),
        }
    }
}

// One call to `step`, kept for inspection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WalkStep {
    pub direction: Direction,
    pub distance: u32,
    pub displacement: (i64, i64), // after boundary reflection
    pub from: (usize, usize),
    pub to: (usize, usize),
}

// Drunkard's walk: bounded random steps that never repeat the previous direction.
// Steps that would leave the grid bounce back on the offending axis instead of clamping.
pub struct RandomWalk2D<R: Rng> {
    grid: Grid,
    rng: R,
    step_range: u32, // distances are drawn from [1, step_range)
    start: (usize, usize),
    current: (usize, usize),
    last_direction: Direction,
    path: Vec<(usize, usize)>,
    history: Vec<WalkStep>,
}

impl<R: Rng> RandomWalk2D<R> {
    // Pass `&mut rng` to keep drawing from the same generator afterwards
    pub fn new(mut grid: Grid, mut rng: R, step_range: u32) -> Result<Self, ConfigurationError> {
        let dim = grid.dimension();
        if dim < MIN_WALK_DIMENSION {
            return Err(ConfigurationError::DimensionTooSmall {
                dimension: dim,
                min: MIN_WALK_DIMENSION,
            });
        }
        validate_step_range(step_range, dim)?;

        let x = rng.gen_range(START_MARGIN..dim - START_MARGIN - 1);
        let y = rng.gen_range(START_MARGIN..dim - START_MARGIN - 1);
        grid.get_mut(x, y).weight += 1;
        let last_direction = Direction::sample(&mut rng);

        Ok(Self {
            grid,
            rng,
            step_range,
            start: (x, y),
            current: (x, y),
            last_direction,
            path: Vec::new(),
            history: Vec::new(),
        })
    }

    pub fn step(&mut self) {
        let mut direction = Direction::sample(&mut self.rng);
        while direction == self.last_direction {
            direction = Direction::sample(&mut self.rng);
        }
        let distance = self.rng.gen_range(1..self.step_range);

        let (raw_dx, raw_dy) = direction.delta(distance as i64);
        let (cx, cy) = (self.current.0 as i64, self.current.1 as i64);
        let dim = self.grid.dimension();
        let dx = if axis_in_bounds(cx + raw_dx, dim) { raw_dx } else { -raw_dx };
        let dy = if axis_in_bounds(cy + raw_dy, dim) { raw_dy } else { -raw_dy };

        let (nx, ny) = (cx + dx, cy + dy);
        assert!(
            self.grid.in_bounds(nx, ny),
            "reflected step from ({}, {}) by ({}, {}) left the {}x{} grid",
            cx,
            cy,
            dx,
            dy,
            dim,
            dim
        );
        let prev = self.current;
        let next = (nx as usize, ny as usize);

        self.grid.get_mut(next.0, next.1).weight += 1;
        if !self.grid.get(next.0, next.1).is_neighbor(prev) {
            self.grid.connect(prev, next);
        }
        self.path.push(next);
        self.history.push(WalkStep {
            direction,
            distance,
            displacement: (dx, dy),
            from: prev,
            to: next,
        });
        trace!("walk {:?} x{} {:?} -> {:?}", direction, distance, prev, next);

        self.current = next;
        self.last_direction = direction;
    }

    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    // The grid with weights and adjacency applied
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // Visited cells in order, one per step. The start cell is not included.
    pub fn path(&self) -> &[(usize, usize)] {
        &self.path
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn current(&self) -> (usize, usize) {
        self.current
    }

    pub fn history(&self) -> &[WalkStep] {
        &self.history
    }

    pub fn into_parts(self) -> (Grid, Vec<(usize, usize)>) {
        (self.grid, self.path)
    }
}

#[inline]
fn axis_in_bounds(v: i64, dim: usize) -> bool {
    v >= 0 && (v as usize) < dim
}
