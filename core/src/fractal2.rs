use log::debug;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::seed::WalkRng;
use crate::utils::HeightMap2D;

// 2D fractal elevation using the Diamond–Square algorithm
pub struct DiamondSquare2D<R: Rng> {
    size: usize,    // must be 2^n + 1, e.g. 17, 33
    roughness: f32, // jitter amplitude, the same at every scale
    map: HeightMap2D,
    rng: R,
}

impl DiamondSquare2D<WalkRng> {
    // Standalone synthesizer over a flat size×size field with its own generator
    pub fn seeded(size: usize, seed: u64, roughness: f32) -> Self {
        Self::new(&Grid::reset(size, 1.0), roughness, WalkRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiamondSquare2D<R> {
    // Start from the grid's elevations, then re-randomize the four corners in [-A, A]
    pub fn new(grid: &Grid, roughness: f32, mut rng: R) -> Self {
        let size = grid.dimension();
        assert!(
            size >= 3 && (size - 1).is_power_of_two(),
            "size must be 2^n+1"
        );

        let mut map = grid.elevations();
        let last = size - 1;
        map[0][0] = rng.gen_range(-roughness..=roughness);
        map[0][last] = rng.gen_range(-roughness..=roughness);
        map[last][0] = rng.gen_range(-roughness..=roughness);
        map[last][last] = rng.gen_range(-roughness..=roughness);

        Self {
            size,
            roughness,
            map,
            rng,
        }
    }

    // Run halving rounds from `start_step` (normally size - 1) down to 1
    pub fn generate(&mut self, start_step: usize) {
        assert!(
            start_step.is_power_of_two() && start_step < self.size,
            "start step {} does not fit a {}x{} map",
            start_step,
            self.size,
            self.size
        );
        let jitter = self.roughness / 4.0;

        // Step is the current distance between 2 known points
        let mut step = start_step;
        while step > 1 {
            // Distance to the center from a corner
            let half = step / 2;

            // Diamond step: cell midpoint from its four corners
            for y in (0..self.size - 1).step_by(step) {
                for x in (0..self.size - 1).step_by(step) {
                    let avg = (self.map[y][x]
                        + self.map[y][x + step]
                        + self.map[y + step][x]
                        + self.map[y + step][x + step])
                        * 0.25;
                    self.map[y + half][x + half] = avg + self.rng.gen_range(-jitter..=jitter);
                }
            }

            // Square step: every point of the half-step lattice, in place
            for y in (0..self.size).step_by(half) {
                for x in (0..self.size).step_by(half) {
                    let avg = square_average(&self.map, x, y, half);
                    self.map[y][x] = avg + self.rng.gen_range(-jitter..=jitter);
                }
            }

            debug!("diamond-square round step={} done", step);
            step = half;
        }
    }

    pub fn height_map(&self) -> &HeightMap2D {
        &self.map
    }

    pub fn into_height_map(self) -> HeightMap2D {
        self.map
    }
}

// Neighbours outside the map count as 0 and the divisor stays 4,
// so points along the border are pulled toward 0.
fn square_average(map: &HeightMap2D, x: usize, y: usize, half: usize) -> f32 {
    let size = map.len();
    let left = if x >= half { map[y][x - half] } else { 0.0 };
    let right = if x + half < size { map[y][x + half] } else { 0.0 };
    let up = if y >= half { map[y - half][x] } else { 0.0 };
    let down = if y + half < size { map[y + half][x] } else { 0.0 };
    (left + right + up + down) / 4.0
}
