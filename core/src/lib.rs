// walkgrid builds drunkard's-walk grid maps with optional diamond-square elevation
pub mod config;
pub mod error;
pub mod fractal2;
pub mod generator;
pub mod grid;
pub mod seed;
pub mod utils;
pub mod walk2;

pub use config::GeneratorConfig;
pub use error::{ConfigFileError, ConfigurationError};
pub use fractal2::DiamondSquare2D;
pub use generator::{GeneratedMap, MapGenerator, generate};
pub use grid::{Cell, CellKind, Grid};
pub use utils::{HeightMap2D, flatten2};
pub use walk2::{Direction, RandomWalk2D, WalkStep};
