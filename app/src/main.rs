use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use walkgrid::{CellKind, GeneratorConfig, MapGenerator};

mod preview;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drunkard's-walk grid map generator", long_about = None)]
struct Cli {
    /// JSON generator config. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Grid side length, must be 2^n + 1 (17, 33, 65, ...).
    #[arg(long)]
    dimension: Option<usize>,
    /// Number of walk steps.
    #[arg(long)]
    steps: Option<usize>,
    /// Step distances are drawn from [1, step-range).
    #[arg(long)]
    step_range: Option<u32>,
    /// Fixed seed. Without it a time-derived seed is used.
    #[arg(long)]
    seed: Option<String>,
    /// Diamond-square jitter amplitude.
    #[arg(long)]
    roughness: Option<f32>,
    /// Skip elevation synthesis.
    #[arg(long)]
    no_elevation: bool,
    /// Tag a random Start and End cell.
    #[arg(long)]
    mark_endpoints: bool,
    /// Write a PNG preview here.
    #[arg(long)]
    png: Option<PathBuf>,
    /// Preview pixels per cell.
    #[arg(long, default_value_t = 8)]
    cell_px: u32,
    /// Write the generated map as JSON here.
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    // Preset first, then flags on top. Validation happens once, on the merged result.
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::load_file(path)?,
            None => GeneratorConfig::default(),
        };
        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(dimension) = self.dimension {
            config.dimension = dimension;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(step_range) = self.step_range {
            config.step_range = step_range;
        }
        if let Some(seed) = &self.seed {
            config.seed = seed.clone();
            config.use_random_seed = false;
        }
        if let Some(roughness) = self.roughness {
            config.roughness = roughness;
        }
        if self.no_elevation {
            config.elevation = false;
        }
        if self.mark_endpoints {
            config.mark_endpoints = true;
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.generator_config()?;
    let mut generator = MapGenerator::new(config).context("invalid generator settings")?;

    let start = Instant::now();
    let map = generator.regenerate()?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let grid = &map.grid;
    println!("seed:          {}", map.seed);
    println!("grid:          {0}x{0}", grid.dimension());
    println!("start:         {:?}", map.start);
    println!("path length:   {}", map.path.len());
    println!("visited cells: {}", grid.visited_count());
    println!("total weight:  {}", grid.total_weight());
    for kind in [CellKind::Start, CellKind::End] {
        if let Some(cell) = grid.find_kind(kind) {
            println!("{:<14} {:?}", format!("{:?}:", kind).to_lowercase(), cell.position());
        }
    }
    println!("generated in:  {:.2} ms", elapsed_ms);

    if let Some(path) = &cli.png {
        let img = preview::render_preview(map, cli.cell_px);
        img.save(path)
            .with_context(|| format!("failed to save preview to {}", path.display()))?;
        info!("saved preview to {}", path.display());
    }

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(map)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!("saved map to {}", path.display());
    }

    Ok(())
}
