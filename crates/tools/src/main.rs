use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use burrow_core::{
    ConfigPatch, GeneratedMap, GenerationConfig, Grid, PresetFile, load_preset, mix_seed,
};
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

mod ascii;

const DEFAULT_WIDTH: f64 = 60.0;
const DEFAULT_HEIGHT: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Grow a cave layout and print it", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long)]
    width: Option<f64>,
    /// Grid height in cells
    #[arg(long)]
    height: Option<f64>,
    /// Random seed; a time-based seed is used when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Minimum number of open cells
    #[arg(long)]
    min: Option<f64>,
    /// Maximum number of open cells
    #[arg(long)]
    max: Option<f64>,
    /// Chance in [0, 1] that an optional neighbour opens
    #[arg(short, long)]
    density: Option<f64>,
    /// Chance in [0, 1] of continuing straight
    #[arg(short, long)]
    linearity: Option<f64>,
    /// Propagations per step
    #[arg(long)]
    speed: Option<f64>,
    /// TOML or JSON preset; flags override its values
    #[arg(short, long)]
    preset: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

impl Args {
    fn patch(&self) -> ConfigPatch {
        ConfigPatch {
            min: self.min.map(Into::into),
            max: self.max.map(Into::into),
            density: self.density.map(Into::into),
            linearity: self.linearity.map(Into::into),
            speed: self.speed.map(Into::into),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    width: usize,
    height: usize,
    seed: u64,
    config: &'a GenerationConfig,
    open_count: usize,
    start: Option<[i32; 2]>,
    end: Option<[i32; 2]>,
    fingerprint: String,
    rows: Vec<String>,
}

impl<'a> Report<'a> {
    fn new(map: &GeneratedMap, seed: u64, config: &'a GenerationConfig) -> Self {
        Self {
            width: map.width,
            height: map.height,
            seed,
            config,
            open_count: map.open_count,
            start: map.start.map(|pos| [pos.x, pos.y]),
            end: map.end.map(|pos| [pos.x, pos.y]),
            fingerprint: format_fingerprint(map.fingerprint()),
            rows: ascii::render_rows(map),
        }
    }
}

/// `0x` followed by exactly 16 lowercase hex digits.
fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}

fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    mix_seed((now_nanos as u64) ^ u64::from(process::id()).rotate_left(17))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let preset = match &args.preset {
        Some(path) => load_preset(path)
            .with_context(|| format!("Failed to load preset: {}", path.display()))?,
        None => PresetFile::default(),
    };

    let seed = args.seed.or(preset.grid.seed).unwrap_or_else(runtime_seed);
    let width = args.width.or(preset.grid.width).unwrap_or(DEFAULT_WIDTH);
    let height = args.height.or(preset.grid.height).unwrap_or(DEFAULT_HEIGHT);
    let patch = preset.generation.merged_with(&args.patch());

    let mut grid = Grid::from_loose_dimensions(width, height, seed);
    grid.configure(&patch);
    let map = grid.generate();
    info!(
        "generated {}x{} map with {} open cells (seed {seed})",
        map.width, map.height, map.open_count
    );

    match args.format {
        OutputFormat::Ascii => print!("{}", ascii::render(&map)),
        OutputFormat::Json => {
            let report = Report::new(&map, seed, grid.config());
            let json = serde_json::to_string_pretty(&report)
                .with_context(|| "Failed to serialize map report")?;
            println!("{json}");
        }
    }

    Ok(())
}
