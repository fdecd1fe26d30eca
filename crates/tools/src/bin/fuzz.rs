use std::collections::{BTreeSet, VecDeque};

use anyhow::{Result, bail};
use burrow_core::{Cell, ConfigPatch, Grid, Pos};
use clap::Parser;
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
}

fn pick(rng: &mut ChaCha8Rng, low: u64, high: u64) -> u64 {
    low + rng.next_u64() % (high - low + 1)
}

fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
}

fn random_case(rng: &mut ChaCha8Rng) -> (usize, usize, ConfigPatch) {
    let width = pick(rng, 0, 64) as usize;
    let height = pick(rng, 0, 64) as usize;
    let min = pick(rng, 0, 400);
    let mut patch = ConfigPatch::new()
        .min(min as f64)
        .density(unit(rng))
        .linearity(unit(rng))
        .speed(pick(rng, 1, 32) as f64);
    // Leave the cap unset for roughly a third of the runs.
    if rng.next_u64() % 3 != 0 {
        patch = patch.max((min + pick(rng, 0, 400)) as f64);
    }
    (width, height, patch)
}

fn open_positions(grid: &Grid) -> Vec<Pos> {
    let mut open = Vec::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if grid.is_open(Pos { y, x }) {
                open.push(Pos { y, x });
            }
        }
    }
    open
}

fn check_invariants(grid: &Grid) -> Result<()> {
    let open = open_positions(grid);
    if open.len() != grid.open_count() {
        bail!("open count {} disagrees with {} open cells", grid.open_count(), open.len());
    }
    if let Some(max) = grid.config().max
        && grid.open_count() > max.max(1)
    {
        bail!("open count {} exceeds cap {max}", grid.open_count());
    }

    let (width, height) = (grid.width() as i32, grid.height() as i32);
    if width >= 3
        && height >= 3
        && let Some(pos) = open
            .iter()
            .find(|pos| pos.x == 0 || pos.y == 0 || pos.x == width - 1 || pos.y == height - 1)
    {
        bail!("border cell {pos:?} is open");
    }

    let Some(start) = grid.start() else {
        return Ok(());
    };
    let mut queue = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = queue.pop_front() {
        for next in [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y, x: pos.x + 1 },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
        ] {
            if grid.get(next) == Some(Cell::Open) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    if seen.len() != open.len() {
        bail!("{} open cells are disconnected from the start", open.len() - seen.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let (width, height, patch) = random_case(&mut rng);
        let grid_seed = rng.next_u64();
        let mut grid = Grid::new(width, height, grid_seed);
        grid.configure(&patch);
        debug!("run {run}: {width}x{height} seed {grid_seed} {:?}", grid.config());

        let mut steps = 0_usize;
        while !grid.is_completed() {
            grid.step();
            steps += 1;
            if let Err(err) = check_invariants(&grid) {
                bail!("run {run} ({width}x{height}, seed {grid_seed}) step {steps}: {err}");
            }
        }

        let snapshot = grid.snapshot();
        grid.step();
        if grid.snapshot() != snapshot {
            bail!("run {run}: stepping a completed grid changed it");
        }
        info!("run {run}: {} open cells after {steps} steps", grid.open_count());
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
