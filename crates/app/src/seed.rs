use std::fmt;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use burrow_core::mix_seed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedArgError {
    MissingValue,
    NotANumber(String),
    Repeated,
}

impl fmt::Display for SeedArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => write!(f, "missing value for --seed"),
            Self::NotANumber(raw) => write!(f, "seed value '{raw}' must be a number"),
            Self::Repeated => write!(f, "seed provided more than once"),
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh seed for "regenerate" requests. Successive calls never repeat
/// within a process.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    mix_seed(
        (now_nanos as u64)
            ^ u64::from(process::id()).rotate_left(17)
            ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15),
    )
}

/// Look for `--seed N` or `--seed=N` after the program name.
pub fn resolve_seed_from_args(
    args: &[String],
    generated_seed: u64,
) -> Result<SeedChoice, SeedArgError> {
    let mut selected = None;
    let mut remaining = args.iter().skip(1);

    while let Some(argument) = remaining.next() {
        let raw = if argument.as_str() == "--seed" {
            remaining.next().map(String::as_str).ok_or(SeedArgError::MissingValue)?
        } else if let Some(value) = argument.strip_prefix("--seed=") {
            value
        } else {
            continue;
        };

        if selected.is_some() {
            return Err(SeedArgError::Repeated);
        }
        selected =
            Some(raw.parse::<u64>().map_err(|_| SeedArgError::NotANumber(raw.to_string()))?);
    }

    Ok(selected.map_or(SeedChoice::Generated(generated_seed), SeedChoice::Cli))
}
