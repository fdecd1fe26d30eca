//! Seeded grid-growth generator for cave, maze and dungeon floor plans.
//!
//! A [`Grid`] starts from a single open cell in its centre and grows a
//! connected region of open cells, closing everything it decides against and
//! walling off the outer ring.
//!
//! ```
//! use burrow_core::{Cell, ConfigPatch, Grid};
//!
//! let mut grid = Grid::new(40, 30, 7);
//! grid.configure(&ConfigPatch::new().min(120_u32).density(0.3).linearity(0.6));
//! while !grid.is_completed() {
//!     grid.step();
//! }
//! let map = grid.snapshot();
//! assert_eq!(map.count(Cell::Open), grid.open_count());
//! ```

pub mod config;
pub mod preset_file;
pub mod types;

mod generator;
mod grid;
mod model;
mod rng;

pub use config::{ConfigPatch, GenerationConfig, LooseValue};
pub use grid::Grid;
pub use model::GeneratedMap;
pub use preset_file::{PresetFile, PresetLoadError, load_preset};
pub use rng::mix_seed;
pub use types::*;
