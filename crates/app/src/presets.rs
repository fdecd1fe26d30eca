//! Built-in generation presets selectable from the number keys.

use burrow_core::{ConfigPatch, Grid};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    /// Preferred on-screen size of one cell in pixels.
    pub block_size: f32,
    /// Square grid edge length in cells.
    pub grid_size: usize,
    pub min: u32,
    pub max: Option<u32>,
    pub density: f64,
    pub linearity: f64,
    pub speed: u32,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Tunnels",
        block_size: 8.0,
        grid_size: 80,
        min: 300,
        max: Some(600),
        density: 0.0,
        linearity: 0.6,
        speed: 4,
    },
    Preset {
        name: "Caves",
        block_size: 5.0,
        grid_size: 140,
        min: 2_500,
        max: Some(5_000),
        density: 0.45,
        linearity: 0.0,
        speed: 40,
    },
    Preset {
        name: "Halls",
        block_size: 8.0,
        grid_size: 90,
        min: 600,
        max: Some(1_200),
        density: 0.2,
        linearity: 0.9,
        speed: 10,
    },
    Preset {
        name: "Sprawl",
        block_size: 3.0,
        grid_size: 240,
        min: 8_000,
        max: None,
        density: 0.3,
        linearity: 0.3,
        speed: 120,
    },
];

impl Preset {
    pub fn patch(&self) -> ConfigPatch {
        let patch = ConfigPatch::new()
            .min(self.min)
            .density(self.density)
            .linearity(self.linearity)
            .speed(self.speed);
        match self.max {
            Some(max) => patch.max(max),
            None => patch,
        }
    }

    pub fn build_grid(&self, seed: u64) -> Grid {
        let mut grid = Grid::new(self.grid_size, self.grid_size, seed);
        grid.configure(&self.patch());
        grid
    }
}

/// Preset for a stored index, falling back to the first one.
pub fn preset_at(index: usize) -> &'static Preset {
    PRESETS.get(index).unwrap_or(&PRESETS[0])
}
