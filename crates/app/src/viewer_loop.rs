use burrow_core::Grid;
use log::info;
use macroquad::prelude::KeyCode;

use crate::presets::{PRESETS, Preset, preset_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerMode {
    #[default]
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

const KEY_HELP: &str = "[1-4] preset  [R] regenerate  [Space] pause  [Right] step";
const PRESET_KEYS: [KeyCode; 4] = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];

/// Animated generation session: one `Grid::step` batch per frame.
pub struct ViewerState {
    pub mode: ViewerMode,
    pub preset_index: usize,
    pub seed: u64,
    pub grid: Grid,
}

impl ViewerState {
    pub fn new(preset_index: usize, seed: u64) -> Self {
        let preset_index = preset_index.min(PRESETS.len() - 1);
        Self {
            mode: ViewerMode::default(),
            preset_index,
            seed,
            grid: preset_at(preset_index).build_grid(seed),
        }
    }

    pub fn preset(&self) -> &'static Preset {
        preset_at(self.preset_index)
    }

    /// Handle this frame's key presses and advance generation.
    pub fn tick<F>(&mut self, keys_pressed: &[KeyCode], mut next_seed: F) -> TickOutcome
    where
        F: FnMut() -> u64,
    {
        if keys_pressed.contains(&KeyCode::Escape) {
            return TickOutcome::Quit;
        }

        if let Some(index) = PRESET_KEYS.iter().position(|key| keys_pressed.contains(key)) {
            self.restart(index, next_seed());
        } else if keys_pressed.contains(&KeyCode::R) {
            self.restart(self.preset_index, next_seed());
        }

        let mut advance = false;
        match self.mode {
            ViewerMode::Running => {
                if keys_pressed.contains(&KeyCode::Space) {
                    self.mode = ViewerMode::Paused;
                } else {
                    advance = true;
                }
            }
            ViewerMode::Paused => {
                if keys_pressed.contains(&KeyCode::Space) {
                    self.mode = ViewerMode::Running;
                } else if keys_pressed.contains(&KeyCode::Right) {
                    advance = true;
                }
            }
            ViewerMode::Finished => {}
        }

        if advance && self.grid.step().completed {
            info!(
                "{} finished with {} open cells (seed {})",
                self.preset().name,
                self.grid.open_count(),
                self.seed
            );
            self.mode = ViewerMode::Finished;
        }

        TickOutcome::Continue
    }

    fn restart(&mut self, preset_index: usize, seed: u64) {
        self.preset_index = preset_index.min(PRESETS.len() - 1);
        self.seed = seed;
        self.grid = self.preset().build_grid(seed);
        self.mode = ViewerMode::Running;
    }

    pub fn status_line(&self) -> String {
        let state = match self.mode {
            ViewerMode::Running => "generating",
            ViewerMode::Paused => "paused",
            ViewerMode::Finished => "done",
        };
        format!(
            "{} | seed {} | open {} | {state}   {KEY_HELP}",
            self.preset().name,
            self.seed,
            self.grid.open_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_between_running_and_paused() {
        let mut viewer = ViewerState::new(0, 1);
        viewer.tick(&[KeyCode::Space], || 0);
        assert_eq!(viewer.mode, ViewerMode::Paused);

        let before = viewer.grid.open_count();
        viewer.tick(&[], || 0);
        assert_eq!(viewer.grid.open_count(), before, "paused viewer must not advance");

        viewer.tick(&[KeyCode::Space], || 0);
        assert_eq!(viewer.mode, ViewerMode::Running);
    }

    #[test]
    fn preset_keys_restart_with_a_fresh_seed() {
        let mut viewer = ViewerState::new(0, 1);
        viewer.tick(&[KeyCode::Key3], || 77);

        assert_eq!(viewer.preset_index, 2);
        assert_eq!(viewer.seed, 77);
        assert_eq!(viewer.grid.width(), PRESETS[2].grid_size);
    }

    #[test]
    fn escape_quits() {
        let mut viewer = ViewerState::new(1, 1);
        assert_eq!(viewer.tick(&[KeyCode::Escape], || 0), TickOutcome::Quit);
    }

    #[test]
    fn stored_index_out_of_range_is_clamped() {
        let viewer = ViewerState::new(42, 1);
        assert_eq!(viewer.preset_index, PRESETS.len() - 1);
    }
}
