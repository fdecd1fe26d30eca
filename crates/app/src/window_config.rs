//! Window configuration for the desktop viewer.

use burrow_app::APP_NAME;
use burrow_app::presets::PRESETS;
use burrow_app::viewport::STATUS_BAR_HEIGHT;
use macroquad::window::Conf;

const MAP_MARGIN: i32 = 16;

/// Edge length in pixels of the largest preset map at its preferred block
/// size.
fn largest_map_extent() -> i32 {
    PRESETS
        .iter()
        .map(|preset| (preset.grid_size as f32 * preset.block_size).ceil() as i32)
        .max()
        .unwrap_or(0)
}

pub fn build_window_conf() -> Conf {
    let extent = largest_map_extent();
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: extent + 2 * MAP_MARGIN,
        window_height: extent + STATUS_BAR_HEIGHT as i32 + MAP_MARGIN,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_fits_at_its_preferred_block_size() {
        let conf = build_window_conf();
        for preset in &PRESETS {
            let extent = preset.grid_size as f32 * preset.block_size;
            assert!(extent <= conf.window_width as f32, "{} is too wide", preset.name);
            assert!(
                extent + STATUS_BAR_HEIGHT <= conf.window_height as f32,
                "{} is too tall",
                preset.name
            );
        }
        assert!(conf.high_dpi);
    }
}
