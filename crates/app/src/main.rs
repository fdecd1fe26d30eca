mod map_render;
mod window_config;

use std::env;

use burrow_app::seed::{SeedChoice, generate_runtime_seed, resolve_seed_from_args};
use burrow_app::settings_file::ViewerSettings;
use burrow_app::viewer_loop::{TickOutcome, ViewerState};
use log::{error, info, warn};
use macroquad::prelude::*;

use crate::map_render::draw_viewer;
use crate::window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => {
            if let SeedChoice::Cli(seed) = choice {
                info!("using seed {seed} from the command line");
            }
            choice.value()
        }
        Err(err) => {
            warn!("{err}; falling back to a generated seed");
            generate_runtime_seed()
        }
    };

    let settings_path = ViewerSettings::get_default_path();
    let mut settings = ViewerSettings::load_or_default(settings_path.as_deref());
    let mut viewer = ViewerState::new(settings.preset_index, seed);

    loop {
        let keys_pressed: Vec<KeyCode> = get_keys_pressed().into_iter().collect();
        if viewer.tick(&keys_pressed, generate_runtime_seed) == TickOutcome::Quit {
            break;
        }

        if viewer.preset_index != settings.preset_index {
            settings.preset_index = viewer.preset_index;
            if let Some(path) = settings_path.as_deref()
                && let Err(err) = settings.write_atomic(path)
            {
                error!("failed to save viewer settings to {}: {err}", path.display());
            }
        }

        clear_background(BLACK);
        draw_viewer(&viewer);
        next_frame().await;
    }
}
