pub mod presets;
pub mod seed;
pub mod settings_file;
pub mod viewer_loop;
pub mod viewport;

pub const APP_NAME: &str = "Burrow";
