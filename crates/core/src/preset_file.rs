//! Generation presets stored as TOML or JSON.
//!
//! ```toml
//! [grid]
//! width = 60
//! height = 40
//! seed = 7
//!
//! [generation]
//! min = 200
//! max = 600
//! density = 0.3
//! linearity = 0.5
//! speed = 10
//! ```
//!
//! Every key is optional. Generation values go through the same lenient
//! coercion as [`Grid::configure`].

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigPatch;
use crate::grid::Grid;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetFile {
    pub grid: GridSection,
    pub generation: ConfigPatch,
}

impl PresetFile {
    /// Build a configured grid. Missing dimensions and seed fall back to the
    /// given values.
    pub fn build_grid(
        &self,
        fallback_width: f64,
        fallback_height: f64,
        fallback_seed: u64,
    ) -> Grid {
        let mut grid = Grid::from_loose_dimensions(
            self.grid.width.unwrap_or(fallback_width),
            self.grid.height.unwrap_or(fallback_height),
            self.grid.seed.unwrap_or(fallback_seed),
        );
        grid.configure(&self.generation);
        grid
    }
}

#[derive(Debug)]
pub enum PresetLoadError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The document could not be parsed.
    Parse { format: &'static str, message: String },
    /// The file extension is neither `toml` nor `json`.
    UnsupportedExtension(String),
}

impl fmt::Display for PresetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "preset I/O error: {e}"),
            Self::Parse { format, message } => write!(f, "invalid {format} preset: {message}"),
            Self::UnsupportedExtension(extension) => {
                write!(f, "unsupported preset extension '{extension}' (expected toml or json)")
            }
        }
    }
}

impl Error for PresetLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PresetLoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub fn load_preset(path: &Path) -> Result<PresetFile, PresetLoadError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let content = match extension.as_str() {
        "toml" | "json" => fs::read_to_string(path)?,
        _ => return Err(PresetLoadError::UnsupportedExtension(extension)),
    };

    if extension == "toml" {
        parse_toml(&content)
    } else {
        parse_json(&content)
    }
}

pub fn parse_toml(content: &str) -> Result<PresetFile, PresetLoadError> {
    toml::from_str(content)
        .map_err(|e| PresetLoadError::Parse { format: "TOML", message: e.to_string() })
}

pub fn parse_json(content: &str) -> Result<PresetFile, PresetLoadError> {
    serde_json::from_str(content)
        .map_err(|e| PresetLoadError::Parse { format: "JSON", message: e.to_string() })
}
