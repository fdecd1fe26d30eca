//! Persistent viewer settings.

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const SETTINGS_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViewerSettings {
    pub format_version: u32,
    pub preset_index: usize,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self { format_version: SETTINGS_FORMAT_VERSION, preset_index: 0 }
    }
}

impl ViewerSettings {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("viewer_settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    /// Load settings, rejecting files written by a different format version.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if settings.format_version != SETTINGS_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported settings format version {}", settings.format_version),
            ));
        }
        Ok(settings)
    }

    /// Stored settings, or defaults when the file is missing or unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("ignoring viewer settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = ViewerSettings { preset_index: 3, ..ViewerSettings::default() };

        settings.write_atomic(&path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(ViewerSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_future_format_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"format_version": 9, "preset_index": 1}"#).unwrap();

        let err = ViewerSettings::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_or_corrupt_files_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(ViewerSettings::load_or_default(Some(&missing)), ViewerSettings::default());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{not json").unwrap();
        assert_eq!(ViewerSettings::load_or_default(Some(&corrupt)), ViewerSettings::default());
        assert_eq!(ViewerSettings::load_or_default(None), ViewerSettings::default());
    }
}
