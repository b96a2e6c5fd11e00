use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_DATABASE_FILE: &str = "electricity-bills.sqlite";

/// User-editable settings kept in `config.toml` next to the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_file: DEFAULT_DATABASE_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsLoad {
    pub settings: Settings,
    pub path: PathBuf,
    pub created: bool,
}

/// Reads the settings file, writing the defaults first if it does not exist.
pub fn load_or_create(path: &Path) -> Result<SettingsLoad> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)?;
        return Ok(SettingsLoad {
            settings,
            path: path.to_path_buf(),
            created: false,
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let settings = Settings::default();
    fs::write(path, toml::to_string_pretty(&settings)?)?;
    tracing::info!(path = %path.display(), "wrote default settings");
    Ok(SettingsLoad {
        settings,
        path: path.to_path_buf(),
        created: true,
    })
}
