use std::path::PathBuf;

use crate::Result;
use crate::config::{self, Settings};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Clone, Debug)]
pub struct AppPaths {
    pub app_data_dir: PathBuf,
    pub config_path: PathBuf,
    pub db_path: PathBuf,
}

impl AppPaths {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self::with_settings(app_data_dir, &Settings::default())
    }

    pub fn with_settings(app_data_dir: PathBuf, settings: &Settings) -> Self {
        let config_path = app_data_dir.join(CONFIG_FILE_NAME);
        let db_path = app_data_dir.join(&settings.database_file);
        Self {
            app_data_dir,
            config_path,
            db_path,
        }
    }

    /// Creates the data directory, loads `config.toml` and resolves the
    /// database location from it.
    pub fn resolve(app_data_dir: PathBuf) -> Result<Self> {
        let defaults = Self::new(app_data_dir);
        ensure_app_data_dir(&defaults)?;
        let loaded = config::load_or_create(&defaults.config_path)?;
        Ok(Self::with_settings(defaults.app_data_dir, &loaded.settings))
    }
}

pub fn ensure_app_data_dir(paths: &AppPaths) -> Result<()> {
    std::fs::create_dir_all(&paths.app_data_dir)?;
    Ok(())
}
