use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::services::AppServices;
use crate::startup::AppPaths;
use bill_db::Db;

/// Files needed to run the calculator.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
}

/// Application state handed to the UI layer.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> Self {
        let config = AppConfig { db_path };
        let services = AppServices::new(&config);
        Self { config, services }
    }

    pub fn from_paths(paths: &AppPaths) -> Self {
        Self::new(paths.db_path.clone())
    }

    pub fn is_fresh_db(&self) -> bool {
        !self.config.db_path.exists()
    }

    pub fn setup_db(&self) -> Result<()> {
        setup_db(&self.config.db_path)
    }

    pub fn initialize(&self) -> Result<()> {
        let is_fresh_db = self.is_fresh_db();
        self.setup_db().inspect_err(|err| {
            tracing::warn!(error = %err, "failed to initialize bill store");
        })?;
        tracing::info!(
            db_path = %self.config.db_path.display(),
            fresh = is_fresh_db,
            "bill store ready"
        );
        Ok(())
    }
}

pub fn setup_db(path: &Path) -> Result<()> {
    let mut db = Db::open(path)?;
    db.migrate()?;
    Ok(())
}
