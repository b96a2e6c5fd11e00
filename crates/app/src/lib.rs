pub mod app;
pub mod config;
pub mod error;
pub mod repository;
pub mod services;
pub mod session;
pub mod startup;
pub mod views;

pub use app::{AppConfig, AppState};
pub use config::{Settings, SettingsLoad};
pub use error::{ApiError, AppError, Result};
pub use repository::{BillRepository, SqliteBillRepository};
pub use services::{AppServices, BillService};
pub use session::{BillSession, BillState};
pub use startup::{AppPaths, ensure_app_data_dir};
pub use views::{BillView, Quote};
