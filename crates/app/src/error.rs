use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] bill_core::ValidationError),
    #[error("db error: {0}")]
    Persistence(#[from] bill_db::DbError),
    #[error("bill {0} not found")]
    NotFound(i64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("config error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Error shape handed to the UI, which shows `message` to the user.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match err {
            AppError::Validation(_) | AppError::InvalidInput(_) => {
                (400, Some("invalid_input".to_string()))
            }
            AppError::NotFound(_) => (404, Some("not_found".to_string())),
            AppError::Persistence(_)
            | AppError::Io(_)
            | AppError::Config(_)
            | AppError::ConfigWrite(_) => (500, None),
        };
        Self {
            status,
            message: err.to_string(),
            code,
        }
    }
}
