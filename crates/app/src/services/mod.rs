mod bills;

use std::sync::Arc;

use crate::app::AppConfig;
use crate::repository::SqliteBillRepository;

pub use bills::BillService;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub bills: BillService<SqliteBillRepository>,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            bills: BillService::new(SqliteBillRepository::new(shared)),
        }
    }
}
