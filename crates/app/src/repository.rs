use std::sync::Arc;

use bill_core::{BillRecord, ComputedBill};
use bill_db::Db;

use crate::app::AppConfig;
use crate::error::{AppError, Result};

/// Storage for bill records. Each call is atomic for the one record it touches.
pub trait BillRepository {
    /// Stores a priced bill and returns it with its assigned id and creation time.
    fn create(&self, bill: &ComputedBill) -> Result<BillRecord>;

    fn get_by_id(&self, id: i64) -> Result<Option<BillRecord>>;

    /// All bills, newest first.
    fn list_all(&self) -> Result<Vec<BillRecord>>;

    /// Overwrites an existing bill as given. Nothing is recomputed here and
    /// `created_at` is left as stored.
    fn update(&self, bill: &BillRecord) -> Result<()>;

    /// Returns false when there was nothing to delete.
    fn delete(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed repository. Opens a connection per call; it is closed when
/// the call returns, whichever way it returns.
#[derive(Clone)]
pub struct SqliteBillRepository {
    config: Arc<AppConfig>,
}

impl SqliteBillRepository {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        Ok(Db::open(&self.config.db_path)?)
    }
}

impl BillRepository for SqliteBillRepository {
    fn create(&self, bill: &ComputedBill) -> Result<BillRecord> {
        let db = self.db()?;
        Ok(db.insert_bill(bill)?)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<BillRecord>> {
        let db = self.db()?;
        Ok(db.get_bill(id)?)
    }

    fn list_all(&self) -> Result<Vec<BillRecord>> {
        let db = self.db()?;
        Ok(db.list_bills()?)
    }

    fn update(&self, bill: &BillRecord) -> Result<()> {
        let db = self.db()?;
        if db.update_bill(bill)? {
            Ok(())
        } else {
            Err(AppError::NotFound(bill.id))
        }
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let db = self.db()?;
        Ok(db.delete_bill(id)?)
    }
}
