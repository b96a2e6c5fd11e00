use bill_core::{BillRecord, ComputedBill};
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{BILL_COLUMNS, row_to_bill_record};

impl Db {
    pub fn insert_bill(&self, bill: &ComputedBill) -> Result<BillRecord> {
        self.insert_bill_at(bill, Utc::now())
    }

    pub fn insert_bill_at(
        &self,
        bill: &ComputedBill,
        created_at: DateTime<Utc>,
    ) -> Result<BillRecord> {
        self.conn.execute(
            r#"
            INSERT INTO bills (
              month, consumption, rebate_percent, total_charge, final_cost, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                bill.month.name(),
                bill.consumption,
                bill.rebate.percent(),
                bill.total_charge,
                bill.final_cost,
                created_at,
            ],
        )?;
        Ok(bill.into_record(self.conn.last_insert_rowid(), created_at))
    }

    pub fn get_bill(&self, id: i64) -> Result<Option<BillRecord>> {
        self.conn
            .query_row(
                &format!("SELECT {BILL_COLUMNS} FROM bills WHERE id = ?1"),
                params![id],
                row_to_bill_record,
            )
            .optional()
            .map_err(DbError::from)
    }

    /// Newest first; bills created in the same instant keep insertion order reversed.
    pub fn list_bills(&self) -> Result<Vec<BillRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {BILL_COLUMNS} FROM bills ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map([], row_to_bill_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Writes the inputs and derived charges of an existing bill. `created_at`
    /// is never touched. Returns false when no bill has this id.
    pub fn update_bill(&self, bill: &BillRecord) -> Result<bool> {
        let rows = self.conn.execute(
            r#"
            UPDATE bills
            SET month = ?1,
                consumption = ?2,
                rebate_percent = ?3,
                total_charge = ?4,
                final_cost = ?5
            WHERE id = ?6
            "#,
            params![
                bill.month.name(),
                bill.consumption,
                bill.rebate.percent(),
                bill.total_charge,
                bill.final_cost,
                bill.id,
            ],
        )?;
        Ok(rows > 0)
    }

    pub fn delete_bill(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM bills WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    pub fn count_bills(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM bills", [], |row| row.get(0))
            .map_err(DbError::from)
    }
}
