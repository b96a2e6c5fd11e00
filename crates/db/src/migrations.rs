use rusqlite::Connection;

use crate::Db;
use crate::error::Result;

const MIGRATION_0001: &str = include_str!("../migrations/0001_init.sql");
const MIGRATION_0002: &str = include_str!("../migrations/0002_upgrade_legacy_columns.sql");
const MIGRATION_0003: &str = include_str!("../migrations/0003_add_created_at_index.sql");

const MIGRATIONS: &[(&str, &str)] = &[
    ("0001_init", MIGRATION_0001),
    ("0002_upgrade_legacy_columns", MIGRATION_0002),
    ("0003_add_created_at_index", MIGRATION_0003),
];

impl Db {
    /// Brings the schema up to date. Safe to run on every start.
    pub fn migrate(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (name, sql) in MIGRATIONS {
            if *name == "0002_upgrade_legacy_columns" {
                if table_has_column(&tx, "bills", "units")? {
                    tracing::info!("upgrading legacy bills table");
                    tx.execute_batch(sql)?;
                }
                continue;
            }
            tx.execute_batch(sql)?;
        }
        tx.commit()?;
        Ok(())
    }
}

pub(crate) fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
