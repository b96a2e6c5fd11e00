#![allow(dead_code)]

use std::path::PathBuf;

use bill_core::{BillInput, ComputedBill, validate};
use bill_db::Db;
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn make_bill(month: &str, consumption: &str, rebate_percent: f64) -> ComputedBill {
    let input =
        validate(&BillInput::new(month, consumption, rebate_percent)).expect("valid input");
    ComputedBill::derive(&input)
}

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, hour, minute, 0)
        .single()
        .expect("timestamp")
}
