use bill_core::{BillRecord, Month, Rebate};
use rusqlite::Row;
use rusqlite::types::Type;

pub(crate) const BILL_COLUMNS: &str =
    "id, month, consumption, rebate_percent, total_charge, final_cost, created_at";

pub(crate) fn row_to_bill_record(
    row: &Row<'_>,
) -> std::result::Result<BillRecord, rusqlite::Error> {
    let month: String = row.get(1)?;
    let month = month
        .parse::<Month>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(err)))?;
    let rebate: f64 = row.get(3)?;
    let rebate = Rebate::try_from(rebate)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(3, Type::Real, Box::new(err)))?;
    Ok(BillRecord {
        id: row.get(0)?,
        month,
        consumption: row.get(2)?,
        rebate,
        total_charge: row.get(4)?,
        final_cost: row.get(5)?,
        created_at: row.get(6)?,
    })
}
