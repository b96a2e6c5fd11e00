use bill_core::{
    BillRecord, BlockCharge, ComputedBill, DOMESTIC_TARIFF, format_currency, format_kwh,
};
use chrono::SecondsFormat;
use serde::Serialize;

/// Result of pricing a form without saving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub month: String,
    pub consumption: f64,
    pub rebate_percent: f64,
    pub total_charge: f64,
    pub final_cost: f64,
    pub total_charge_display: String,
    pub final_cost_display: String,
    pub rebate_display: String,
    pub breakdown: Vec<BlockCharge>,
}

impl From<&ComputedBill> for Quote {
    fn from(bill: &ComputedBill) -> Self {
        Self {
            month: bill.month.to_string(),
            consumption: bill.consumption,
            rebate_percent: bill.rebate.percent(),
            total_charge: bill.total_charge,
            final_cost: bill.final_cost,
            total_charge_display: format_currency(bill.total_charge),
            final_cost_display: format_currency(bill.final_cost),
            rebate_display: bill.rebate.to_string(),
            breakdown: DOMESTIC_TARIFF.breakdown(bill.consumption),
        }
    }
}

/// A stored bill as shown in the history list and detail screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillView {
    pub id: i64,
    pub month: String,
    pub consumption: f64,
    pub consumption_display: String,
    pub rebate_percent: f64,
    pub rebate_display: String,
    pub total_charge: f64,
    pub total_charge_display: String,
    pub final_cost: f64,
    pub final_cost_display: String,
    pub created_at: String,
}

impl From<&BillRecord> for BillView {
    fn from(bill: &BillRecord) -> Self {
        Self {
            id: bill.id,
            month: bill.month.to_string(),
            consumption: bill.consumption,
            consumption_display: format_kwh(bill.consumption),
            rebate_percent: bill.rebate.percent(),
            rebate_display: bill.rebate.to_string(),
            total_charge: bill.total_charge,
            total_charge_display: format_currency(bill.total_charge),
            final_cost: bill.final_cost,
            final_cost_display: format_currency(bill.final_cost),
            created_at: bill
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
