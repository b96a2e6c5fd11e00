use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tariff::DOMESTIC_TARIFF;
use crate::validate::{ValidInput, ValidationError, parse_consumption, validate_values};
use crate::{Month, Rebate, apply_rebate};

/// A priced bill that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedBill {
    pub month: Month,
    pub consumption: f64,
    pub rebate: Rebate,
    pub total_charge: f64,
    pub final_cost: f64,
}

impl ComputedBill {
    /// The single place where `total_charge` and `final_cost` are derived.
    pub fn derive(input: &ValidInput) -> Self {
        let total_charge = DOMESTIC_TARIFF.charge(input.consumption);
        Self {
            month: input.month,
            consumption: input.consumption,
            rebate: input.rebate,
            total_charge,
            final_cost: apply_rebate(total_charge, input.rebate),
        }
    }

    pub fn into_record(self, id: i64, created_at: DateTime<Utc>) -> BillRecord {
        BillRecord {
            id,
            month: self.month,
            consumption: self.consumption,
            rebate: self.rebate,
            total_charge: self.total_charge,
            final_cost: self.final_cost,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    pub id: i64,
    pub month: Month,
    pub consumption: f64,
    pub rebate: Rebate,
    pub total_charge: f64,
    pub final_cost: f64,
    pub created_at: DateTime<Utc>,
}

impl BillRecord {
    pub fn computed(&self) -> ComputedBill {
        ComputedBill {
            month: self.month,
            consumption: self.consumption,
            rebate: self.rebate,
            total_charge: self.total_charge,
            final_cost: self.final_cost,
        }
    }

    /// Replaces the inputs and re-derives the charges, keeping `id` and `created_at`.
    pub fn apply(&mut self, input: &ValidInput) {
        let computed = ComputedBill::derive(input);
        self.month = computed.month;
        self.consumption = computed.consumption;
        self.rebate = computed.rebate;
        self.total_charge = computed.total_charge;
        self.final_cost = computed.final_cost;
    }
}

/// Partial edit of a stored bill. Unset fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillEdit {
    pub month: Option<String>,
    pub consumption: Option<String>,
    pub rebate_percent: Option<f64>,
}

impl BillEdit {
    /// Overlays the edit on `record` and validates the result as a whole.
    pub fn resolve(&self, record: &BillRecord) -> Result<ValidInput, ValidationError> {
        let month = self
            .month
            .as_deref()
            .unwrap_or(record.month.name())
            .parse::<Month>()?;
        let consumption = match self.consumption.as_deref() {
            Some(value) => parse_consumption(value)?,
            None => record.consumption,
        };
        let rebate_percent = self.rebate_percent.unwrap_or(record.rebate.percent());
        validate_values(month.name(), consumption, rebate_percent)
    }
}
