use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Month, Rebate};

pub const MIN_CONSUMPTION_KWH: f64 = 1.0;
pub const MAX_CONSUMPTION_KWH: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("please select a month")]
    EmptyMonth,
    #[error("unknown month {0:?}")]
    UnknownMonth(String),
    #[error("units must be a number between 1 and 1000 kWh, got {0:?}")]
    OutOfRange(String),
    #[error("rebate must be one of 0-5%, got {0}")]
    InvalidRebate(String),
}

/// Raw values as entered on the bill form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillInput {
    pub month: String,
    pub consumption: String,
    pub rebate_percent: f64,
}

impl BillInput {
    pub fn new(
        month: impl Into<String>,
        consumption: impl Into<String>,
        rebate_percent: f64,
    ) -> Self {
        Self {
            month: month.into(),
            consumption: consumption.into(),
            rebate_percent,
        }
    }
}

/// Input that passed validation and can be priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidInput {
    pub month: Month,
    pub consumption: f64,
    pub rebate: Rebate,
}

pub fn validate(input: &BillInput) -> Result<ValidInput, ValidationError> {
    let month = input.month.parse::<Month>()?;
    let consumption = parse_consumption(&input.consumption)?;
    let rebate = Rebate::try_from(input.rebate_percent)?;
    Ok(ValidInput {
        month,
        consumption,
        rebate,
    })
}

/// Same checks as [`validate`] for a consumption that is already numeric.
pub fn validate_values(
    month: &str,
    consumption: f64,
    rebate_percent: f64,
) -> Result<ValidInput, ValidationError> {
    let month = month.parse::<Month>()?;
    let consumption = check_consumption(consumption)?;
    let rebate = Rebate::try_from(rebate_percent)?;
    Ok(ValidInput {
        month,
        consumption,
        rebate,
    })
}

pub fn parse_consumption(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::OutOfRange(trimmed.to_string()))?;
    check_consumption(parsed)
}

fn check_consumption(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || !(MIN_CONSUMPTION_KWH..=MAX_CONSUMPTION_KWH).contains(&value) {
        return Err(ValidationError::OutOfRange(value.to_string()));
    }
    Ok(value)
}
