use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Discount applied to the tiered charge. Only whole percents from 0 to 5
/// are offered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub enum Rebate {
    #[default]
    None,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rebate {
    pub const ALL: [Rebate; 6] = [
        Rebate::None,
        Rebate::One,
        Rebate::Two,
        Rebate::Three,
        Rebate::Four,
        Rebate::Five,
    ];

    pub fn percent(self) -> f64 {
        match self {
            Rebate::None => 0.0,
            Rebate::One => 1.0,
            Rebate::Two => 2.0,
            Rebate::Three => 3.0,
            Rebate::Four => 4.0,
            Rebate::Five => 5.0,
        }
    }

    /// Multiplier applied to the charge, `1 - percent / 100`.
    pub fn factor(self) -> f64 {
        1.0 - self.percent() / 100.0
    }
}

impl TryFrom<f64> for Rebate {
    type Error = ValidationError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Rebate::ALL
            .into_iter()
            .find(|rebate| rebate.percent() == percent)
            .ok_or_else(|| ValidationError::InvalidRebate(percent.to_string()))
    }
}

impl From<Rebate> for f64 {
    fn from(rebate: Rebate) -> Self {
        rebate.percent()
    }
}

impl FromStr for Rebate {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let percent = number
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidRebate(trimmed.to_string()))?;
        Rebate::try_from(percent).map_err(|_| ValidationError::InvalidRebate(trimmed.to_string()))
    }
}

impl fmt::Display for Rebate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent() as u8)
    }
}

pub fn apply_rebate(charge: f64, rebate: Rebate) -> f64 {
    charge * rebate.factor()
}

/// Untyped entry point for callers holding a raw percent.
pub fn apply_rebate_percent(charge: f64, rebate_percent: f64) -> Result<f64, ValidationError> {
    let rebate = Rebate::try_from(rebate_percent)?;
    Ok(apply_rebate(charge, rebate))
}
