use rusty_money::{Money, iso};

/// Symbol rusty_money prints for `iso::MYR`.
pub const CURRENCY_PREFIX: &str = "RM";

/// Rounds to whole sen.
pub fn to_money(amount: f64) -> Money<'static, iso::Currency> {
    Money::from_minor((amount * 100.0).round() as i64, iso::MYR)
}

/// Formats an amount as `RM 1,234.56`.
pub fn format_currency(amount: f64) -> String {
    format!("{} {}", CURRENCY_PREFIX, format_amount(amount))
}

/// Two decimals with thousands separators, e.g. `1,234.56`.
pub fn format_amount(amount: f64) -> String {
    to_money(amount).to_string().replacen(CURRENCY_PREFIX, "", 1)
}

pub fn format_kwh(consumption: f64) -> String {
    if consumption.fract() == 0.0 {
        format!("{} kWh", consumption as i64)
    } else {
        format!("{consumption} kWh")
    }
}
