mod bill;
mod format;
mod month;
mod rebate;
mod tariff;
mod validate;

pub use bill::{BillEdit, BillRecord, ComputedBill};
pub use format::{CURRENCY_PREFIX, format_amount, format_currency, format_kwh, to_money};
pub use month::Month;
pub use rebate::{Rebate, apply_rebate, apply_rebate_percent};
pub use tariff::{BlockCharge, DOMESTIC_TARIFF, Tariff, TariffBlock, charge};
pub use validate::{
    BillInput, MAX_CONSUMPTION_KWH, MIN_CONSUMPTION_KWH, ValidInput, ValidationError,
    parse_consumption, validate, validate_values,
};
