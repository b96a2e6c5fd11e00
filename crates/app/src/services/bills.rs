use bill_core::{
    BillEdit, BillInput, BillRecord, ComputedBill, ValidInput, validate, validate_values,
};

use crate::error::{AppError, Result};
use crate::repository::BillRepository;
use crate::views::Quote;

/// Runs the calculate, save and edit workflows against a repository.
#[derive(Clone)]
pub struct BillService<R> {
    repo: R,
}

impl<R: BillRepository> BillService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and prices the form.
    pub fn compute(&self, input: &BillInput) -> Result<ComputedBill> {
        let valid = checked(input)?;
        Ok(ComputedBill::derive(&valid))
    }

    /// Prices the form for display without storing anything.
    pub fn quote(&self, input: &BillInput) -> Result<Quote> {
        let bill = self.compute(input)?;
        Ok(Quote::from(&bill))
    }

    pub fn compute_and_save(&self, input: &BillInput) -> Result<BillRecord> {
        let bill = self.compute(input)?;
        self.save(&bill)
    }

    /// Stores a priced bill and returns it as persisted. The charges are
    /// derived again from the bill's inputs; the ones passed in are ignored.
    pub fn save(&self, bill: &ComputedBill) -> Result<BillRecord> {
        let valid = validate_values(bill.month.name(), bill.consumption, bill.rebate.percent())?;
        let bill = ComputedBill::derive(&valid);
        let record = self.repo.create(&bill).inspect_err(|err| {
            tracing::warn!(error = %err, "failed to save bill");
        })?;
        tracing::info!(
            bill_id = record.id,
            month = %record.month,
            consumption = record.consumption,
            "bill saved"
        );
        Ok(record)
    }

    pub fn get(&self, id: i64) -> Result<BillRecord> {
        self.repo.get_by_id(id)?.ok_or(AppError::NotFound(id))
    }

    pub fn list(&self) -> Result<Vec<BillRecord>> {
        self.repo.list_all()
    }

    /// Applies `edit` to the stored bill, re-deriving both charges before the
    /// write. `id` and `created_at` are kept.
    pub fn edit_and_update(&self, id: i64, edit: &BillEdit) -> Result<BillRecord> {
        let mut record = self.get(id)?;
        let valid = edit.resolve(&record).inspect_err(|err| {
            tracing::debug!(bill_id = id, error = %err, "bill edit rejected");
        })?;
        record.apply(&valid);
        self.repo.update(&record).inspect_err(|err| {
            tracing::warn!(bill_id = id, error = %err, "failed to update bill");
        })?;
        tracing::info!(bill_id = id, month = %record.month, "bill updated");
        Ok(record)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.repo.delete(id)?;
        if deleted {
            tracing::info!(bill_id = id, "bill deleted");
        } else {
            tracing::debug!(bill_id = id, "no bill to delete");
        }
        Ok(deleted)
    }
}

fn checked(input: &BillInput) -> Result<ValidInput> {
    validate(input).map_err(|err| {
        tracing::debug!(error = %err, "bill input rejected");
        AppError::from(err)
    })
}
