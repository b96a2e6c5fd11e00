use bill_core::{BillEdit, BillInput, BillRecord, ComputedBill};

use crate::error::{AppError, Result};
use crate::repository::BillRepository;
use crate::services::BillService;
use crate::views::Quote;

#[derive(Debug, Clone, PartialEq)]
pub enum BillState {
    Draft,
    Computed(ComputedBill),
    Persisted(BillRecord),
    Deleted(i64),
}

/// One pass through the bill form: calculate, save once, then edit or delete.
pub struct BillSession<'a, R> {
    service: &'a BillService<R>,
    state: BillState,
}

impl<'a, R: BillRepository> BillSession<'a, R> {
    pub fn new(service: &'a BillService<R>) -> Self {
        Self {
            service,
            state: BillState::Draft,
        }
    }

    /// Starts a session on a bill that is already stored.
    pub fn open(service: &'a BillService<R>, id: i64) -> Result<Self> {
        let record = service.get(id)?;
        Ok(Self {
            service,
            state: BillState::Persisted(record),
        })
    }

    pub fn state(&self) -> &BillState {
        &self.state
    }

    pub fn calculate(&mut self, input: &BillInput) -> Result<Quote> {
        match self.state {
            BillState::Draft | BillState::Computed(_) => {}
            _ => return Err(invalid_state("this bill is already saved")),
        }
        let bill = self.service.compute(input)?;
        self.state = BillState::Computed(bill);
        Ok(Quote::from(&bill))
    }

    /// Persists the calculated bill. A second save needs a new calculation.
    pub fn save(&mut self) -> Result<BillRecord> {
        let BillState::Computed(bill) = &self.state else {
            return Err(invalid_state("calculate the bill before saving"));
        };
        let record = self.service.save(bill)?;
        self.state = BillState::Persisted(record.clone());
        Ok(record)
    }

    pub fn update(&mut self, edit: &BillEdit) -> Result<BillRecord> {
        let id = self.persisted_id()?;
        let record = self.service.edit_and_update(id, edit)?;
        self.state = BillState::Persisted(record.clone());
        Ok(record)
    }

    pub fn delete(&mut self) -> Result<bool> {
        let id = self.persisted_id()?;
        let deleted = self.service.delete(id)?;
        self.state = BillState::Deleted(id);
        Ok(deleted)
    }

    fn persisted_id(&self) -> Result<i64> {
        match &self.state {
            BillState::Persisted(record) => Ok(record.id),
            BillState::Deleted(id) => Err(invalid_state(&format!("bill {id} was deleted"))),
            _ => Err(invalid_state("save the bill first")),
        }
    }
}

fn invalid_state(message: &str) -> AppError {
    AppError::InvalidInput(message.to_string())
}
