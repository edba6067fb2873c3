//! Income stream and paycheck entities
//!
//! Paycheck entries reference a stream by ID. Deleting a stream does not
//! cascade; orphaned paychecks stay in the collection and render with an
//! absent stream name.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::IncomeKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStream {
    pub id: String,
    pub name: String,
    pub kind: IncomeKind,
    pub is_active: bool,
}

/// Creation record: a stream missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewIncomeStream {
    pub name: String,
    pub kind: IncomeKind,
    pub is_active: bool,
}

/// Partial update for an income stream
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncomeStreamPatch {
    pub name: Option<String>,
    pub kind: Option<IncomeKind>,
    pub is_active: Option<bool>,
}

impl IncomeStreamPatch {
    pub fn apply(self, stream: &mut IncomeStream) {
        if let Some(name) = self.name {
            stream.name = name;
        }
        if let Some(kind) = self.kind {
            stream.kind = kind;
        }
        if let Some(is_active) = self.is_active {
            stream.is_active = is_active;
        }
    }
}

/// One recorded paycheck with its withholding breakdown
///
/// `received_net` is what actually arrived; the calculation engine
/// derives the expected net and the discrepancy from these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaycheckEntry {
    pub id: String,
    pub stream_id: String,
    pub period_start: String,
    pub period_end: String,
    pub paycheck_date: String,
    pub gross_amount: f64,
    pub hours_worked: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub federal_wh: f64,
    pub fica: f64,
    pub medicare_ee: f64,
    pub state_wh: f64,
    pub retirement: f64,
    pub other_pre_tax: f64,
    pub received_net: f64,
}

/// Creation record: a paycheck missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPaycheckEntry {
    pub stream_id: String,
    pub period_start: String,
    pub period_end: String,
    pub paycheck_date: String,
    pub gross_amount: f64,
    pub hours_worked: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub federal_wh: f64,
    pub fica: f64,
    pub medicare_ee: f64,
    pub state_wh: f64,
    pub retirement: f64,
    pub other_pre_tax: f64,
    pub received_net: f64,
}
