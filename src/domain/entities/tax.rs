//! Estimated tax payment entity
//!
//! Manual quarterly payments, mostly for non-withholding income streams.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Jurisdiction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedTaxPayment {
    pub id: String,
    pub jurisdiction: Jurisdiction,
    /// ISO `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
    pub confirmation_number: Option<String>,
    /// Free text, e.g. "Q3 2024"
    pub quarter: Option<String>,
}

/// Creation record: a payment missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewEstimatedTaxPayment {
    pub jurisdiction: Jurisdiction,
    pub date: String,
    pub amount: f64,
    pub confirmation_number: Option<String>,
    pub quarter: Option<String>,
}
