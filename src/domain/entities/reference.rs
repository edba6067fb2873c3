//! Comparison-table entities: institutions, securities, card offers
//!
//! These are research notes, not live accounts. Rate and fee columns are
//! free strings exactly as entered ("4.35", "", "$12/mo (waivable)").

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::InstitutionKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRow {
    pub id: String,
    pub name: String,
    pub kind: InstitutionKind,
    pub fees_minimums: String,
    pub checking_apy: String,
    pub savings_apy: String,
    pub cd_6mo: String,
    pub cd_12mo: String,
    pub cd_24mo: String,
    pub pros: String,
    pub cons: String,
    pub is_currently_used: bool,
}

/// Creation record: a row missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewInstitutionRow {
    pub name: String,
    pub kind: InstitutionKind,
    pub fees_minimums: String,
    pub checking_apy: String,
    pub savings_apy: String,
    pub cd_6mo: String,
    pub cd_12mo: String,
    pub cd_24mo: String,
    pub pros: String,
    pub cons: String,
    pub is_currently_used: bool,
}

/// Partial update for an institution row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstitutionRowPatch {
    pub name: Option<String>,
    pub kind: Option<InstitutionKind>,
    pub fees_minimums: Option<String>,
    pub checking_apy: Option<String>,
    pub savings_apy: Option<String>,
    pub cd_6mo: Option<String>,
    pub cd_12mo: Option<String>,
    pub cd_24mo: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub is_currently_used: Option<bool>,
}

impl InstitutionRowPatch {
    pub fn apply(self, row: &mut InstitutionRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(kind) = self.kind {
            row.kind = kind;
        }
        if let Some(fees_minimums) = self.fees_minimums {
            row.fees_minimums = fees_minimums;
        }
        if let Some(checking_apy) = self.checking_apy {
            row.checking_apy = checking_apy;
        }
        if let Some(savings_apy) = self.savings_apy {
            row.savings_apy = savings_apy;
        }
        if let Some(cd_6mo) = self.cd_6mo {
            row.cd_6mo = cd_6mo;
        }
        if let Some(cd_12mo) = self.cd_12mo {
            row.cd_12mo = cd_12mo;
        }
        if let Some(cd_24mo) = self.cd_24mo {
            row.cd_24mo = cd_24mo;
        }
        if let Some(pros) = self.pros {
            row.pros = pros;
        }
        if let Some(cons) = self.cons {
            row.cons = cons;
        }
        if let Some(is_currently_used) = self.is_currently_used {
            row.is_currently_used = is_currently_used;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityReference {
    pub id: String,
    pub ticker: String,
    pub name: String,
    /// Free string as published, e.g. "0.03"
    pub expense_ratio: String,
    pub notes: String,
}

/// Creation record: a security missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewSecurityReference {
    pub ticker: String,
    pub name: String,
    pub expense_ratio: String,
    pub notes: String,
}

/// Partial update for a security reference
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecurityReferencePatch {
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub expense_ratio: Option<String>,
    pub notes: Option<String>,
}

impl SecurityReferencePatch {
    pub fn apply(self, security: &mut SecurityReference) {
        if let Some(ticker) = self.ticker {
            security.ticker = ticker;
        }
        if let Some(name) = self.name {
            security.name = name;
        }
        if let Some(expense_ratio) = self.expense_ratio {
            security.expense_ratio = expense_ratio;
        }
        if let Some(notes) = self.notes {
            security.notes = notes;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardComparison {
    pub id: String,
    pub card: String,
    /// How likely an application is to be approved, free text
    pub likelihood: String,
    pub annual_fee: String,
    pub reward_type: String,
    pub apr: String,
    pub promo_details: String,
}

/// Creation record: a comparison missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCardComparison {
    pub card: String,
    pub likelihood: String,
    pub annual_fee: String,
    pub reward_type: String,
    pub apr: String,
    pub promo_details: String,
}

/// Partial update for a card comparison
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardComparisonPatch {
    pub card: Option<String>,
    pub likelihood: Option<String>,
    pub annual_fee: Option<String>,
    pub reward_type: Option<String>,
    pub apr: Option<String>,
    pub promo_details: Option<String>,
}

impl CardComparisonPatch {
    pub fn apply(self, comparison: &mut CardComparison) {
        if let Some(card) = self.card {
            comparison.card = card;
        }
        if let Some(likelihood) = self.likelihood {
            comparison.likelihood = likelihood;
        }
        if let Some(annual_fee) = self.annual_fee {
            comparison.annual_fee = annual_fee;
        }
        if let Some(reward_type) = self.reward_type {
            comparison.reward_type = reward_type;
        }
        if let Some(apr) = self.apr {
            comparison.apr = apr;
        }
        if let Some(promo_details) = self.promo_details {
            comparison.promo_details = promo_details;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_roundtrip_keeps_blank_columns() {
        let row = InstitutionRow {
            id: "i2".to_string(),
            name: "Marcus by Goldman Sachs".to_string(),
            kind: InstitutionKind::Bank,
            fees_minimums: "No fees".to_string(),
            checking_apy: String::new(),
            savings_apy: "4.50".to_string(),
            cd_6mo: "5.10".to_string(),
            cd_12mo: "5.15".to_string(),
            cd_24mo: "4.25".to_string(),
            pros: "High savings APY".to_string(),
            cons: "Savings only, no checking".to_string(),
            is_currently_used: false,
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: InstitutionRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
        assert_eq!(back.checking_apy, "");
    }
}
