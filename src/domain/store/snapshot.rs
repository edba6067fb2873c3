//! Snapshot: the full persisted workbook state
//!
//! One serde document holding every collection, the settings singletons
//! and the onboarding flag. The format version rides along so a future
//! layout change can migrate instead of guessing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Account, CardComparison, EmergencyFundScenario, EstimatedTaxPayment, ExpenseSettings, Goal,
    IncomeStream, InstitutionRow, NetWorthEntry, NetWorthSettings, PaycheckEntry, ScheduleItem,
    SecurityReference, Transaction,
};
use crate::domain::store::seed;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub onboarding_completed: bool,
    pub goals: Vec<Goal>,
    pub accounts: Vec<Account>,
    /// Newest first; the store prepends on add
    pub transactions: Vec<Transaction>,
    pub expense_settings: ExpenseSettings,
    pub net_worth_settings: NetWorthSettings,
    pub net_worth_entries: Vec<NetWorthEntry>,
    pub income_streams: Vec<IncomeStream>,
    pub paycheck_entries: Vec<PaycheckEntry>,
    pub estimated_tax_payments: Vec<EstimatedTaxPayment>,
    pub schedule_items: Vec<ScheduleItem>,
    pub institutions: Vec<InstitutionRow>,
    pub securities: Vec<SecurityReference>,
    pub card_comparisons: Vec<CardComparison>,
    pub emergency_fund_scenarios: Vec<EmergencyFundScenario>,
}

impl Snapshot {
    /// Fresh state for a first run: empty collections except the seeded
    /// schedule checklist and scenario set
    pub fn seeded() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            onboarding_completed: false,
            goals: Vec::new(),
            accounts: Vec::new(),
            transactions: Vec::new(),
            expense_settings: ExpenseSettings::default(),
            net_worth_settings: NetWorthSettings::default(),
            net_worth_entries: Vec::new(),
            income_streams: Vec::new(),
            paycheck_entries: Vec::new(),
            estimated_tax_payments: Vec::new(),
            schedule_items: seed::schedule_items(),
            institutions: Vec::new(),
            securities: Vec::new(),
            card_comparisons: Vec::new(),
            emergency_fund_scenarios: seed::emergency_fund_scenarios(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_snapshot_shape() {
        let snapshot = Snapshot::seeded();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert!(!snapshot.onboarding_completed);
        assert!(snapshot.goals.is_empty());
        assert!(snapshot.accounts.is_empty());
        assert_eq!(snapshot.schedule_items.len(), 22);
        assert_eq!(snapshot.emergency_fund_scenarios.len(), 11);
        assert_eq!(snapshot.net_worth_settings.monthly_growth_goal, 200.0);
        assert_eq!(snapshot.expense_settings, ExpenseSettings::default());
    }

    #[test]
    fn test_seeded_snapshot_roundtrips_exactly() {
        let snapshot = Snapshot::seeded();
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
