//! Draft data accumulated by the wizard
//!
//! Nothing in here touches the store. Drafts live in the flow until a
//! commit boundary writes them through, so abandoning the wizard
//! mid-way leaks nothing into the committed collections.

use crate::domain::entities::{EmergencyFundScenario, NewAccount, NewIncomeStream, NewTransaction};
use crate::domain::value_objects::{GoalKind, Timeframe};

/// A goal as collected by the wizard: the committed record fills in the
/// description, SMART block and progress later
#[derive(Debug, Clone, Default)]
pub struct DraftGoal {
    pub timeframe: Timeframe,
    pub kind: GoalKind,
    pub title: String,
    pub target_amount: f64,
    pub target_date: String,
}

/// Everything the wizard collects, superset of all step payloads
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub goals: Vec<DraftGoal>,
    pub cash_accounts: Vec<NewAccount>,
    pub investment_accounts: Vec<NewAccount>,
    pub loan_accounts: Vec<NewAccount>,
    pub card_accounts: Vec<NewAccount>,
    pub expense_start: String,
    pub expense_end: String,
    pub monthly_goal: f64,
    pub transactions: Vec<NewTransaction>,
    pub streams: Vec<NewIncomeStream>,
    /// Working copy of the store's scenario list, diffed at Finish
    pub scenarios: Vec<EmergencyFundScenario>,
}

impl Draft {
    /// Draft accounts in the order Finish commits them: cash,
    /// investment, loan, credit card
    pub fn all_accounts(&self) -> impl Iterator<Item = &NewAccount> {
        self.cash_accounts
            .iter()
            .chain(&self.investment_accounts)
            .chain(&self.loan_accounts)
            .chain(&self.card_accounts)
    }

    /// Assets minus liabilities over the drafts, for the Done screen
    pub fn net_worth_preview(&self) -> f64 {
        self.all_accounts()
            .map(|a| {
                if a.kind.is_asset() {
                    a.balance
                } else {
                    -a.balance
                }
            })
            .sum()
    }

    /// Flips a draft scenario. The amount stays, matching the main
    /// app's toggle, so re-enabling restores what was entered.
    pub fn toggle_scenario(&mut self, id: &str) {
        if let Some(scenario) = self.scenarios.iter_mut().find(|s| s.id == id) {
            scenario.enabled = !scenario.enabled;
        }
    }

    pub fn set_scenario_amount(&mut self, id: &str, amount: f64) {
        if let Some(scenario) = self.scenarios.iter_mut().find(|s| s.id == id) {
            scenario.amount = amount;
        }
    }
}
