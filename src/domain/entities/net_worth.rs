//! Net worth tracking entities
//!
//! A net worth entry freezes per-account balances for one month. The
//! values map is keyed by account ID; deleted accounts leave their keys
//! behind and readers skip them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthEntry {
    pub id: String,
    /// Month key, `YYYY-MM`
    pub date: String,
    /// account_id -> balance captured for that month
    pub values: BTreeMap<String, f64>,
    pub note: Option<String>,
}

impl NetWorthEntry {
    /// Sum of all captured balances, sign-agnostic (liabilities are
    /// entered negative by the caller)
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}

/// Creation record: an entry missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewNetWorthEntry {
    pub date: String,
    pub values: BTreeMap<String, f64>,
    pub note: Option<String>,
}

/// Partial update for a net worth entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetWorthEntryPatch {
    pub date: Option<String>,
    pub values: Option<BTreeMap<String, f64>>,
    pub note: Option<Option<String>>,
}

impl NetWorthEntryPatch {
    pub fn apply(self, entry: &mut NetWorthEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(values) = self.values {
            entry.values = values;
        }
        if let Some(note) = self.note {
            entry.note = note;
        }
    }
}

/// Monthly growth goal for the net worth page (singleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSettings {
    pub monthly_growth_goal: f64,
}

impl Default for NetWorthSettings {
    fn default() -> Self {
        Self {
            monthly_growth_goal: 200.0,
        }
    }
}

/// Merge-patch for the net worth settings singleton
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetWorthSettingsPatch {
    pub monthly_growth_goal: Option<f64>,
}

impl NetWorthSettingsPatch {
    pub fn apply(self, settings: &mut NetWorthSettings) {
        if let Some(monthly_growth_goal) = self.monthly_growth_goal {
            settings.monthly_growth_goal = monthly_growth_goal;
        }
    }
}
