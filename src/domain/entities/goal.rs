//! Goal entity
//!
//! A financial goal with a SMART breakdown. Goals may link to an account
//! by ID; the link is never validated and readers tolerate dangling IDs.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{GoalKind, Timeframe};

/// SMART breakdown attached to every goal
///
/// All five fields are free text and may be empty. Goals created during
/// onboarding start with a blank plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SmartPlan {
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub time_bound: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub timeframe: Timeframe,
    pub kind: GoalKind,
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    pub current_amount: f64,
    /// Target completion date, ISO `YYYY-MM-DD`
    pub target_date: String,
    pub linked_account_id: Option<String>,
    pub smart: SmartPlan,
    /// Stamped by the store on add, ISO `YYYY-MM-DD`
    pub created_at: String,
    pub completed_at: Option<String>,
}

impl Goal {
    pub fn progress_fraction(&self) -> f64 {
        if self.target_amount <= 0.0 {
            0.0
        } else {
            (self.current_amount / self.target_amount).clamp(0.0, 1.0)
        }
    }
}

/// Creation record: a goal missing only the generated fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewGoal {
    pub timeframe: Timeframe,
    pub kind: GoalKind,
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: String,
    pub linked_account_id: Option<String>,
    pub smart: SmartPlan,
    pub completed_at: Option<String>,
}

/// Partial update for a goal
///
/// `None` leaves a field untouched. For fields that are optional on the
/// entity, `Some(None)` clears the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalPatch {
    pub timeframe: Option<Timeframe>,
    pub kind: Option<GoalKind>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<String>,
    pub linked_account_id: Option<Option<String>>,
    pub smart: Option<SmartPlan>,
    pub completed_at: Option<Option<String>>,
}

impl GoalPatch {
    pub fn apply(self, goal: &mut Goal) {
        if let Some(timeframe) = self.timeframe {
            goal.timeframe = timeframe;
        }
        if let Some(kind) = self.kind {
            goal.kind = kind;
        }
        if let Some(title) = self.title {
            goal.title = title;
        }
        if let Some(description) = self.description {
            goal.description = description;
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            goal.current_amount = current_amount;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        if let Some(linked_account_id) = self.linked_account_id {
            goal.linked_account_id = linked_account_id;
        }
        if let Some(smart) = self.smart {
            goal.smart = smart;
        }
        if let Some(completed_at) = self.completed_at {
            goal.completed_at = completed_at;
        }
    }
}
