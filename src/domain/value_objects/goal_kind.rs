//! Goal kind value object

use serde::{Deserialize, Serialize};

/// What a goal is working toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    #[default]
    Savings,
    DebtPayoff,
    Milestone,
    Habit,
}

impl GoalKind {
    pub const ALL: [GoalKind; 4] = [
        GoalKind::Savings,
        GoalKind::DebtPayoff,
        GoalKind::Milestone,
        GoalKind::Habit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Savings => "Savings",
            GoalKind::DebtPayoff => "Debt Payoff",
            GoalKind::Milestone => "Milestone",
            GoalKind::Habit => "Habit",
        }
    }

    /// Debt goals count progress down toward zero rather than up to a target
    pub fn is_debt_payoff(&self) -> bool {
        matches!(self, GoalKind::DebtPayoff)
    }
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalKind::Savings => write!(f, "savings"),
            GoalKind::DebtPayoff => write!(f, "debt_payoff"),
            GoalKind::Milestone => write!(f, "milestone"),
            GoalKind::Habit => write!(f, "habit"),
        }
    }
}
