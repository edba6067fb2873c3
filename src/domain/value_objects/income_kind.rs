//! Income stream kind value object
//!
//! W-2 and hourly income is withheld at the source; fellowships and
//! scholarships usually are not, which makes estimated quarterly taxes the
//! payer's problem.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    #[default]
    W2,
    Hourly,
    Fellowship,
    Scholarship,
    Other,
}

impl IncomeKind {
    pub const ALL: [IncomeKind; 5] = [
        IncomeKind::W2,
        IncomeKind::Hourly,
        IncomeKind::Fellowship,
        IncomeKind::Scholarship,
        IncomeKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncomeKind::W2 => "W-2 (Salary)",
            IncomeKind::Hourly => "Hourly",
            IncomeKind::Fellowship => "Fellowship",
            IncomeKind::Scholarship => "Scholarship",
            IncomeKind::Other => "Other",
        }
    }

    /// True when no tax is withheld at the source
    pub fn is_non_withholding(&self) -> bool {
        matches!(self, IncomeKind::Fellowship | IncomeKind::Scholarship)
    }
}

impl std::fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeKind::W2 => write!(f, "w2"),
            IncomeKind::Hourly => write!(f, "hourly"),
            IncomeKind::Fellowship => write!(f, "fellowship"),
            IncomeKind::Scholarship => write!(f, "scholarship"),
            IncomeKind::Other => write!(f, "other"),
        }
    }
}
