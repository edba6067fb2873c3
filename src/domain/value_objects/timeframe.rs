//! Goal timeframe value object
//!
//! - `Short`: under 6 months
//! - `Mid`: 6 months to 5 years
//! - `Long`: 5+ years

use serde::{Deserialize, Serialize};

/// Horizon bucket a goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Short,
    Mid,
    Long,
}

impl Timeframe {
    /// All timeframes in display order
    pub const ALL: [Timeframe; 3] = [Timeframe::Short, Timeframe::Mid, Timeframe::Long];

    /// Display label for goal boards
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Short => "Short-Term",
            Timeframe::Mid => "Mid-Term",
            Timeframe::Long => "Long-Term",
        }
    }

    /// Horizon hint shown under the label
    pub fn horizon(&self) -> &'static str {
        match self {
            Timeframe::Short => "Under 6 months",
            Timeframe::Mid => "6 months - 5 years",
            Timeframe::Long => "5+ years",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timeframe::Short => write!(f, "short"),
            Timeframe::Mid => write!(f, "mid"),
            Timeframe::Long => write!(f, "long"),
        }
    }
}
