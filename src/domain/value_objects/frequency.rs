//! Schedule frequency value object

use serde::{Deserialize, Serialize};

/// How often a schedule item recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    WeeklyBiweekly,
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    /// Display order on the schedule page
    pub const ALL: [Frequency; 4] = [
        Frequency::WeeklyBiweekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Annually,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::WeeklyBiweekly => "Weekly / Biweekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annually => "Annually",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::WeeklyBiweekly => write!(f, "weekly_biweekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Quarterly => write!(f, "quarterly"),
            Frequency::Annually => write!(f, "annually"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Frequency::WeeklyBiweekly).unwrap(),
            "\"weekly_biweekly\""
        );
    }

    #[test]
    fn frequency_serde_roundtrip() {
        for freq in Frequency::ALL {
            let json = serde_json::to_string(&freq).unwrap();
            let parsed: Frequency = serde_json::from_str(&json).unwrap();
            assert_eq!(freq, parsed);
        }
    }
}
