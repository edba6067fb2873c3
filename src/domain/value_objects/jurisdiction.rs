//! Tax jurisdiction value object

use serde::{Deserialize, Serialize};

/// Which authority an estimated tax payment went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    #[default]
    Federal,
    State,
}

impl Jurisdiction {
    pub fn label(&self) -> &'static str {
        match self {
            Jurisdiction::Federal => "Federal",
            Jurisdiction::State => "State",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Jurisdiction::Federal => write!(f, "federal"),
            Jurisdiction::State => write!(f, "state"),
        }
    }
}
