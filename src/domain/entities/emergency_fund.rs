//! Emergency fund scenario entity
//!
//! A fixed seeded set of eleven scenarios. Users toggle scenarios on and
//! off and size them; they never create or delete rows. Disabling keeps
//! the stored amount so re-enabling restores it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundScenario {
    pub id: String,
    pub label: String,
    /// Sizing hint shown under the label, e.g. "Example: $500-$2,000"
    pub example_hint: String,
    pub enabled: bool,
    pub amount: f64,
}
