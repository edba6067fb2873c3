//! Institution kind value object

use serde::{Deserialize, Serialize};

/// What sort of institution a comparison row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionKind {
    #[default]
    Bank,
    CreditUnion,
    Brokerage,
    Neobank,
}

impl InstitutionKind {
    pub const ALL: [InstitutionKind; 4] = [
        InstitutionKind::Bank,
        InstitutionKind::CreditUnion,
        InstitutionKind::Brokerage,
        InstitutionKind::Neobank,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InstitutionKind::Bank => "Bank",
            InstitutionKind::CreditUnion => "Credit Union",
            InstitutionKind::Brokerage => "Brokerage",
            InstitutionKind::Neobank => "Neobank",
        }
    }
}

impl std::fmt::Display for InstitutionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstitutionKind::Bank => write!(f, "bank"),
            InstitutionKind::CreditUnion => write!(f, "credit_union"),
            InstitutionKind::Brokerage => write!(f, "brokerage"),
            InstitutionKind::Neobank => write!(f, "neobank"),
        }
    }
}
