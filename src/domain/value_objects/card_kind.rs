//! Credit card kind value object

use serde::{Deserialize, Serialize};

/// Subtype of a credit card account
///
/// The co-branded variant keeps a hyphen on the wire, which is why it
/// carries an explicit rename instead of relying on the container rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    #[default]
    Standard,
    Store,
    #[serde(rename = "co-branded")]
    CoBranded,
    AuthorizedUser,
}

impl CardKind {
    pub const ALL: [CardKind; 4] = [
        CardKind::Standard,
        CardKind::Store,
        CardKind::CoBranded,
        CardKind::AuthorizedUser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardKind::Standard => "Standard",
            CardKind::Store => "Store Card",
            CardKind::CoBranded => "Co-Branded",
            CardKind::AuthorizedUser => "Authorized User",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Standard => write!(f, "standard"),
            CardKind::Store => write!(f, "store"),
            CardKind::CoBranded => write!(f, "co-branded"),
            CardKind::AuthorizedUser => write!(f, "authorized_user"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_kind_serialization() {
        let json = serde_json::to_string(&CardKind::CoBranded).unwrap();
        assert_eq!(json, "\"co-branded\"");
        let back: CardKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardKind::CoBranded);
    }

    #[test]
    fn test_card_kind_snake_case_variants() {
        let json = serde_json::to_string(&CardKind::AuthorizedUser).unwrap();
        assert_eq!(json, "\"authorized_user\"");
    }

    #[test]
    fn test_card_kind_labels() {
        assert_eq!(CardKind::Standard.label(), "Standard");
        assert_eq!(CardKind::CoBranded.label(), "Co-Branded");
    }
}
