//! Account entity
//!
//! One record per real-world account. The category discriminant is a sum
//! type so each variant carries exactly the fields valid for it; the
//! snapshot stores it internally tagged as `category`.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CardKind;

/// Category-specific fields, tagged by `category` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum AccountKind {
    Cash {
        /// Free-form subtype, e.g. "Checking" or "High-Yield Savings"
        subtype: String,
        apy: Option<f64>,
    },
    Investment {
        subtype: String,
        /// Stock/bond split as entered, e.g. "80/20"
        allocation_mix: Option<String>,
    },
    Loan {
        subtype: String,
        apr: f64,
        minimum_payment: f64,
        /// Day of month the payment is due
        due_date: Option<u32>,
    },
    CreditCard {
        subtype: CardKind,
        apr: f64,
        credit_limit: f64,
        minimum_payment: f64,
        /// Day of month the payment is due
        payment_due_date: Option<u32>,
        /// Day of month the statement closes
        closing_date: Option<u32>,
        annual_fee: Option<f64>,
        foreign_transaction_fee: Option<f64>,
        rewards: Option<String>,
    },
}

impl AccountKind {
    pub fn is_asset(&self) -> bool {
        matches!(self, AccountKind::Cash { .. } | AccountKind::Investment { .. })
    }

    pub fn category_label(&self) -> &'static str {
        match self {
            AccountKind::Cash { .. } => "Cash",
            AccountKind::Investment { .. } => "Investment",
            AccountKind::Loan { .. } => "Loan",
            AccountKind::CreditCard { .. } => "Credit Card",
        }
    }

    /// Subtype as shown in listings
    pub fn subtype_label(&self) -> String {
        match self {
            AccountKind::Cash { subtype, .. }
            | AccountKind::Investment { subtype, .. }
            | AccountKind::Loan { subtype, .. } => subtype.clone(),
            AccountKind::CreditCard { subtype, .. } => subtype.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub institution: String,
    pub nickname: String,
    /// Last four digits of the account number, display only
    pub last_four: Option<String>,
    pub balance: f64,
    pub notes: Option<String>,
    /// Stamped by the store on add, ISO `YYYY-MM-DD`
    pub last_updated: String,
    #[serde(flatten)]
    pub kind: AccountKind,
}

impl Account {
    pub fn is_asset(&self) -> bool {
        self.kind.is_asset()
    }

    /// "Institution Nickname" as shown in pickers and tables
    pub fn display_name(&self) -> String {
        format!("{} {}", self.institution, self.nickname)
    }
}

/// Creation record: an account missing only the generated fields
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub institution: String,
    pub nickname: String,
    pub last_four: Option<String>,
    pub balance: f64,
    pub notes: Option<String>,
    pub kind: AccountKind,
}

/// Partial update for an account
///
/// Shared fields merge individually; `kind` replaces the whole variant,
/// which is also how an account changes category. `last_updated` is only
/// bumped when the patch sets it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountPatch {
    pub institution: Option<String>,
    pub nickname: Option<String>,
    pub last_four: Option<Option<String>>,
    pub balance: Option<f64>,
    pub notes: Option<Option<String>>,
    pub last_updated: Option<String>,
    pub kind: Option<AccountKind>,
}

impl AccountPatch {
    pub fn apply(self, account: &mut Account) {
        if let Some(institution) = self.institution {
            account.institution = institution;
        }
        if let Some(nickname) = self.nickname {
            account.nickname = nickname;
        }
        if let Some(last_four) = self.last_four {
            account.last_four = last_four;
        }
        if let Some(balance) = self.balance {
            account.balance = balance;
        }
        if let Some(notes) = self.notes {
            account.notes = notes;
        }
        if let Some(last_updated) = self.last_updated {
            account.last_updated = last_updated;
        }
        if let Some(kind) = self.kind {
            account.kind = kind;
        }
    }
}
