//! Transaction entity and expense settings
//!
//! Transactions are stored newest-first; the store prepends on add. The
//! expense settings singleton defines the tracking window the averages
//! are computed over.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ExpenseCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// ISO `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    /// Paying account, dangling IDs tolerated
    pub account_id: Option<String>,
}

/// Creation record: a transaction missing only the generated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTransaction {
    pub date: String,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub account_id: Option<String>,
}

/// Partial update for a transaction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionPatch {
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub amount: Option<f64>,
    pub account_id: Option<Option<String>>,
}

impl TransactionPatch {
    pub fn apply(self, transaction: &mut Transaction) {
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(description) = self.description {
            transaction.description = description;
        }
        if let Some(category) = self.category {
            transaction.category = category;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(account_id) = self.account_id {
            transaction.account_id = account_id;
        }
    }
}

/// Expense tracking window and monthly spend goal (singleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExpenseSettings {
    /// ISO `YYYY-MM-DD`, empty until configured
    pub start_date: String,
    pub end_date: String,
    pub monthly_goal: f64,
}

/// Merge-patch for the expense settings singleton
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSettingsPatch {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub monthly_goal: Option<f64>,
}

impl ExpenseSettingsPatch {
    pub fn apply(self, settings: &mut ExpenseSettings) {
        if let Some(start_date) = self.start_date {
            settings.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            settings.end_date = end_date;
        }
        if let Some(monthly_goal) = self.monthly_goal {
            settings.monthly_goal = monthly_goal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_roundtrip() {
        let transaction = Transaction {
            id: "t1".to_string(),
            date: "2023-10-01".to_string(),
            description: "Rent".to_string(),
            category: ExpenseCategory::RentMortgage,
            amount: 1509.83,
            account_id: None,
        };
        let json = serde_json::to_string(&transaction).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transaction);
    }

    #[test]
    fn test_expense_settings_default_is_blank() {
        let settings = ExpenseSettings::default();
        assert_eq!(settings.start_date, "");
        assert_eq!(settings.end_date, "");
        assert_eq!(settings.monthly_goal, 0.0);
    }

    #[test]
    fn test_settings_patch_merges() {
        let mut settings = ExpenseSettings {
            start_date: "2023-10-01".to_string(),
            end_date: "2023-12-31".to_string(),
            monthly_goal: 3150.0,
        };
        ExpenseSettingsPatch {
            monthly_goal: Some(2800.0),
            ..Default::default()
        }
        .apply(&mut settings);

        assert_eq!(settings.monthly_goal, 2800.0);
        assert_eq!(settings.start_date, "2023-10-01");
    }
}
