//! Money metrics
//!
//! Pure aggregation over entity collections. Every function tolerates
//! empty input and returns 0 for it; nothing here fails or panics.
//! Callers pass raw store slices; no function reaches back into state.

use std::collections::BTreeMap;

use crate::domain::entities::{Account, EmergencyFundScenario, PaycheckEntry, Transaction};
use crate::domain::value_objects::ExpenseCategory;

/// Cash plus investment balances
pub fn total_assets(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .filter(|a| a.is_asset())
        .map(|a| a.balance)
        .sum()
}

/// Loan plus credit card balances
pub fn total_liabilities(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .filter(|a| !a.is_asset())
        .map(|a| a.balance)
        .sum()
}

pub fn net_worth(accounts: &[Account]) -> f64 {
    total_assets(accounts) - total_liabilities(accounts)
}

/// Cash category only, the liquid side of the emergency fund comparison
pub fn total_cash(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .filter(|a| matches!(a.kind, crate::domain::entities::AccountKind::Cash { .. }))
        .map(|a| a.balance)
        .sum()
}

pub fn total_spend(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// Group-sum by category; categories with no transactions never appear
pub fn spend_by_category(transactions: &[Transaction]) -> BTreeMap<ExpenseCategory, f64> {
    let mut by_category = BTreeMap::new();
    for transaction in transactions {
        *by_category.entry(transaction.category).or_insert(0.0) += transaction.amount;
    }
    by_category
}

/// Total spend divided by the month count, floored at one month
pub fn avg_monthly_spend(transactions: &[Transaction], months: u32) -> f64 {
    total_spend(transactions) / months.max(1) as f64
}

/// Gross minus every withholding line; negative when deductions exceed
/// gross (as-entered data, not validated)
pub fn expected_net(entry: &PaycheckEntry) -> f64 {
    entry.gross_amount
        - entry.federal_wh
        - entry.fica
        - entry.medicare_ee
        - entry.state_wh
        - entry.retirement
        - entry.other_pre_tax
}

/// What arrived minus what should have arrived
pub fn discrepancy(entry: &PaycheckEntry) -> f64 {
    entry.received_net - expected_net(entry)
}

/// Sum of amounts over enabled scenarios only
pub fn emergency_fund_target(scenarios: &[EmergencyFundScenario]) -> f64 {
    scenarios
        .iter()
        .filter(|s| s.enabled)
        .map(|s| s.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AccountKind;

    fn account(id: &str, balance: f64, kind: AccountKind) -> Account {
        Account {
            id: id.to_string(),
            institution: "Test".to_string(),
            nickname: id.to_string(),
            last_four: None,
            balance,
            notes: None,
            last_updated: "2024-01-15".to_string(),
            kind,
        }
    }

    fn cash(id: &str, balance: f64) -> Account {
        account(
            id,
            balance,
            AccountKind::Cash {
                subtype: "Checking".to_string(),
                apy: None,
            },
        )
    }

    fn investment(id: &str, balance: f64) -> Account {
        account(
            id,
            balance,
            AccountKind::Investment {
                subtype: "Brokerage".to_string(),
                allocation_mix: None,
            },
        )
    }

    fn loan(id: &str, balance: f64) -> Account {
        account(
            id,
            balance,
            AccountKind::Loan {
                subtype: "Auto".to_string(),
                apr: 11.35,
                minimum_payment: 489.0,
                due_date: None,
            },
        )
    }

    fn credit_card(id: &str, balance: f64) -> Account {
        account(
            id,
            balance,
            AccountKind::CreditCard {
                subtype: crate::domain::value_objects::CardKind::Standard,
                apr: 25.24,
                credit_limit: 5000.0,
                minimum_payment: 35.0,
                payment_due_date: None,
                closing_date: None,
                annual_fee: None,
                foreign_transaction_fee: None,
                rewards: None,
            },
        )
    }

    fn transaction(id: &str, category: ExpenseCategory, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2023-10-01".to_string(),
            description: id.to_string(),
            category,
            amount,
            account_id: None,
        }
    }

    #[test]
    fn test_empty_accounts_all_zero() {
        assert_eq!(total_assets(&[]), 0.0);
        assert_eq!(total_liabilities(&[]), 0.0);
        assert_eq!(net_worth(&[]), 0.0);
        assert_eq!(total_cash(&[]), 0.0);
    }

    #[test]
    fn test_net_worth_identity() {
        let accounts = vec![
            cash("a1", 400.0),
            investment("a2", 2000.0),
            loan("a3", 6870.0),
            credit_card("a4", 5000.0),
        ];
        assert_eq!(total_assets(&accounts), 2400.0);
        assert_eq!(total_liabilities(&accounts), 11870.0);
        assert_eq!(net_worth(&accounts), -9470.0);
        assert_eq!(
            net_worth(&accounts),
            total_assets(&accounts) - total_liabilities(&accounts)
        );
    }

    #[test]
    fn test_cash_counts_as_asset_never_liability() {
        let accounts = vec![cash("a1", 123.45)];
        assert_eq!(total_assets(&accounts), 123.45);
        assert_eq!(total_cash(&accounts), 123.45);
        assert_eq!(total_liabilities(&accounts), 0.0);
    }

    #[test]
    fn test_total_cash_excludes_investments() {
        let accounts = vec![cash("a1", 100.0), investment("a2", 900.0)];
        assert_eq!(total_cash(&accounts), 100.0);
        assert_eq!(total_assets(&accounts), 1000.0);
    }

    #[test]
    fn test_total_spend_empty() {
        assert_eq!(total_spend(&[]), 0.0);
        assert!(spend_by_category(&[]).is_empty());
    }

    #[test]
    fn test_spend_by_category_groups_and_partitions() {
        let transactions = vec![
            transaction("t1", ExpenseCategory::RentMortgage, 1509.83),
            transaction("t2", ExpenseCategory::Groceries, 63.13),
            transaction("t3", ExpenseCategory::Groceries, 108.49),
        ];
        let by_category = spend_by_category(&transactions);

        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category[&ExpenseCategory::RentMortgage], 1509.83);
        assert!((by_category[&ExpenseCategory::Groceries] - 171.62).abs() < 1e-9);
        assert!(!by_category.contains_key(&ExpenseCategory::Gas));

        let grouped_total: f64 = by_category.values().sum();
        assert!((grouped_total - total_spend(&transactions)).abs() < 1e-9);
    }

    #[test]
    fn test_avg_monthly_spend_floors_months_at_one() {
        let transactions = vec![transaction("t1", ExpenseCategory::Groceries, 300.0)];
        assert_eq!(avg_monthly_spend(&transactions, 3), 100.0);
        assert_eq!(avg_monthly_spend(&transactions, 0), 300.0);
        assert_eq!(avg_monthly_spend(&[], 5), 0.0);
    }

    fn paycheck(received_net: f64) -> PaycheckEntry {
        PaycheckEntry {
            id: "p1".to_string(),
            stream_id: "is1".to_string(),
            period_start: "2024-01-01".to_string(),
            period_end: "2024-01-15".to_string(),
            paycheck_date: "2024-01-20".to_string(),
            gross_amount: 1000.0,
            hours_worked: None,
            hourly_rate: None,
            federal_wh: 100.0,
            fica: 62.0,
            medicare_ee: 14.5,
            state_wh: 30.0,
            retirement: 50.0,
            other_pre_tax: 0.0,
            received_net,
        }
    }

    #[test]
    fn test_expected_net_subtracts_every_line() {
        assert_eq!(expected_net(&paycheck(743.5)), 743.5);
    }

    #[test]
    fn test_discrepancy_zero_when_net_matches() {
        assert_eq!(discrepancy(&paycheck(743.5)), 0.0);
    }

    #[test]
    fn test_discrepancy_negative_when_short() {
        assert_eq!(discrepancy(&paycheck(700.0)), -43.5);
    }

    #[test]
    fn test_expected_net_can_go_negative() {
        let mut entry = paycheck(0.0);
        entry.gross_amount = 100.0;
        assert_eq!(expected_net(&entry), -156.5);
    }

    fn scenario(id: &str, enabled: bool, amount: f64) -> EmergencyFundScenario {
        EmergencyFundScenario {
            id: id.to_string(),
            label: id.to_string(),
            example_hint: String::new(),
            enabled,
            amount,
        }
    }

    #[test]
    fn test_emergency_fund_target_sums_enabled_only() {
        let scenarios = vec![
            scenario("ef1", true, 500.0),
            scenario("ef2", false, 9999.0),
            scenario("ef3", true, 200.0),
        ];
        assert_eq!(emergency_fund_target(&scenarios), 700.0);
        assert_eq!(emergency_fund_target(&[]), 0.0);
    }
}
