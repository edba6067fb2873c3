//! Property tests for derived workbook numbers.

use proptest::prelude::*;

use waypoint::domain::entities::{
    Account, AccountKind, EmergencyFundScenario, Goal, PaycheckEntry, SmartPlan, Transaction,
};
use waypoint::domain::services::metrics;
use waypoint::domain::value_objects::ExpenseCategory;

fn arb_kind() -> impl Strategy<Value = AccountKind> {
    prop_oneof![
        Just(AccountKind::Cash {
            subtype: "Checking".to_string(),
            apy: None,
        }),
        Just(AccountKind::Investment {
            subtype: "Brokerage".to_string(),
            allocation_mix: None,
        }),
        Just(AccountKind::Loan {
            subtype: "Auto".to_string(),
            apr: 6.5,
            minimum_payment: 120.0,
            due_date: None,
        }),
    ]
}

fn arb_account() -> impl Strategy<Value = Account> {
    (arb_kind(), 0.0..50_000.0f64).prop_map(|(kind, balance)| Account {
        id: "a".to_string(),
        institution: "Bank".to_string(),
        nickname: "Account".to_string(),
        last_four: None,
        balance,
        notes: None,
        last_updated: "2024-01-01".to_string(),
        kind,
    })
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (prop::sample::select(&ExpenseCategory::ALL[..]), 0.0..2_000.0f64).prop_map(
        |(category, amount)| Transaction {
            id: "t".to_string(),
            date: "2024-01-05".to_string(),
            description: "Item".to_string(),
            category,
            amount,
            account_id: None,
        },
    )
}

#[allow(clippy::too_many_arguments)]
fn paycheck(
    gross: f64,
    federal: f64,
    fica: f64,
    medicare: f64,
    state: f64,
    retirement: f64,
    other: f64,
    received: f64,
) -> PaycheckEntry {
    PaycheckEntry {
        id: "p1".to_string(),
        stream_id: "i1".to_string(),
        period_start: "2024-01-01".to_string(),
        period_end: "2024-01-15".to_string(),
        paycheck_date: "2024-01-20".to_string(),
        gross_amount: gross,
        hours_worked: None,
        hourly_rate: None,
        federal_wh: federal,
        fica,
        medicare_ee: medicare,
        state_wh: state,
        retirement,
        other_pre_tax: other,
        received_net: received,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Net worth always equals assets minus liabilities.
    #[test]
    fn property_net_worth_is_assets_minus_liabilities(
        accounts in proptest::collection::vec(arb_account(), 0..16),
    ) {
        let net = metrics::net_worth(&accounts);
        let split = metrics::total_assets(&accounts) - metrics::total_liabilities(&accounts);
        prop_assert!((net - split).abs() < 1e-6);
    }

    /// PROPERTY: Cash is a subset of assets, so its total never exceeds them.
    #[test]
    fn property_cash_never_exceeds_assets(
        accounts in proptest::collection::vec(arb_account(), 0..16),
    ) {
        prop_assert!(metrics::total_cash(&accounts) <= metrics::total_assets(&accounts) + 1e-9);
    }

    /// PROPERTY: Per-category spend sums back to the overall total.
    #[test]
    fn property_spend_by_category_sums_to_total(
        transactions in proptest::collection::vec(arb_transaction(), 0..24),
    ) {
        let by_category = metrics::spend_by_category(&transactions);
        let sum: f64 = by_category.values().sum();
        prop_assert!((sum - metrics::total_spend(&transactions)).abs() < 1e-6);
    }

    /// PROPERTY: A zero-month window behaves like a one-month window
    /// instead of dividing by zero.
    #[test]
    fn property_avg_monthly_spend_floors_window_at_one(
        transactions in proptest::collection::vec(arb_transaction(), 0..24),
    ) {
        let zero = metrics::avg_monthly_spend(&transactions, 0);
        let one = metrics::avg_monthly_spend(&transactions, 1);
        prop_assert!(zero.is_finite());
        prop_assert!((zero - one).abs() < 1e-9);
    }

    /// PROPERTY: Expected net subtracts every withholding once, and the
    /// discrepancy is exactly received minus expected.
    #[test]
    fn property_paycheck_discrepancy_measures_received_vs_expected(
        gross in 0.0..20_000.0f64,
        federal in 0.0..2_000.0f64,
        fica in 0.0..1_000.0f64,
        medicare in 0.0..500.0f64,
        state in 0.0..1_000.0f64,
        retirement in 0.0..2_000.0f64,
        other in 0.0..500.0f64,
        received in 0.0..20_000.0f64,
    ) {
        let entry = paycheck(gross, federal, fica, medicare, state, retirement, other, received);
        let expected = gross - federal - fica - medicare - state - retirement - other;
        prop_assert!((metrics::expected_net(&entry) - expected).abs() < 1e-6);
        prop_assert!((metrics::discrepancy(&entry) - (received - expected)).abs() < 1e-6);
    }

    /// PROPERTY: The emergency fund target counts enabled scenarios only.
    #[test]
    fn property_fund_target_counts_enabled_only(
        entries in proptest::collection::vec((any::<bool>(), 0.0..30_000.0f64), 0..12),
    ) {
        let scenarios: Vec<EmergencyFundScenario> = entries
            .iter()
            .enumerate()
            .map(|(i, (enabled, amount))| EmergencyFundScenario {
                id: format!("ef{i}"),
                label: format!("Scenario {i}"),
                example_hint: String::new(),
                enabled: *enabled,
                amount: *amount,
            })
            .collect();

        let expected: f64 = entries
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, amount)| amount)
            .sum();
        prop_assert!((metrics::emergency_fund_target(&scenarios) - expected).abs() < 1e-6);
    }

    /// PROPERTY: Goal progress is clamped into [0, 1] for any pair of
    /// amounts, including zero and negative targets.
    #[test]
    fn property_goal_progress_stays_in_unit_range(
        target in -1_000.0..50_000.0f64,
        current in -1_000.0..100_000.0f64,
    ) {
        let goal = Goal {
            id: "g1".to_string(),
            timeframe: Default::default(),
            kind: Default::default(),
            title: "Goal".to_string(),
            description: String::new(),
            target_amount: target,
            current_amount: current,
            target_date: String::new(),
            linked_account_id: None,
            smart: SmartPlan::default(),
            created_at: "2024-01-01".to_string(),
            completed_at: None,
        };
        let fraction = goal.progress_fraction();
        prop_assert!((0.0..=1.0).contains(&fraction));
    }
}
