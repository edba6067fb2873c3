//! Property tests for workbook store invariants.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use proptest::prelude::*;

use waypoint::domain::entities::{
    AccountKind, NewAccount, NewNetWorthEntry, NewPaycheckEntry, NewTransaction,
};
use waypoint::domain::value_objects::ExpenseCategory;
use waypoint::infrastructure::{FixedClock, MemorySnapshotRepository, SequentialIds};
use waypoint::Workbook;

fn workbook() -> Workbook {
    Workbook::open(
        Box::new(MemorySnapshotRepository::empty()),
        Box::new(SequentialIds::new()),
        Box::new(FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )),
    )
    .unwrap()
}

fn transaction(description: String, account_id: Option<String>) -> NewTransaction {
    NewTransaction {
        date: "2024-01-05".to_string(),
        description,
        category: ExpenseCategory::Groceries,
        amount: 5.0,
        account_id,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The transaction list is newest-first for any number of
    /// adds.
    #[test]
    fn property_transactions_prepend_newest_first(count in 1usize..12) {
        let mut wb = workbook();
        for i in 0..count {
            wb.add_transaction(transaction(format!("txn {i}"), None));
        }

        prop_assert_eq!(wb.transactions().len(), count);
        prop_assert_eq!(&wb.transactions()[0].description, &format!("txn {}", count - 1));
        prop_assert_eq!(&wb.transactions()[count - 1].description, "txn 0");
    }

    /// PROPERTY: Paychecks keep insertion order (oldest first).
    #[test]
    fn property_paychecks_append_in_order(count in 1usize..10) {
        let mut wb = workbook();
        for i in 0..count {
            wb.add_paycheck_entry(NewPaycheckEntry {
                gross_amount: i as f64,
                ..Default::default()
            });
        }

        for i in 0..count {
            prop_assert!((wb.paycheck_entries()[i].gross_amount - i as f64).abs() < f64::EPSILON);
        }
    }

    /// PROPERTY: Toggling a schedule check-off twice restores the
    /// original set of completed dates.
    #[test]
    fn property_toggle_schedule_twice_is_identity(seed in 0usize..64) {
        let mut wb = workbook();
        let index = seed % wb.schedule_items().len();
        let id = wb.schedule_items()[index].id.clone();
        let before = wb.schedule_items()[index].completed_dates.clone();

        wb.toggle_schedule_complete(&id);
        wb.toggle_schedule_complete(&id);

        prop_assert_eq!(&wb.schedule_items()[index].completed_dates, &before);
    }

    /// PROPERTY: Deleting an account never deletes the transactions that
    /// reference it.
    #[test]
    fn property_deleting_account_keeps_transactions(count in 1usize..8) {
        let mut wb = workbook();
        wb.add_account(NewAccount {
            institution: "Ally".to_string(),
            nickname: "Checking".to_string(),
            last_four: None,
            balance: 100.0,
            notes: None,
            kind: AccountKind::Cash {
                subtype: "Checking".to_string(),
                apy: None,
            },
        });
        let account_id = wb.accounts()[0].id.clone();
        for i in 0..count {
            wb.add_transaction(transaction(format!("txn {i}"), Some(account_id.clone())));
        }

        wb.delete_account(&account_id);

        prop_assert!(wb.accounts().is_empty());
        prop_assert_eq!(wb.transactions().len(), count);
    }

    /// PROPERTY: Resetting for onboarding clears planning data but keeps
    /// the historical collections.
    #[test]
    fn property_reset_keeps_history_collections(entries in 1usize..5) {
        let mut wb = workbook();
        wb.load_sample_data();
        for i in 0..entries {
            wb.add_net_worth_entry(NewNetWorthEntry {
                date: format!("2024-{:02}", i + 1),
                values: BTreeMap::from([("Checking".to_string(), 100.0 * i as f64)]),
                note: None,
            });
        }
        wb.add_paycheck_entry(NewPaycheckEntry::default());

        wb.reset_for_onboarding();

        prop_assert!(wb.goals().is_empty());
        prop_assert!(wb.accounts().is_empty());
        prop_assert!(wb.transactions().is_empty());
        prop_assert!(wb.income_streams().is_empty());
        prop_assert!(!wb.onboarding_completed());

        prop_assert_eq!(wb.net_worth_entries().len(), entries);
        prop_assert_eq!(wb.paycheck_entries().len(), 1);
        prop_assert!(!wb.schedule_items().is_empty());
    }

    /// PROPERTY: Reset restores the built-in scenario list no matter how
    /// the scenarios were toggled beforehand.
    #[test]
    fn property_reset_restores_seeded_scenarios(
        toggles in proptest::collection::vec(0usize..32, 0..8),
    ) {
        let mut wb = workbook();
        let ids: Vec<String> = wb
            .emergency_fund_scenarios()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        for toggle in toggles {
            wb.toggle_scenario(&ids[toggle % ids.len()]);
        }

        wb.reset_for_onboarding();

        let enabled: Vec<_> = wb
            .emergency_fund_scenarios()
            .iter()
            .filter(|s| s.enabled)
            .collect();
        prop_assert_eq!(enabled.len(), 1);
        prop_assert!((enabled[0].amount - 12_000.0).abs() < f64::EPSILON);
    }
}
