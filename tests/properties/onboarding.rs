//! Property tests for the onboarding commit boundary.

use chrono::NaiveDate;
use proptest::prelude::*;

use waypoint::application::onboarding::{DraftGoal, OnboardingFlow, TOTAL_STEPS};
use waypoint::domain::entities::{AccountKind, NewAccount, NewIncomeStream, NewTransaction};
use waypoint::domain::value_objects::{ExpenseCategory, IncomeKind};
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

fn draft_transaction(i: usize) -> NewTransaction {
    NewTransaction {
        date: "2024-01-05".to_string(),
        description: format!("draft {i}"),
        category: ExpenseCategory::Groceries,
        amount: 10.0,
        account_id: None,
    }
}

fn draft_account(institution: &str, kind: AccountKind) -> NewAccount {
    NewAccount {
        institution: institution.to_string(),
        nickname: "Main".to_string(),
        last_four: None,
        balance: 250.0,
        notes: None,
        kind,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Once started, the step index stays inside 1..=13 for
    /// any sequence of Continue, Skip, and Back.
    #[test]
    fn property_step_stays_in_bounds(moves in proptest::collection::vec(0u8..3, 0..40)) {
        let mut wb = workbook();
        let mut flow = OnboardingFlow::new();
        flow.start(&mut wb);

        for m in moves {
            match m {
                0 => flow.advance(&mut wb),
                1 => flow.skip(),
                _ => flow.back(),
            }
            prop_assert!(flow.step() >= 1);
            prop_assert!(flow.step() <= TOTAL_STEPS);
        }
    }

    /// PROPERTY: Skipping every step commits nothing, regardless of what
    /// the draft holds.
    #[test]
    fn property_skip_commits_nothing(
        transaction_count in 0usize..6,
        stream_count in 0usize..4,
    ) {
        let mut wb = workbook();
        let mut flow = OnboardingFlow::new();
        flow.start(&mut wb);
        for i in 0..transaction_count {
            flow.draft.transactions.push(draft_transaction(i));
        }
        for i in 0..stream_count {
            flow.draft.streams.push(NewIncomeStream {
                name: format!("stream {i}"),
                kind: IncomeKind::W2,
                is_active: true,
            });
        }

        for _ in 0..TOTAL_STEPS {
            flow.skip();
        }

        prop_assert!(flow.at_done());
        prop_assert!(wb.transactions().is_empty());
        prop_assert!(wb.income_streams().is_empty());
        prop_assert!(!wb.onboarding_completed());
    }

    /// PROPERTY: Expenses commit when Continue leaves the expenses step,
    /// and never commit twice, even after going Back over the step.
    #[test]
    fn property_expenses_commit_on_continue_exactly_once(
        count in 0usize..6,
        extra_advances in 0usize..10,
    ) {
        let mut wb = workbook();
        let mut flow = OnboardingFlow::new();
        flow.start(&mut wb);
        for i in 0..count {
            flow.draft.transactions.push(draft_transaction(i));
        }

        // seven Continues walk 1 through 7; the last one commits
        for _ in 0..7 {
            flow.advance(&mut wb);
        }
        prop_assert_eq!(wb.transactions().len(), count);

        flow.back();
        flow.advance(&mut wb);
        prop_assert_eq!(wb.transactions().len(), count);

        for _ in 0..extra_advances {
            flow.advance(&mut wb);
        }
        prop_assert_eq!(wb.transactions().len(), count);
    }

    /// PROPERTY: Finish commits exactly the drafted goals and accounts,
    /// with assets ahead of liabilities in the account list.
    #[test]
    fn property_finish_commits_draft_counts(
        goal_count in 0usize..5,
        cash_count in 0usize..4,
        loan_count in 0usize..4,
    ) {
        let mut wb = workbook();
        let mut flow = OnboardingFlow::new();
        flow.start(&mut wb);
        for i in 0..goal_count {
            flow.draft.goals.push(DraftGoal {
                title: format!("Goal {i}"),
                target_amount: 100.0,
                ..Default::default()
            });
        }
        for _ in 0..cash_count {
            flow.draft.cash_accounts.push(draft_account(
                "Ally",
                AccountKind::Cash {
                    subtype: "Checking".to_string(),
                    apy: None,
                },
            ));
        }
        for _ in 0..loan_count {
            flow.draft.loan_accounts.push(draft_account(
                "Nelnet",
                AccountKind::Loan {
                    subtype: "Federal Subsidized".to_string(),
                    apr: 4.5,
                    minimum_payment: 50.0,
                    due_date: None,
                },
            ));
        }

        while !flow.at_done() {
            flow.skip();
        }
        flow.finish(&mut wb);

        prop_assert_eq!(wb.goals().len(), goal_count);
        prop_assert_eq!(wb.accounts().len(), cash_count + loan_count);
        prop_assert!(wb.onboarding_completed());
        for (i, account) in wb.accounts().iter().enumerate() {
            prop_assert_eq!(account.is_asset(), i < cash_count);
        }
    }

    /// PROPERTY: Scenario drafts apply to the store on Finish: enabled
    /// flags and amounts both land.
    #[test]
    fn property_scenario_drafts_apply_on_finish(
        enable_all in any::<bool>(),
        amount in 0.0..50_000.0f64,
    ) {
        let mut wb = workbook();
        let mut flow = OnboardingFlow::new();
        flow.start(&mut wb);

        let ids: Vec<String> = flow.draft.scenarios.iter().map(|s| s.id.clone()).collect();
        for (i, id) in ids.iter().enumerate() {
            if flow.draft.scenarios[i].enabled != enable_all {
                flow.draft.toggle_scenario(id);
            }
            flow.draft.set_scenario_amount(id, amount);
        }

        while !flow.at_done() {
            flow.skip();
        }
        flow.finish(&mut wb);

        for scenario in wb.emergency_fund_scenarios() {
            prop_assert_eq!(scenario.enabled, enable_all);
            prop_assert!((scenario.amount - amount).abs() < 1e-9);
        }
    }
}
