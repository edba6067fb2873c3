//! The wizard state machine
//!
//! A strictly linear walk through 14 states (0 to 13). Continue and
//! Skip move forward, Back moves to the previous step from step 2 on,
//! and the Done step exits through Finish or Reset only.
//!
//! Commit boundary: the Expenses and Income steps write through on
//! Continue; goals, the four account lists and the scenario diffs wait
//! for Finish. Abandoning after the Expenses step therefore leaves
//! expense data committed and everything else uncommitted, which is the
//! behavior the app has always had.

use crate::domain::entities::{ExpenseSettingsPatch, NewGoal, SmartPlan};
use crate::domain::store::Workbook;

use super::draft::{Draft, DraftGoal};

/// Step 13 is the Done screen; step 0, the welcome screen, is not
/// counted in the progress header
pub const TOTAL_STEPS: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Understand,
    Create,
    Compare,
}

impl Phase {
    /// Header label, e.g. "01 / Understand"
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Understand => "01 / Understand",
            Phase::Create => "02 / Create",
            Phase::Compare => "03 / Compare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMeta {
    pub name: &'static str,
    pub phase: Phase,
}

/// Name and phase shown in the wizard header. The welcome step has no
/// header, so 0 (and anything out of range) yields `None`.
pub fn step_meta(step: usize) -> Option<StepMeta> {
    use Phase::{Compare, Create, Understand};

    let meta = |name, phase| Some(StepMeta { name, phase });
    match step {
        1 => meta("Overview", Understand),
        2 => meta("Goals", Understand),
        3 => meta("Cash Accounts", Understand),
        4 => meta("Investments", Understand),
        5 => meta("Loans", Understand),
        6 => meta("Credit Cards", Understand),
        7 => meta("Expenses", Understand),
        8 => meta("Overview", Create),
        9 => meta("Income", Create),
        10 => meta("Schedule", Create),
        11 => meta("Overview", Compare),
        12 => meta("Emergency Fund", Compare),
        13 => meta("Done", Compare),
        _ => None,
    }
}

/// The onboarding flow: a step index plus the accumulated draft.
/// Mutations that touch the store take the workbook explicitly, so the
/// commit points are visible at the call site.
#[derive(Debug, Default)]
pub struct OnboardingFlow {
    step: usize,
    pub draft: Draft,
}

impl OnboardingFlow {
    /// Starts on the welcome screen with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn at_welcome(&self) -> bool {
        self.step == 0
    }

    pub fn at_done(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    /// Step 1 has no Back
    pub fn can_go_back(&self) -> bool {
        self.step >= 2
    }

    /// Welcome "Get Started": wipe the committed collections, seed the
    /// scenario draft from the freshly reset store, enter the wizard
    pub fn start(&mut self, workbook: &mut Workbook) {
        workbook.reset_for_onboarding();
        self.draft = Draft {
            scenarios: workbook.emergency_fund_scenarios().to_vec(),
            ..Draft::default()
        };
        self.step = 1;
    }

    /// Welcome "Load sample data": marks onboarding complete on its
    /// own; the machine stays on the welcome step
    pub fn load_sample(&self, workbook: &mut Workbook) {
        workbook.load_sample_data();
    }

    /// Continue: commit-on-continue steps write through first, then the
    /// step advances (clamped at Done)
    pub fn advance(&mut self, workbook: &mut Workbook) {
        match self.step {
            7 => self.commit_expenses(workbook),
            9 => self.commit_income(workbook),
            _ => {}
        }
        self.step = (self.step + 1).min(TOTAL_STEPS);
    }

    /// Skip: advance without committing. Batch-committed drafts stay in
    /// the machine and still commit at Finish.
    pub fn skip(&mut self) {
        self.step = (self.step + 1).min(TOTAL_STEPS);
    }

    pub fn back(&mut self) {
        if self.can_go_back() {
            self.step -= 1;
        }
    }

    /// Done "Finish": one batch commit of everything still in the
    /// draft, then the completion flag
    pub fn finish(&mut self, workbook: &mut Workbook) {
        for goal in self.draft.goals.drain(..) {
            workbook.add_goal(NewGoal {
                timeframe: goal.timeframe,
                kind: goal.kind,
                title: goal.title,
                description: String::new(),
                target_amount: goal.target_amount,
                current_amount: 0.0,
                target_date: goal.target_date,
                linked_account_id: None,
                smart: SmartPlan::default(),
                completed_at: None,
            });
        }
        let accounts: Vec<_> = self.draft.all_accounts().cloned().collect();
        for account in accounts {
            workbook.add_account(account);
        }
        for draft in std::mem::take(&mut self.draft.scenarios) {
            let stored = workbook
                .emergency_fund_scenarios()
                .iter()
                .find(|s| s.id == draft.id)
                .map(|s| (s.enabled, s.amount));
            if let Some((enabled, amount)) = stored {
                if draft.enabled != enabled {
                    workbook.toggle_scenario(&draft.id);
                }
                if draft.amount != amount {
                    workbook.update_scenario_amount(&draft.id, draft.amount);
                }
            }
        }
        workbook.complete_onboarding();
    }

    /// Done "Reset onboarding": wipe again and return to the welcome
    /// screen
    pub fn reset(&mut self, workbook: &mut Workbook) {
        workbook.reset_for_onboarding();
        self.draft = Draft {
            scenarios: workbook.emergency_fund_scenarios().to_vec(),
            ..Draft::default()
        };
        self.step = 0;
    }

    fn commit_expenses(&mut self, workbook: &mut Workbook) {
        workbook.update_expense_settings(ExpenseSettingsPatch {
            start_date: Some(self.draft.expense_start.clone()),
            end_date: Some(self.draft.expense_end.clone()),
            monthly_goal: Some(self.draft.monthly_goal),
        });
        for transaction in self.draft.transactions.drain(..) {
            workbook.add_transaction(transaction);
        }
    }

    fn commit_income(&mut self, workbook: &mut Workbook) {
        for stream in self.draft.streams.drain(..) {
            workbook.add_income_stream(stream);
        }
    }
}
