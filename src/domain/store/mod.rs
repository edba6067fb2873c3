//! Domain Store
//!
//! `Workbook` is the single source of truth: it owns the snapshot and
//! the three ports (repository, ids, clock) and exposes every mutation
//! the surfaces perform. Mutators write through to the repository; a
//! failed save keeps the in-memory state authoritative for the rest of
//! the session and records the failure for presentation to surface.
//!
//! Mutators never validate: zero amounts, empty titles and duplicate
//! names are all accepted, missing IDs are silent no-ops, and deleting
//! a referenced row never cascades.

mod sample;
mod seed;
mod snapshot;

pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

use crate::domain::entities::{
    Account, AccountPatch, CardComparison, CardComparisonPatch, EmergencyFundScenario,
    EstimatedTaxPayment, ExpenseSettings, ExpenseSettingsPatch, Goal, GoalPatch, IncomeStream,
    IncomeStreamPatch, InstitutionRow, InstitutionRowPatch, NetWorthEntry, NetWorthEntryPatch,
    NetWorthSettings, NetWorthSettingsPatch, NewAccount, NewCardComparison,
    NewEstimatedTaxPayment, NewGoal, NewIncomeStream, NewInstitutionRow, NewNetWorthEntry,
    NewPaycheckEntry, NewScheduleItem, NewSecurityReference, NewTransaction, PaycheckEntry,
    ScheduleItem, SecurityReference, SecurityReferencePatch, Transaction, TransactionPatch,
};
use crate::domain::ports::{Clock, IdProvider, SnapshotRepository};
use crate::error::WaypointResult;

pub struct Workbook {
    snapshot: Snapshot,
    repository: Box<dyn SnapshotRepository>,
    ids: Box<dyn IdProvider>,
    clock: Box<dyn Clock>,
    save_error: Option<String>,
}

impl Workbook {
    /// Load the persisted snapshot, or seed a fresh one when none
    /// exists. A corrupted snapshot is an error; it is never silently
    /// replaced.
    pub fn open(
        repository: Box<dyn SnapshotRepository>,
        ids: Box<dyn IdProvider>,
        clock: Box<dyn Clock>,
    ) -> WaypointResult<Self> {
        let snapshot = match repository.load()? {
            Some(snapshot) => snapshot,
            None => Snapshot::seeded(),
        };
        Ok(Self {
            snapshot,
            repository,
            ids,
            clock,
            save_error: None,
        })
    }

    fn persist(&mut self) {
        match self.repository.save(&self.snapshot) {
            Ok(()) => self.save_error = None,
            Err(err) => self.save_error = Some(err.to_string()),
        }
    }

    // === Accessors ===

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn onboarding_completed(&self) -> bool {
        self.snapshot.onboarding_completed
    }

    /// Message of the most recent failed save, cleared once a later
    /// save succeeds
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn today(&self) -> String {
        self.clock.today_iso()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.snapshot.goals
    }

    pub fn accounts(&self) -> &[Account] {
        &self.snapshot.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub fn expense_settings(&self) -> &ExpenseSettings {
        &self.snapshot.expense_settings
    }

    pub fn net_worth_settings(&self) -> &NetWorthSettings {
        &self.snapshot.net_worth_settings
    }

    pub fn net_worth_entries(&self) -> &[NetWorthEntry] {
        &self.snapshot.net_worth_entries
    }

    pub fn income_streams(&self) -> &[IncomeStream] {
        &self.snapshot.income_streams
    }

    pub fn paycheck_entries(&self) -> &[PaycheckEntry] {
        &self.snapshot.paycheck_entries
    }

    pub fn estimated_tax_payments(&self) -> &[EstimatedTaxPayment] {
        &self.snapshot.estimated_tax_payments
    }

    pub fn schedule_items(&self) -> &[ScheduleItem] {
        &self.snapshot.schedule_items
    }

    pub fn institutions(&self) -> &[InstitutionRow] {
        &self.snapshot.institutions
    }

    pub fn securities(&self) -> &[SecurityReference] {
        &self.snapshot.securities
    }

    pub fn card_comparisons(&self) -> &[CardComparison] {
        &self.snapshot.card_comparisons
    }

    pub fn emergency_fund_scenarios(&self) -> &[EmergencyFundScenario] {
        &self.snapshot.emergency_fund_scenarios
    }

    // === Onboarding ===

    pub fn complete_onboarding(&mut self) {
        self.snapshot.onboarding_completed = true;
        self.persist();
    }

    /// Wipe the collections onboarding re-collects and restore the
    /// scenario seed. Net worth history, paychecks, tax payments, the
    /// schedule and card comparisons survive.
    pub fn reset_for_onboarding(&mut self) {
        self.snapshot.onboarding_completed = false;
        self.snapshot.goals.clear();
        self.snapshot.accounts.clear();
        self.snapshot.transactions.clear();
        self.snapshot.expense_settings = ExpenseSettings::default();
        self.snapshot.income_streams.clear();
        self.snapshot.institutions.clear();
        self.snapshot.securities.clear();
        self.snapshot.emergency_fund_scenarios = seed::emergency_fund_scenarios();
        self.persist();
    }

    /// Replace the same collections `reset_for_onboarding` touches with
    /// the demonstration dataset and mark onboarding complete
    pub fn load_sample_data(&mut self) {
        let today = self.clock.today_iso();
        self.snapshot.onboarding_completed = true;
        self.snapshot.goals = sample::goals();
        self.snapshot.accounts = sample::accounts(&today);
        self.snapshot.transactions = sample::transactions();
        self.snapshot.expense_settings = sample::expense_settings();
        self.snapshot.income_streams = sample::income_streams();
        self.snapshot.institutions = sample::institutions();
        self.snapshot.securities = sample::securities();
        self.snapshot.emergency_fund_scenarios = seed::emergency_fund_scenarios();
        self.persist();
    }

    // === Goals ===

    pub fn add_goal(&mut self, new: NewGoal) {
        let goal = Goal {
            id: self.ids.fresh_id(),
            timeframe: new.timeframe,
            kind: new.kind,
            title: new.title,
            description: new.description,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            target_date: new.target_date,
            linked_account_id: new.linked_account_id,
            smart: new.smart,
            created_at: self.clock.today_iso(),
            completed_at: new.completed_at,
        };
        self.snapshot.goals.push(goal);
        self.persist();
    }

    pub fn update_goal(&mut self, id: &str, patch: GoalPatch) {
        if let Some(goal) = self.snapshot.goals.iter_mut().find(|g| g.id == id) {
            patch.apply(goal);
        }
        self.persist();
    }

    pub fn delete_goal(&mut self, id: &str) {
        self.snapshot.goals.retain(|g| g.id != id);
        self.persist();
    }

    // === Accounts ===

    pub fn add_account(&mut self, new: NewAccount) {
        let account = Account {
            id: self.ids.fresh_id(),
            institution: new.institution,
            nickname: new.nickname,
            last_four: new.last_four,
            balance: new.balance,
            notes: new.notes,
            last_updated: self.clock.today_iso(),
            kind: new.kind,
        };
        self.snapshot.accounts.push(account);
        self.persist();
    }

    /// `last_updated` only moves when the patch sets it
    pub fn update_account(&mut self, id: &str, patch: AccountPatch) {
        if let Some(account) = self.snapshot.accounts.iter_mut().find(|a| a.id == id) {
            patch.apply(account);
        }
        self.persist();
    }

    pub fn delete_account(&mut self, id: &str) {
        self.snapshot.accounts.retain(|a| a.id != id);
        self.persist();
    }

    // === Transactions ===

    /// Prepends so the list stays newest-first
    pub fn add_transaction(&mut self, new: NewTransaction) {
        let transaction = Transaction {
            id: self.ids.fresh_id(),
            date: new.date,
            description: new.description,
            category: new.category,
            amount: new.amount,
            account_id: new.account_id,
        };
        self.snapshot.transactions.insert(0, transaction);
        self.persist();
    }

    pub fn update_transaction(&mut self, id: &str, patch: TransactionPatch) {
        if let Some(transaction) = self.snapshot.transactions.iter_mut().find(|t| t.id == id) {
            patch.apply(transaction);
        }
        self.persist();
    }

    pub fn delete_transaction(&mut self, id: &str) {
        self.snapshot.transactions.retain(|t| t.id != id);
        self.persist();
    }

    pub fn update_expense_settings(&mut self, patch: ExpenseSettingsPatch) {
        patch.apply(&mut self.snapshot.expense_settings);
        self.persist();
    }

    // === Net worth ===

    pub fn add_net_worth_entry(&mut self, new: NewNetWorthEntry) {
        let entry = NetWorthEntry {
            id: self.ids.fresh_id(),
            date: new.date,
            values: new.values,
            note: new.note,
        };
        self.snapshot.net_worth_entries.push(entry);
        self.persist();
    }

    pub fn update_net_worth_entry(&mut self, id: &str, patch: NetWorthEntryPatch) {
        if let Some(entry) = self.snapshot.net_worth_entries.iter_mut().find(|e| e.id == id) {
            patch.apply(entry);
        }
        self.persist();
    }

    pub fn delete_net_worth_entry(&mut self, id: &str) {
        self.snapshot.net_worth_entries.retain(|e| e.id != id);
        self.persist();
    }

    pub fn update_net_worth_settings(&mut self, patch: NetWorthSettingsPatch) {
        patch.apply(&mut self.snapshot.net_worth_settings);
        self.persist();
    }

    // === Income ===

    pub fn add_income_stream(&mut self, new: NewIncomeStream) {
        let stream = IncomeStream {
            id: self.ids.fresh_id(),
            name: new.name,
            kind: new.kind,
            is_active: new.is_active,
        };
        self.snapshot.income_streams.push(stream);
        self.persist();
    }

    pub fn update_income_stream(&mut self, id: &str, patch: IncomeStreamPatch) {
        if let Some(stream) = self.snapshot.income_streams.iter_mut().find(|s| s.id == id) {
            patch.apply(stream);
        }
        self.persist();
    }

    /// Paychecks referencing the stream are left in place
    pub fn delete_income_stream(&mut self, id: &str) {
        self.snapshot.income_streams.retain(|s| s.id != id);
        self.persist();
    }

    pub fn add_paycheck_entry(&mut self, new: NewPaycheckEntry) {
        let entry = PaycheckEntry {
            id: self.ids.fresh_id(),
            stream_id: new.stream_id,
            period_start: new.period_start,
            period_end: new.period_end,
            paycheck_date: new.paycheck_date,
            gross_amount: new.gross_amount,
            hours_worked: new.hours_worked,
            hourly_rate: new.hourly_rate,
            federal_wh: new.federal_wh,
            fica: new.fica,
            medicare_ee: new.medicare_ee,
            state_wh: new.state_wh,
            retirement: new.retirement,
            other_pre_tax: new.other_pre_tax,
            received_net: new.received_net,
        };
        self.snapshot.paycheck_entries.push(entry);
        self.persist();
    }

    pub fn delete_paycheck_entry(&mut self, id: &str) {
        self.snapshot.paycheck_entries.retain(|e| e.id != id);
        self.persist();
    }

    pub fn add_estimated_tax_payment(&mut self, new: NewEstimatedTaxPayment) {
        let payment = EstimatedTaxPayment {
            id: self.ids.fresh_id(),
            jurisdiction: new.jurisdiction,
            date: new.date,
            amount: new.amount,
            confirmation_number: new.confirmation_number,
            quarter: new.quarter,
        };
        self.snapshot.estimated_tax_payments.push(payment);
        self.persist();
    }

    pub fn delete_estimated_tax_payment(&mut self, id: &str) {
        self.snapshot.estimated_tax_payments.retain(|p| p.id != id);
        self.persist();
    }

    // === Schedule ===

    /// Flip membership of today's date in the item's completion set.
    /// One canonical today string per call, so a toggle at 23:59:59
    /// cannot insert one date and check another.
    pub fn toggle_schedule_complete(&mut self, id: &str) {
        let today = self.clock.today_iso();
        if let Some(item) = self.snapshot.schedule_items.iter_mut().find(|i| i.id == id) {
            if !item.completed_dates.remove(&today) {
                item.completed_dates.insert(today);
            }
        }
        self.persist();
    }

    pub fn update_schedule_dates(&mut self, id: &str, my_dates: impl Into<String>) {
        if let Some(item) = self.snapshot.schedule_items.iter_mut().find(|i| i.id == id) {
            item.my_dates = my_dates.into();
        }
        self.persist();
    }

    pub fn add_schedule_item(&mut self, new: NewScheduleItem) {
        let item = ScheduleItem {
            id: self.ids.fresh_id(),
            frequency: new.frequency,
            task: new.task,
            my_dates: new.my_dates,
            is_custom: new.is_custom,
            completed_dates: new.completed_dates,
            helper_text: new.helper_text,
        };
        self.snapshot.schedule_items.push(item);
        self.persist();
    }

    pub fn delete_schedule_item(&mut self, id: &str) {
        self.snapshot.schedule_items.retain(|i| i.id != id);
        self.persist();
    }

    // === Institutions / securities / cards ===

    pub fn add_institution(&mut self, new: NewInstitutionRow) {
        let row = InstitutionRow {
            id: self.ids.fresh_id(),
            name: new.name,
            kind: new.kind,
            fees_minimums: new.fees_minimums,
            checking_apy: new.checking_apy,
            savings_apy: new.savings_apy,
            cd_6mo: new.cd_6mo,
            cd_12mo: new.cd_12mo,
            cd_24mo: new.cd_24mo,
            pros: new.pros,
            cons: new.cons,
            is_currently_used: new.is_currently_used,
        };
        self.snapshot.institutions.push(row);
        self.persist();
    }

    pub fn update_institution(&mut self, id: &str, patch: InstitutionRowPatch) {
        if let Some(row) = self.snapshot.institutions.iter_mut().find(|i| i.id == id) {
            patch.apply(row);
        }
        self.persist();
    }

    pub fn delete_institution(&mut self, id: &str) {
        self.snapshot.institutions.retain(|i| i.id != id);
        self.persist();
    }

    pub fn add_security(&mut self, new: NewSecurityReference) {
        let security = SecurityReference {
            id: self.ids.fresh_id(),
            ticker: new.ticker,
            name: new.name,
            expense_ratio: new.expense_ratio,
            notes: new.notes,
        };
        self.snapshot.securities.push(security);
        self.persist();
    }

    pub fn update_security(&mut self, id: &str, patch: SecurityReferencePatch) {
        if let Some(security) = self.snapshot.securities.iter_mut().find(|s| s.id == id) {
            patch.apply(security);
        }
        self.persist();
    }

    pub fn delete_security(&mut self, id: &str) {
        self.snapshot.securities.retain(|s| s.id != id);
        self.persist();
    }

    pub fn add_card_comparison(&mut self, new: NewCardComparison) {
        let comparison = CardComparison {
            id: self.ids.fresh_id(),
            card: new.card,
            likelihood: new.likelihood,
            annual_fee: new.annual_fee,
            reward_type: new.reward_type,
            apr: new.apr,
            promo_details: new.promo_details,
        };
        self.snapshot.card_comparisons.push(comparison);
        self.persist();
    }

    pub fn update_card_comparison(&mut self, id: &str, patch: CardComparisonPatch) {
        if let Some(comparison) = self.snapshot.card_comparisons.iter_mut().find(|c| c.id == id) {
            patch.apply(comparison);
        }
        self.persist();
    }

    pub fn delete_card_comparison(&mut self, id: &str) {
        self.snapshot.card_comparisons.retain(|c| c.id != id);
        self.persist();
    }

    // === Emergency fund ===

    /// Flips enabled; the amount stays so re-enabling restores it
    pub fn toggle_scenario(&mut self, id: &str) {
        if let Some(scenario) = self
            .snapshot
            .emergency_fund_scenarios
            .iter_mut()
            .find(|s| s.id == id)
        {
            scenario.enabled = !scenario.enabled;
        }
        self.persist();
    }

    pub fn update_scenario_amount(&mut self, id: &str, amount: f64) {
        if let Some(scenario) = self
            .snapshot
            .emergency_fund_scenarios
            .iter_mut()
            .find(|s| s.id == id)
        {
            scenario.amount = amount;
        }
        self.persist();
    }

    pub fn reset_emergency_fund_scenarios(&mut self) {
        self.snapshot.emergency_fund_scenarios = seed::emergency_fund_scenarios();
        self.persist();
    }
}
