//! Domain Entities
//!
//! Serde-backed records that make up the persisted snapshot, plus the
//! creation (`New*`) and partial-update (`*Patch`) shapes the store's
//! mutators accept.

mod account;
mod emergency_fund;
mod goal;
mod income;
mod net_worth;
mod reference;
mod schedule;
mod tax;
mod transaction;

pub use account::{Account, AccountKind, AccountPatch, NewAccount};
pub use emergency_fund::EmergencyFundScenario;
pub use goal::{Goal, GoalPatch, NewGoal, SmartPlan};
pub use income::{
    IncomeStream, IncomeStreamPatch, NewIncomeStream, NewPaycheckEntry, PaycheckEntry,
};
pub use net_worth::{
    NetWorthEntry, NetWorthEntryPatch, NetWorthSettings, NetWorthSettingsPatch, NewNetWorthEntry,
};
pub use reference::{
    CardComparison, CardComparisonPatch, InstitutionRow, InstitutionRowPatch, NewCardComparison,
    NewInstitutionRow, NewSecurityReference, SecurityReference, SecurityReferencePatch,
};
pub use schedule::{NewScheduleItem, ScheduleItem};
pub use tax::{EstimatedTaxPayment, NewEstimatedTaxPayment};
pub use transaction::{
    ExpenseSettings, ExpenseSettingsPatch, NewTransaction, Transaction, TransactionPatch,
};
