//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.
//! All of them serialize to the snapshot wire names used on disk.

mod card_kind;
mod expense_category;
mod frequency;
mod goal_kind;
mod income_kind;
mod institution_kind;
mod jurisdiction;
mod timeframe;

pub use card_kind::CardKind;
pub use expense_category::ExpenseCategory;
pub use frequency::Frequency;
pub use goal_kind::GoalKind;
pub use income_kind::IncomeKind;
pub use institution_kind::InstitutionKind;
pub use jurisdiction::Jurisdiction;
pub use timeframe::Timeframe;
