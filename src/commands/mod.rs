//! Command Implementations
//!
//! Each subcommand has a `cmd_*` entry point taking the resolved
//! [`crate::ui::UiContext`] and the open workbook. Commands build their
//! output as strings through `render_*` helpers so tests can assert on
//! them without a live terminal; prompts go through dialoguer with
//! [`crate::ui::theme::WaypointTheme`].

pub mod accounts;
pub mod expenses;
pub mod fund;
pub mod goals;
pub mod income;
pub mod institutions;
pub mod menu;
pub mod net_worth;
pub mod onboard;
pub mod reset;
pub mod sample;
pub mod schedule;
pub mod summary;

use crate::ui::theme::WaypointTheme;
use crate::ui::UiContext;

/// Loose numeric parsing for amount prompts: `$` and `,` are stripped and
/// anything unparseable is treated as zero rather than re-prompted.
pub(crate) fn parse_amount(text: &str) -> f64 {
    let cleaned = text.trim().trim_start_matches('$').trim().replace(',', "");
    cleaned.parse().unwrap_or(0.0)
}

/// Optional text prompt result: blank input becomes `None`.
pub(crate) fn optional(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub(crate) fn prompt_theme(ctx: &UiContext) -> WaypointTheme {
    WaypointTheme::new(ctx.unicode)
}
