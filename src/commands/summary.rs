//! `waypoint summary` - net worth, spending, and emergency fund at a glance.

use anyhow::Result;

use waypoint::domain::entities::{ExpenseSettings, Transaction};
use waypoint::domain::services::{dates, metrics};
use waypoint::presentation::format::format_currency;
use waypoint::Workbook;

use crate::ui::theme::Icon;
use crate::ui::{Panel, UiContext};

pub fn cmd_summary(ctx: &UiContext, workbook: &Workbook) -> Result<()> {
    print!("{}", render_summary(ctx, workbook));
    Ok(())
}

pub(crate) fn render_summary(ctx: &UiContext, workbook: &Workbook) -> String {
    let accounts = workbook.accounts();
    let mut out = String::new();

    let mut panel = Panel::with_title(ctx.bold("Where you stand"));
    panel.add_empty();
    panel.add_line(stat_line(
        ctx,
        "Net worth",
        &format_currency(metrics::net_worth(accounts)),
    ));
    panel.add_line(stat_line(
        ctx,
        "Assets",
        &format_currency(metrics::total_assets(accounts)),
    ));
    panel.add_line(stat_line(
        ctx,
        "Liabilities",
        &format_currency(metrics::total_liabilities(accounts)),
    ));
    panel.add_line(stat_line(
        ctx,
        "Cash on hand",
        &format_currency(metrics::total_cash(accounts)),
    ));
    out.push_str(&panel.render(ctx.color, ctx.unicode));
    out.push('\n');

    out.push_str(&render_spending_line(ctx, workbook));
    out.push_str(&render_fund_line(ctx, workbook));
    out.push_str(&render_goals_line(ctx, workbook));

    if !workbook.onboarding_completed() {
        out.push('\n');
        out.push_str(&ctx.dim(
            "Run `waypoint onboard` for a guided setup, or `waypoint sample` to explore demo data.",
        ));
        out.push('\n');
    }

    out
}

fn stat_line(ctx: &UiContext, label: &str, value: &str) -> String {
    format!("{} {:>14}", ctx.dim(&format!("{label:<14}")), value)
}

fn render_spending_line(ctx: &UiContext, workbook: &Workbook) -> String {
    let settings = workbook.expense_settings();
    let window = tracked_window(workbook.transactions(), settings);
    let months = tracked_months(settings);
    let monthly = metrics::avg_monthly_spend(&window, months);
    let goal = settings.monthly_goal;

    let icon = if goal > 0.0 && monthly > goal {
        Icon::Warning
    } else {
        Icon::Success
    };
    format!(
        "{} Spending        {}/mo against a {} goal\n",
        ctx.icon(icon),
        format_currency(monthly),
        format_currency(goal),
    )
}

fn render_fund_line(ctx: &UiContext, workbook: &Workbook) -> String {
    let target = metrics::emergency_fund_target(workbook.emergency_fund_scenarios());
    if target <= 0.0 {
        return String::new();
    }
    let cash = metrics::total_cash(workbook.accounts());

    if cash >= target {
        format!(
            "{} Emergency fund  {} target covered by cash on hand\n",
            ctx.icon(Icon::Success),
            format_currency(target),
        )
    } else {
        format!(
            "{} Emergency fund  {} short of the {} target\n",
            ctx.icon(Icon::Warning),
            format_currency(target - cash),
            format_currency(target),
        )
    }
}

fn render_goals_line(ctx: &UiContext, workbook: &Workbook) -> String {
    let active = workbook
        .goals()
        .iter()
        .filter(|g| g.completed_at.is_none())
        .count();
    if active == 0 {
        return String::new();
    }
    format!(
        "{} {}\n",
        ctx.icon(Icon::Arrow),
        ctx.dim(&format!(
            "{} active goal{} (see `waypoint goals`)",
            active,
            if active == 1 { "" } else { "s" }
        )),
    )
}

/// Transactions inside the tracked expense window. Blank window bounds
/// leave the log unfiltered.
pub(crate) fn tracked_window(
    transactions: &[Transaction],
    settings: &ExpenseSettings,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| {
            (settings.start_date.is_empty() || t.date.as_str() >= settings.start_date.as_str())
                && (settings.end_date.is_empty() || t.date.as_str() <= settings.end_date.as_str())
        })
        .cloned()
        .collect()
}

pub(crate) fn tracked_months(settings: &ExpenseSettings) -> u32 {
    if settings.start_date.is_empty() || settings.end_date.is_empty() {
        1
    } else {
        dates::months_between(&settings.start_date, &settings.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use waypoint::domain::entities::ExpenseSettingsPatch;
    use waypoint::domain::value_objects::ExpenseCategory;
    use waypoint::infrastructure::{FixedClock, MemorySnapshotRepository, SequentialIds};
    use waypoint::{Config, Workbook};

    use crate::cli::ColorWhen;
    use crate::ui::context::TerminalCapabilities;

    fn test_ctx() -> UiContext {
        UiContext::from_caps(
            0,
            Some(ColorWhen::Never),
            &Config::default(),
            TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: true,
                is_ci: false,
                width: 100,
                height: 40,
            },
        )
    }

    fn test_workbook() -> Workbook {
        Workbook::open(
            Box::new(MemorySnapshotRepository::empty()),
            Box::new(SequentialIds::new()),
            Box::new(FixedClock::new(
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            )),
        )
        .unwrap()
    }

    fn txn(date: &str, amount: f64) -> waypoint::domain::entities::NewTransaction {
        waypoint::domain::entities::NewTransaction {
            date: date.to_string(),
            description: "coffee".to_string(),
            category: ExpenseCategory::DiningOut,
            amount,
            account_id: None,
        }
    }

    #[test]
    fn test_summary_shows_zeroes_for_a_fresh_workbook() {
        let workbook = test_workbook();
        let rendered = render_summary(&test_ctx(), &workbook);

        assert!(rendered.contains("Net worth"));
        assert!(rendered.contains("$0.00"));
        assert!(rendered.contains("waypoint onboard"));
    }

    #[test]
    fn test_summary_flags_the_uncovered_fund_target() {
        let workbook = test_workbook();
        // Seeded scenarios enable one 12k starter target; no cash exists.
        let rendered = render_summary(&test_ctx(), &workbook);
        assert!(rendered.contains("short of the $12,000.00 target"));
    }

    #[test]
    fn test_tracked_window_filters_by_settings_dates() {
        let mut workbook = test_workbook();
        workbook.update_expense_settings(ExpenseSettingsPatch {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
            ..Default::default()
        });
        workbook.add_transaction(txn("2023-12-31", 10.0));
        workbook.add_transaction(txn("2024-01-10", 20.0));
        workbook.add_transaction(txn("2024-02-01", 30.0));

        let window = tracked_window(workbook.transactions(), workbook.expense_settings());
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].amount, 20.0);
    }

    #[test]
    fn test_tracked_window_unbounded_when_settings_blank() {
        let mut workbook = test_workbook();
        workbook.add_transaction(txn("2024-01-10", 20.0));

        let window = tracked_window(workbook.transactions(), workbook.expense_settings());
        assert_eq!(window.len(), 1);
        assert_eq!(tracked_months(workbook.expense_settings()), 1);
    }
}
