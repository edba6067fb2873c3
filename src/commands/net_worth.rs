//! `waypoint networth` - monthly net worth snapshots.
//!
//! Each entry freezes per-account balances for one month. Recording
//! prefills from current account balances (liabilities negated) so the
//! usual monthly check-in is confirm, confirm, confirm.

use std::collections::BTreeMap;

use anyhow::Result;
use dialoguer::{Input, Select};

use waypoint::domain::entities::{NetWorthEntry, NetWorthSettingsPatch, NewNetWorthEntry};
use waypoint::presentation::format::{format_currency, format_currency_signed, format_month_year};
use waypoint::Workbook;

use crate::cli::NetWorthAction;
use crate::commands::{optional, parse_amount, prompt_theme};
use crate::ui::theme::Icon;
use crate::ui::{Align, Table, UiContext};

pub fn cmd_net_worth(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<NetWorthAction>,
) -> Result<()> {
    match action.unwrap_or(NetWorthAction::List) {
        NetWorthAction::List => {
            print!("{}", render_net_worth(ctx, workbook));
            Ok(())
        }
        NetWorthAction::Record => record_entry(ctx, workbook),
        NetWorthAction::Goal { amount } => set_goal(ctx, workbook, amount),
        NetWorthAction::Delete { id } => delete_entry(ctx, workbook, id),
    }
}

pub(crate) fn render_net_worth(ctx: &UiContext, workbook: &Workbook) -> String {
    let entries = sorted_entries(workbook.net_worth_entries());
    if entries.is_empty() {
        return format!(
            "{}\n{}\n",
            ctx.dim("No net worth entries yet."),
            ctx.dim("Record this month with `waypoint networth record`."),
        );
    }

    let goal = workbook.net_worth_settings().monthly_growth_goal;
    let mut out = String::new();
    let mut table = Table::new(&[
        ("Month", Align::Left),
        ("Net worth", Align::Right),
        ("Change", Align::Right),
        ("", Align::Left),
    ]);
    let mut previous: Option<f64> = None;
    for entry in &entries {
        let total = entry.total();
        let (change, marker) = match previous {
            Some(prev) => {
                let delta = total - prev;
                let icon = if delta >= goal {
                    ctx.icon(Icon::Up)
                } else if delta < 0.0 {
                    ctx.icon(Icon::Down)
                } else {
                    String::new()
                };
                (render_delta(ctx, delta), icon)
            }
            None => (ctx.dim("-"), String::new()),
        };
        table.add_row(vec![
            format_month_year(&entry.date),
            format_currency(total),
            change,
            marker,
        ]);
        previous = Some(total);
    }
    out.push_str(&table.render(ctx.color, ctx.unicode));
    out.push('\n');

    if goal > 0.0 {
        out.push_str(&ctx.dim(&format!("Growth goal {} per month", format_currency(goal))));
        out.push('\n');
    }
    out
}

fn render_delta(ctx: &UiContext, delta: f64) -> String {
    let text = format_currency_signed(delta);
    if delta < 0.0 {
        ctx.error(&text)
    } else {
        ctx.success(&text)
    }
}

/// Month keys sort lexicographically, so a plain string sort puts
/// out-of-order recordings back in calendar order.
fn sorted_entries(entries: &[NetWorthEntry]) -> Vec<NetWorthEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

fn record_entry(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    if workbook.accounts().is_empty() {
        println!(
            "{} Add accounts first: `waypoint accounts add`",
            ctx.icon(Icon::Warning)
        );
        return Ok(());
    }

    let theme = prompt_theme(ctx);
    let month: String = Input::with_theme(&theme)
        .with_prompt("Month (YYYY-MM)")
        .default(workbook.today()[..7].to_string())
        .interact_text()?;
    if workbook.net_worth_entries().iter().any(|e| e.date == month) {
        println!(
            "{} An entry for {} already exists. Delete it first to re-record.",
            ctx.icon(Icon::Warning),
            format_month_year(&month),
        );
        return Ok(());
    }

    // Liabilities prefill negative so the entry total is a real net worth.
    let mut values = BTreeMap::new();
    let accounts: Vec<_> = workbook.accounts().to_vec();
    for account in &accounts {
        let prefill = if account.is_asset() {
            account.balance
        } else {
            -account.balance
        };
        let typed: String = Input::with_theme(&theme)
            .with_prompt(account.display_name())
            .default(format!("{prefill:.2}"))
            .interact_text()?;
        values.insert(account.id.clone(), parse_amount(&typed));
    }

    let note = optional(
        Input::<String>::with_theme(&theme)
            .with_prompt("Note (blank to skip)")
            .allow_empty(true)
            .interact_text()?,
    );

    let total: f64 = values.values().sum();
    workbook.add_net_worth_entry(NewNetWorthEntry {
        date: month.clone(),
        values,
        note,
    });
    println!(
        "{} Recorded {} at {}",
        ctx.icon(Icon::Success),
        format_month_year(&month),
        format_currency(total),
    );
    Ok(())
}

fn set_goal(ctx: &UiContext, workbook: &mut Workbook, amount: Option<f64>) -> Result<()> {
    let goal = match amount {
        Some(goal) => goal,
        None => parse_amount(
            &Input::<String>::with_theme(&prompt_theme(ctx))
                .with_prompt("Monthly growth goal")
                .default(format!(
                    "{:.2}",
                    workbook.net_worth_settings().monthly_growth_goal
                ))
                .interact_text()?,
        ),
    };
    workbook.update_net_worth_settings(NetWorthSettingsPatch {
        monthly_growth_goal: Some(goal),
    });
    println!(
        "{} Growth goal set to {} per month",
        ctx.icon(Icon::Success),
        format_currency(goal),
    );
    Ok(())
}

fn delete_entry(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            if workbook.net_worth_entries().is_empty() {
                println!("{}", ctx.dim("No net worth entries to delete."));
                return Ok(());
            }
            let labels: Vec<String> = workbook
                .net_worth_entries()
                .iter()
                .map(|e| format!("{} ({})", format_month_year(&e.date), format_currency(e.total())))
                .collect();
            let Some(index) = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Delete which entry?")
                .items(&labels)
                .interact_opt()?
            else {
                return Ok(());
            };
            workbook.net_worth_entries()[index].id.clone()
        }
    };

    match workbook.net_worth_entries().iter().find(|e| e.id == id) {
        Some(entry) => {
            let month = format_month_year(&entry.date);
            workbook.delete_net_worth_entry(&id);
            println!("{} Deleted entry for {}", ctx.icon(Icon::Success), month);
        }
        None => println!("{} No entry with ID {}", ctx.icon(Icon::Warning), id),
    }
    Ok(())
}
