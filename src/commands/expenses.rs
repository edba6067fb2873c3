//! `waypoint expenses` - the transaction log and its tracking window.

use anyhow::Result;
use dialoguer::{FuzzySelect, Input, Select};

use waypoint::domain::entities::{ExpenseSettingsPatch, NewTransaction};
use waypoint::domain::services::metrics;
use waypoint::domain::value_objects::ExpenseCategory;
use waypoint::presentation::format::{format_currency, format_date};
use waypoint::Workbook;

use crate::cli::ExpensesAction;
use crate::commands::summary::{tracked_months, tracked_window};
use crate::commands::{optional, parse_amount, prompt_theme};
use crate::ui::theme::Icon;
use crate::ui::{Align, Table, UiContext};

/// Rows shown in the listing before the rest is elided.
const LIST_LIMIT: usize = 15;

pub fn cmd_expenses(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<ExpensesAction>,
) -> Result<()> {
    match action.unwrap_or(ExpensesAction::List) {
        ExpensesAction::List => {
            print!("{}", render_expenses(ctx, workbook));
            Ok(())
        }
        ExpensesAction::Add => add_transaction(ctx, workbook),
        ExpensesAction::Delete { id } => delete_transaction(ctx, workbook, id),
        ExpensesAction::Budget => edit_budget(ctx, workbook),
    }
}

pub(crate) fn render_expenses(ctx: &UiContext, workbook: &Workbook) -> String {
    let transactions = workbook.transactions();
    if transactions.is_empty() {
        return format!(
            "{}\n{}\n",
            ctx.dim("No expenses yet."),
            ctx.dim("Add one with `waypoint expenses add`."),
        );
    }

    let settings = workbook.expense_settings();
    let window = tracked_window(transactions, settings);
    let months = tracked_months(settings);

    let mut out = String::new();
    if settings.start_date.is_empty() {
        out.push_str(&ctx.dim("Tracking all dates"));
    } else {
        out.push_str(&ctx.dim(&format!(
            "Tracking {} to {}",
            format_date(&settings.start_date),
            format_date(&settings.end_date),
        )));
    }
    out.push('\n');

    let mut table = Table::new(&[
        ("Date", Align::Left),
        ("Description", Align::Left),
        ("Category", Align::Left),
        ("Amount", Align::Right),
    ]);
    for transaction in window.iter().take(LIST_LIMIT) {
        table.add_row(vec![
            format_date(&transaction.date),
            transaction.description.clone(),
            transaction.category.label().to_string(),
            format_currency(transaction.amount),
        ]);
    }
    out.push_str(&table.render(ctx.color, ctx.unicode));
    if window.len() > LIST_LIMIT {
        out.push_str(&ctx.dim(&format!("... and {} more", window.len() - LIST_LIMIT)));
        out.push('\n');
    }
    out.push('\n');

    let total = metrics::total_spend(&window);
    let monthly = metrics::avg_monthly_spend(&window, months);
    out.push_str(&format!(
        "{}  {} over {} transaction(s), {} per month",
        ctx.dim("Total"),
        format_currency(total),
        window.len(),
        format_currency(monthly),
    ));
    if settings.monthly_goal > 0.0 {
        let icon = if monthly > settings.monthly_goal {
            Icon::Warning
        } else {
            Icon::Success
        };
        out.push_str(&format!(
            " {} {} goal",
            ctx.icon(icon),
            format_currency(settings.monthly_goal),
        ));
    }
    out.push('\n');

    let saved: f64 = window
        .iter()
        .filter(|t| t.category.is_savings())
        .map(|t| t.amount)
        .sum();
    if saved > 0.0 {
        out.push_str(&ctx.dim(&format!(
            "Includes {} set aside in savings categories",
            format_currency(saved),
        )));
        out.push('\n');
    }

    let mut ranked: Vec<(ExpenseCategory, f64)> =
        metrics::spend_by_category(&window).into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    if !ranked.is_empty() {
        out.push_str(&ctx.dim("Top categories"));
        out.push('\n');
        for (category, amount) in ranked.iter().take(3) {
            out.push_str(&format!(
                "  {} {} {}\n",
                ctx.icon(Icon::Arrow),
                category.label(),
                ctx.dim(&format_currency(*amount)),
            ));
        }
    }
    out
}

fn add_transaction(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let theme = prompt_theme(ctx);
    let date: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(workbook.today())
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .interact_text()?;

    // group-prefixed so typing "sav" or "housing" filters a whole block
    let labels: Vec<String> = ExpenseCategory::ALL
        .iter()
        .map(|c| format!("{}: {}", c.group(), c.label()))
        .collect();
    let category = ExpenseCategory::ALL[FuzzySelect::with_theme(&theme)
        .with_prompt("Category (type to filter)")
        .items(&labels)
        .default(0)
        .interact()?];

    let amount = parse_amount(
        &Input::<String>::with_theme(&theme)
            .with_prompt("Amount")
            .interact_text()?,
    );

    let account_id = if workbook.accounts().is_empty() {
        None
    } else {
        let mut items = vec!["(none)".to_string()];
        items.extend(workbook.accounts().iter().map(|a| a.display_name()));
        let picked = Select::with_theme(&theme)
            .with_prompt("Paid from")
            .items(&items)
            .default(0)
            .interact()?;
        if picked == 0 {
            None
        } else {
            Some(workbook.accounts()[picked - 1].id.clone())
        }
    };

    workbook.add_transaction(NewTransaction {
        date,
        description: description.clone(),
        category,
        amount,
        account_id,
    });
    println!(
        "{} Added expense \"{}\" ({})",
        ctx.icon(Icon::Success),
        description,
        format_currency(amount),
    );
    Ok(())
}

fn delete_transaction(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            if workbook.transactions().is_empty() {
                println!("{}", ctx.dim("No expenses to delete."));
                return Ok(());
            }
            let labels: Vec<String> = workbook
                .transactions()
                .iter()
                .take(LIST_LIMIT)
                .map(|t| {
                    format!(
                        "{} {} ({})",
                        format_date(&t.date),
                        t.description,
                        format_currency(t.amount)
                    )
                })
                .collect();
            let Some(index) = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Delete which expense?")
                .items(&labels)
                .interact_opt()?
            else {
                return Ok(());
            };
            workbook.transactions()[index].id.clone()
        }
    };

    match workbook.transactions().iter().find(|t| t.id == id) {
        Some(transaction) => {
            let description = transaction.description.clone();
            workbook.delete_transaction(&id);
            println!(
                "{} Deleted expense \"{}\"",
                ctx.icon(Icon::Success),
                description
            );
        }
        None => println!("{} No expense with ID {}", ctx.icon(Icon::Warning), id),
    }
    Ok(())
}

fn edit_budget(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let theme = prompt_theme(ctx);
    let settings = workbook.expense_settings().clone();

    let start: String = Input::with_theme(&theme)
        .with_prompt("Window start (YYYY-MM-DD, blank for all dates)")
        .with_initial_text(&settings.start_date)
        .allow_empty(true)
        .interact_text()?;
    let end: String = Input::with_theme(&theme)
        .with_prompt("Window end (YYYY-MM-DD, blank for all dates)")
        .with_initial_text(&settings.end_date)
        .allow_empty(true)
        .interact_text()?;
    let goal: String = Input::with_theme(&theme)
        .with_prompt("Monthly spend goal (blank for none)")
        .allow_empty(true)
        .interact_text()?;

    workbook.update_expense_settings(ExpenseSettingsPatch {
        start_date: Some(start.trim().to_string()),
        end_date: Some(end.trim().to_string()),
        monthly_goal: Some(optional(goal).map_or(settings.monthly_goal, |g| parse_amount(&g))),
    });
    println!("{} Updated expense tracking settings", ctx.icon(Icon::Success));
    Ok(())
}
