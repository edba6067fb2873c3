//! `waypoint accounts` - cash, investment, loan, and credit card accounts.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use waypoint::domain::entities::{Account, AccountKind, NewAccount};
use waypoint::domain::services::metrics;
use waypoint::domain::value_objects::CardKind;
use waypoint::presentation::format::{format_currency, format_date};
use waypoint::Workbook;

use crate::cli::AccountsAction;
use crate::commands::{optional, parse_amount, prompt_theme};
use crate::ui::theme::{Icon, WaypointTheme};
use crate::ui::{Align, Table, UiContext};

pub(crate) const CASH_SUBTYPES: [&str; 5] =
    ["Checking", "Savings", "High-Yield Savings", "CD", "Cash"];
pub(crate) const INVEST_SUBTYPES: [&str; 5] =
    ["Roth IRA", "403(b)", "401(k)", "DCP (Pre-Tax)", "Brokerage"];
pub(crate) const LOAN_SUBTYPES: [&str; 6] = [
    "Federal Subsidized",
    "Federal Unsubsidized",
    "Auto",
    "Medical",
    "Personal",
    "Other",
];

const CATEGORIES: [&str; 4] = ["Cash", "Investment", "Loan", "Credit Card"];

pub fn cmd_accounts(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<AccountsAction>,
) -> Result<()> {
    match action.unwrap_or(AccountsAction::List) {
        AccountsAction::List => {
            print!("{}", render_accounts(ctx, workbook));
            Ok(())
        }
        AccountsAction::Add => add_account(ctx, workbook),
        AccountsAction::Delete { id } => delete_account(ctx, workbook, id),
    }
}

pub(crate) fn render_accounts(ctx: &UiContext, workbook: &Workbook) -> String {
    let accounts = workbook.accounts();
    if accounts.is_empty() {
        return format!(
            "{}\n{}\n",
            ctx.dim("No accounts yet."),
            ctx.dim("Add one with `waypoint accounts add`."),
        );
    }

    let mut out = String::new();
    for category in ["Cash", "Investment", "Loan", "Credit Card"] {
        let group: Vec<&Account> = accounts
            .iter()
            .filter(|a| a.kind.category_label() == category)
            .collect();
        if group.is_empty() {
            continue;
        }

        out.push_str(&ctx.bold(category));
        out.push('\n');

        let mut table = Table::new(&[
            ("Account", Align::Left),
            ("Type", Align::Left),
            ("Last 4", Align::Left),
            ("Balance", Align::Right),
            ("Updated", Align::Left),
        ]);
        for account in &group {
            table.add_row(vec![
                account.display_name(),
                account.kind.subtype_label(),
                account.last_four.clone().unwrap_or_else(|| "-".to_string()),
                format_currency(account.balance),
                format_date(&account.last_updated),
            ]);
        }
        out.push_str(&table.render(ctx.color, ctx.unicode));
        out.push('\n');
    }

    out.push_str(&format!(
        "{}  {} assets, {} liabilities, {} net\n",
        ctx.dim("Total"),
        format_currency(metrics::total_assets(accounts)),
        format_currency(metrics::total_liabilities(accounts)),
        format_currency(metrics::net_worth(accounts)),
    ));
    out
}

fn add_account(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let theme = prompt_theme(ctx);
    let category = Select::with_theme(&theme)
        .with_prompt("Account category")
        .items(&CATEGORIES)
        .default(0)
        .interact()?;

    let new = prompt_new_account(&theme, category)?;
    let name = new.nickname.clone();
    workbook.add_account(new);

    println!("{} Added account \"{}\"", ctx.icon(Icon::Success), name);
    Ok(())
}

/// Collect one account from the terminal. `category` indexes
/// [`CATEGORIES`]; the follow-up prompts differ per category. Shared
/// with the onboarding wizard's account steps.
pub(crate) fn prompt_new_account(theme: &WaypointTheme, category: usize) -> Result<NewAccount> {
    let institution: String = Input::with_theme(theme)
        .with_prompt("Institution")
        .interact_text()?;
    let nickname: String = Input::with_theme(theme)
        .with_prompt("Nickname")
        .interact_text()?;
    let last_four = optional(
        Input::<String>::with_theme(theme)
            .with_prompt("Last four digits (blank to skip)")
            .allow_empty(true)
            .interact_text()?,
    );
    let balance = parse_amount(
        &Input::<String>::with_theme(theme)
            .with_prompt("Current balance")
            .allow_empty(true)
            .interact_text()?,
    );

    let kind = match category {
        0 => AccountKind::Cash {
            subtype: pick_subtype(theme, &CASH_SUBTYPES)?,
            apy: prompt_optional_amount(theme, "APY % (blank to skip)")?,
        },
        1 => AccountKind::Investment {
            subtype: pick_subtype(theme, &INVEST_SUBTYPES)?,
            allocation_mix: optional(
                Input::<String>::with_theme(theme)
                    .with_prompt("Allocation mix, e.g. 80/20 (blank to skip)")
                    .allow_empty(true)
                    .interact_text()?,
            ),
        },
        2 => AccountKind::Loan {
            subtype: pick_subtype(theme, &LOAN_SUBTYPES)?,
            apr: prompt_amount(theme, "APR %")?,
            minimum_payment: prompt_amount(theme, "Minimum payment")?,
            due_date: prompt_day(theme, "Payment due day of month (blank to skip)")?,
        },
        _ => {
            let labels: Vec<&str> = CardKind::ALL.iter().map(|k| k.label()).collect();
            let subtype = CardKind::ALL[Select::with_theme(theme)
                .with_prompt("Card type")
                .items(&labels)
                .default(0)
                .interact()?];
            AccountKind::CreditCard {
                subtype,
                apr: prompt_amount(theme, "APR %")?,
                credit_limit: prompt_amount(theme, "Credit limit")?,
                minimum_payment: prompt_amount(theme, "Minimum payment")?,
                payment_due_date: prompt_day(theme, "Payment due day of month (blank to skip)")?,
                closing_date: prompt_day(theme, "Statement closing day (blank to skip)")?,
                annual_fee: prompt_optional_amount(theme, "Annual fee (blank to skip)")?,
                foreign_transaction_fee: prompt_optional_amount(
                    theme,
                    "Foreign transaction fee % (blank to skip)",
                )?,
                rewards: optional(
                    Input::<String>::with_theme(theme)
                        .with_prompt("Rewards, e.g. 2% cash back (blank to skip)")
                        .allow_empty(true)
                        .interact_text()?,
                ),
            }
        }
    };

    Ok(NewAccount {
        institution,
        nickname,
        last_four,
        balance,
        notes: None,
        kind,
    })
}

fn pick_subtype(theme: &WaypointTheme, subtypes: &[&str]) -> Result<String> {
    let index = Select::with_theme(theme)
        .with_prompt("Type")
        .items(subtypes)
        .default(0)
        .interact()?;
    Ok(subtypes[index].to_string())
}

fn prompt_amount(theme: &WaypointTheme, prompt: &str) -> Result<f64> {
    Ok(parse_amount(
        &Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?,
    ))
}

fn prompt_optional_amount(theme: &WaypointTheme, prompt: &str) -> Result<Option<f64>> {
    let text: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(optional(text).map(|t| parse_amount(&t)))
}

fn prompt_day(theme: &WaypointTheme, prompt: &str) -> Result<Option<u32>> {
    let text: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(optional(text).and_then(|t| t.parse().ok()))
}

fn delete_account(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            if workbook.accounts().is_empty() {
                println!("{}", ctx.dim("No accounts to delete."));
                return Ok(());
            }
            let labels: Vec<String> = workbook
                .accounts()
                .iter()
                .map(|a| {
                    format!(
                        "{} ({}, {})",
                        a.display_name(),
                        a.kind.category_label(),
                        format_currency(a.balance)
                    )
                })
                .collect();
            let Some(index) = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Delete which account?")
                .items(&labels)
                .interact_opt()?
            else {
                return Ok(());
            };
            workbook.accounts()[index].id.clone()
        }
    };

    match workbook.accounts().iter().find(|a| a.id == id) {
        Some(account) => {
            let name = account.display_name();
            let prompt = format!("Delete \"{name}\"? Transactions that reference it are kept.");
            let confirmed = Confirm::with_theme(&prompt_theme(ctx))
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            if confirmed {
                workbook.delete_account(&id);
                println!("{} Deleted account \"{}\"", ctx.icon(Icon::Success), name);
            }
        }
        None => println!("{} No account with ID {}", ctx.icon(Icon::Warning), id),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use waypoint::infrastructure::{FixedClock, MemorySnapshotRepository, SequentialIds};
    use waypoint::Config;

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

    #[test]
    fn test_render_accounts_groups_by_category() {
        let mut workbook = test_workbook();
        workbook.add_account(NewAccount {
            institution: "Ally".to_string(),
            nickname: "Savings".to_string(),
            last_four: Some("1234".to_string()),
            balance: 5000.0,
            notes: None,
            kind: AccountKind::Cash {
                subtype: "High-Yield Savings".to_string(),
                apy: Some(4.2),
            },
        });
        workbook.add_account(NewAccount {
            institution: "Chase".to_string(),
            nickname: "Sapphire".to_string(),
            last_four: None,
            balance: 750.0,
            notes: None,
            kind: AccountKind::CreditCard {
                subtype: CardKind::Standard,
                apr: 24.99,
                credit_limit: 8000.0,
                minimum_payment: 35.0,
                payment_due_date: Some(15),
                closing_date: None,
                annual_fee: None,
                foreign_transaction_fee: None,
                rewards: None,
            },
        });

        let rendered = render_accounts(&test_ctx(), &workbook);
        assert!(rendered.contains("Cash"));
        assert!(rendered.contains("Credit Card"));
        assert!(rendered.contains("Ally Savings"));
        assert!(rendered.contains("High-Yield Savings"));
        assert!(rendered.contains("$4,250.00 net"));
    }

    #[test]
    fn test_render_accounts_empty_points_at_add() {
        let workbook = test_workbook();
        let rendered = render_accounts(&test_ctx(), &workbook);
        assert!(rendered.contains("No accounts yet."));
    }
}
