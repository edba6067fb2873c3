//! Bare `waypoint` - the interactive menu.
//!
//! Running the binary with no subcommand lands here. A fresh workbook
//! gets pointed at onboarding or sample data; a configured one gets a
//! single-shot jump menu over the read surfaces.

use anyhow::Result;
use dialoguer::Select;
use is_terminal::IsTerminal;

use waypoint::domain::services::metrics;
use waypoint::presentation::format::format_currency;
use waypoint::Workbook;

use crate::commands;
use crate::commands::prompt_theme;
use crate::ui::{Panel, UiContext};

pub fn cmd_menu(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        println!("No command provided.");
        println!("Try: `waypoint summary` or `waypoint --help`");
        return Ok(());
    }

    print!("{}", render_banner(ctx, workbook));

    if !workbook.onboarding_completed() {
        return first_run_menu(ctx, workbook);
    }
    configured_menu(ctx, workbook)
}

pub(crate) fn render_banner(ctx: &UiContext, workbook: &Workbook) -> String {
    let mut panel = Panel::with_title(ctx.bold("waypoint"));
    if workbook.onboarding_completed() {
        let accounts = workbook.accounts();
        panel.add_line(&format!(
            "Net worth {} across {} account(s)",
            format_currency(metrics::net_worth(accounts)),
            accounts.len(),
        ));
    } else {
        panel.add_line("A workbook for goals, accounts, spending, and income.");
        panel.add_line(&ctx.dim("Nothing set up yet."));
    }
    panel.render(ctx.color, ctx.unicode)
}

fn first_run_menu(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let items = vec![
        "[1] Start guided setup",
        "[2] Load sample data",
        "[3] Show commands",
        "[4] Quit",
    ];

    let selection = Select::with_theme(&prompt_theme(ctx))
        .with_prompt("What would you like to do?")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => commands::onboard::cmd_onboard(ctx, workbook),
        1 => commands::sample::cmd_sample(ctx, workbook),
        2 => {
            print_commands();
            Ok(())
        }
        _ => Ok(()),
    }
}

fn configured_menu(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let items = vec![
        "[1] Summary",
        "[2] Goals",
        "[3] Accounts",
        "[4] Expenses",
        "[5] Income",
        "[6] Net worth",
        "[7] Schedule",
        "[8] Institutions",
        "[9] Emergency fund",
        "[10] Quit",
    ];

    let selection = Select::with_theme(&prompt_theme(ctx))
        .with_prompt("What would you like to see?")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => commands::summary::cmd_summary(ctx, workbook),
        1 => commands::goals::cmd_goals(ctx, workbook, None),
        2 => commands::accounts::cmd_accounts(ctx, workbook, None),
        3 => commands::expenses::cmd_expenses(ctx, workbook, None),
        4 => commands::income::cmd_income(ctx, workbook, None),
        5 => commands::net_worth::cmd_net_worth(ctx, workbook, None),
        6 => commands::schedule::cmd_schedule(ctx, workbook, None),
        7 => commands::institutions::cmd_institutions(ctx, workbook, None),
        8 => commands::fund::cmd_fund(ctx, workbook, None),
        _ => Ok(()),
    }
}

fn print_commands() {
    println!("Commands:");
    println!("  waypoint onboard         Guided first-run setup");
    println!("  waypoint summary         Where you stand right now");
    println!("  waypoint goals           Goals and progress");
    println!("  waypoint accounts        Accounts by category");
    println!("  waypoint expenses        Spending against the tracking window");
    println!("  waypoint income          Streams, paychecks, and tax payments");
    println!("  waypoint networth        Monthly net worth history");
    println!("  waypoint schedule        The money routine");
    println!("  waypoint institutions    Research notes on banks, funds, and cards");
    println!("  waypoint fund            Emergency fund target");
    println!("  waypoint sample          Load the sample dataset");
    println!("  waypoint reset           Clear data for a fresh start\n");
}
