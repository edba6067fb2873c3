//! Waypoint CLI - guided personal finance workbook
//!
//! Usage: waypoint [COMMAND]
//!
//! Commands:
//!   onboard       Guided first-run setup
//!   summary       Net worth, cash, and spending at a glance
//!   goals         Savings, debt, and milestone goals
//!   accounts      Accounts by category
//!   expenses      Spending log and budget
//!   income        Streams, paychecks, and estimated taxes
//!   networth      Monthly net worth history
//!   schedule      Recurring financial tasks
//!   institutions  Rate and card research tables
//!   fund          Emergency fund calculator
//!   sample        Load demonstration data
//!   reset         Clear the workbook for a fresh start
//!
//! Run without a command for the interactive menu.

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use waypoint::Config;

use crate::cli::{Cli, Commands};
use crate::ui::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_or_default()?;
    for warning in &warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        eprintln!("warning: unknown config key `{}` in {}", warning.key, location);
        if let Some(suggestion) = &warning.suggestion {
            eprintln!("  did you mean `{}`?", suggestion);
        }
    }

    let ctx = UiContext::new(cli.verbose, cli.color, &config);
    let mut workbook = waypoint::open_workbook(&config)?;

    let result = match cli.command {
        None => commands::menu::cmd_menu(&ctx, &mut workbook),
        Some(Commands::Onboard) => commands::onboard::cmd_onboard(&ctx, &mut workbook),
        Some(Commands::Summary) => commands::summary::cmd_summary(&ctx, &workbook),
        Some(Commands::Goals { action }) => commands::goals::cmd_goals(&ctx, &mut workbook, action),
        Some(Commands::Accounts { action }) => {
            commands::accounts::cmd_accounts(&ctx, &mut workbook, action)
        }
        Some(Commands::Expenses { action }) => {
            commands::expenses::cmd_expenses(&ctx, &mut workbook, action)
        }
        Some(Commands::Income { action }) => {
            commands::income::cmd_income(&ctx, &mut workbook, action)
        }
        Some(Commands::NetWorth { action }) => {
            commands::net_worth::cmd_net_worth(&ctx, &mut workbook, action)
        }
        Some(Commands::Schedule { action }) => {
            commands::schedule::cmd_schedule(&ctx, &mut workbook, action)
        }
        Some(Commands::Institutions { action }) => {
            commands::institutions::cmd_institutions(&ctx, &mut workbook, action)
        }
        Some(Commands::Fund { action }) => commands::fund::cmd_fund(&ctx, &mut workbook, action),
        Some(Commands::Sample) => commands::sample::cmd_sample(&ctx, &mut workbook),
        Some(Commands::Reset { yes }) => commands::reset::cmd_reset(&ctx, &mut workbook, yes),
    };

    // Mutations persist as they happen; a failed write is reported once,
    // after the command, instead of aborting it.
    if let Some(err) = workbook.save_error() {
        eprintln!("warning: workbook changes were not saved: {}", err);
        eprintln!("  the file at {} may be stale", config.workbook_path().display());
    }

    result
}
