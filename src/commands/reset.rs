//! `waypoint reset` - start over.

use anyhow::Result;
use dialoguer::Confirm;

use waypoint::Workbook;

use crate::commands::prompt_theme;
use crate::ui::theme::Icon;
use crate::ui::UiContext;

pub fn cmd_reset(ctx: &UiContext, workbook: &mut Workbook, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&prompt_theme(ctx))
            .with_prompt("Clear goals, accounts, expenses, income streams, and research notes?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    workbook.reset_for_onboarding();
    println!("{} Workbook reset", ctx.icon(Icon::Success));
    println!(
        "{}",
        ctx.dim("Net worth history, paychecks, tax payments, and the schedule were kept.")
    );
    println!("{}", ctx.dim("Run `waypoint onboard` to set up again."));
    Ok(())
}
