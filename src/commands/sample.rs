//! `waypoint sample` - load the demonstration dataset.

use anyhow::Result;
use dialoguer::Confirm;

use waypoint::Workbook;

use crate::commands::prompt_theme;
use crate::ui::theme::Icon;
use crate::ui::UiContext;

pub fn cmd_sample(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    // A fresh workbook loads straight away; anything else asks first.
    if has_data(workbook) {
        let confirmed = Confirm::with_theme(&prompt_theme(ctx))
            .with_prompt("Replace your current data with the sample dataset?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    workbook.load_sample_data();
    println!("{} Sample data loaded", ctx.icon(Icon::Success));
    println!(
        "{}",
        ctx.dim("Look around with `waypoint summary`, `waypoint accounts`, `waypoint goals`.")
    );
    Ok(())
}

fn has_data(workbook: &Workbook) -> bool {
    workbook.onboarding_completed()
        || !workbook.goals().is_empty()
        || !workbook.accounts().is_empty()
        || !workbook.transactions().is_empty()
        || !workbook.income_streams().is_empty()
}
