//! `waypoint schedule` - the recurring financial chore list.
//!
//! Items group by frequency. Toggling flips today's date in the item's
//! completion set, so a monthly task naturally resets the next day it is
//! looked at under a new date.

use anyhow::Result;
use dialoguer::{Input, Select};

use waypoint::domain::entities::{NewScheduleItem, ScheduleItem};
use waypoint::domain::value_objects::Frequency;
use waypoint::Workbook;

use crate::cli::ScheduleAction;
use crate::commands::prompt_theme;
use crate::ui::theme::Icon;
use crate::ui::UiContext;

pub fn cmd_schedule(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<ScheduleAction>,
) -> Result<()> {
    match action.unwrap_or(ScheduleAction::List) {
        ScheduleAction::List => {
            print!("{}", render_schedule(ctx, workbook));
            Ok(())
        }
        ScheduleAction::Toggle { id } => toggle_item(ctx, workbook, id),
        ScheduleAction::Dates { id } => edit_dates(ctx, workbook, id),
        ScheduleAction::Add => add_item(ctx, workbook),
        ScheduleAction::Delete { id } => delete_item(ctx, workbook, id),
    }
}

pub(crate) fn render_schedule(ctx: &UiContext, workbook: &Workbook) -> String {
    let items = workbook.schedule_items();
    if items.is_empty() {
        return format!(
            "{}\n{}\n",
            ctx.dim("No schedule items."),
            ctx.dim("Add one with `waypoint schedule add`."),
        );
    }

    let today = workbook.today();
    let mut out = String::new();
    for frequency in Frequency::ALL {
        let group: Vec<&ScheduleItem> =
            items.iter().filter(|i| i.frequency == frequency).collect();
        if group.is_empty() {
            continue;
        }

        out.push_str(&ctx.bold(frequency.label()));
        out.push('\n');
        for item in group {
            let icon = if item.completed_on(&today) {
                ctx.icon(Icon::Done)
            } else {
                ctx.icon(Icon::Pending)
            };
            out.push_str(&format!("  {} {}", icon, item.task));
            if !item.my_dates.is_empty() {
                out.push_str(&format!("  {}", ctx.dim(&item.my_dates)));
            }
            out.push('\n');
            if let Some(helper) = &item.helper_text {
                out.push_str(&format!("      {}\n", ctx.dim(helper)));
            }
        }
        out.push('\n');
    }
    out.push_str(&ctx.dim("Toggle today's check-off with `waypoint schedule toggle`."));
    out.push('\n');
    out
}

fn pick_item(ctx: &UiContext, workbook: &Workbook, prompt: &str) -> Result<Option<String>> {
    let today = workbook.today();
    let labels: Vec<String> = workbook
        .schedule_items()
        .iter()
        .map(|i| {
            let mark = if i.completed_on(&today) { "done today" } else { "open" };
            format!("{} ({}, {})", i.task, i.frequency.label(), mark)
        })
        .collect();
    let Some(index) = Select::with_theme(&prompt_theme(ctx))
        .with_prompt(prompt)
        .items(&labels)
        .interact_opt()?
    else {
        return Ok(None);
    };
    Ok(Some(workbook.schedule_items()[index].id.clone()))
}

fn toggle_item(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    if workbook.schedule_items().is_empty() {
        println!("{}", ctx.dim("No schedule items."));
        return Ok(());
    }
    let id = match id {
        Some(id) => id,
        None => match pick_item(ctx, workbook, "Toggle which item?")? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    if !workbook.schedule_items().iter().any(|i| i.id == id) {
        println!("{} No schedule item with ID {}", ctx.icon(Icon::Warning), id);
        return Ok(());
    }
    workbook.toggle_schedule_complete(&id);

    let today = workbook.today();
    let item = workbook
        .schedule_items()
        .iter()
        .find(|i| i.id == id)
        .cloned();
    if let Some(item) = item {
        if item.completed_on(&today) {
            println!("{} \"{}\" checked off for today", ctx.icon(Icon::Done), item.task);
        } else {
            println!("{} \"{}\" reopened for today", ctx.icon(Icon::Pending), item.task);
        }
    }
    Ok(())
}

fn edit_dates(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    if workbook.schedule_items().is_empty() {
        println!("{}", ctx.dim("No schedule items."));
        return Ok(());
    }
    let id = match id {
        Some(id) => id,
        None => match pick_item(ctx, workbook, "Set dates for which item?")? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let Some(item) = workbook.schedule_items().iter().find(|i| i.id == id).cloned() else {
        println!("{} No schedule item with ID {}", ctx.icon(Icon::Warning), id);
        return Ok(());
    };

    let my_dates: String = Input::with_theme(&prompt_theme(ctx))
        .with_prompt("My dates, e.g. \"1st of month\" or \"Apr 15 / Jun 15\"")
        .with_initial_text(&item.my_dates)
        .allow_empty(true)
        .interact_text()?;
    workbook.update_schedule_dates(&id, my_dates.trim());
    println!("{} Updated dates for \"{}\"", ctx.icon(Icon::Success), item.task);
    Ok(())
}

fn add_item(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let theme = prompt_theme(ctx);
    let task: String = Input::with_theme(&theme)
        .with_prompt("Task")
        .interact_text()?;
    let labels: Vec<&str> = Frequency::ALL.iter().map(|f| f.label()).collect();
    let frequency = Frequency::ALL[Select::with_theme(&theme)
        .with_prompt("Frequency")
        .items(&labels)
        .default(1)
        .interact()?];

    workbook.add_schedule_item(NewScheduleItem::custom(frequency, task.clone()));
    println!("{} Added \"{}\" to the schedule", ctx.icon(Icon::Success), task);
    Ok(())
}

fn delete_item(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            // Built-in rows can be deleted by explicit ID, but the picker
            // only offers user-created ones.
            let custom: Vec<&ScheduleItem> = workbook
                .schedule_items()
                .iter()
                .filter(|i| i.is_custom)
                .collect();
            if custom.is_empty() {
                println!("{}", ctx.dim("No custom schedule items to delete."));
                return Ok(());
            }
            let labels: Vec<String> = custom
                .iter()
                .map(|i| format!("{} ({})", i.task, i.frequency.label()))
                .collect();
            let Some(index) = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Delete which item?")
                .items(&labels)
                .interact_opt()?
            else {
                return Ok(());
            };
            custom[index].id.clone()
        }
    };

    match workbook.schedule_items().iter().find(|i| i.id == id) {
        Some(item) => {
            let task = item.task.clone();
            workbook.delete_schedule_item(&id);
            println!("{} Deleted \"{}\"", ctx.icon(Icon::Success), task);
        }
        None => println!("{} No schedule item with ID {}", ctx.icon(Icon::Warning), id),
    }
    Ok(())
}
