//! `waypoint goals` - savings, debt, and milestone goals.

use anyhow::Result;
use dialoguer::{Input, Select};

use waypoint::domain::entities::{NewGoal, SmartPlan};
use waypoint::domain::value_objects::{GoalKind, Timeframe};
use waypoint::presentation::format::{format_currency, format_date, format_percent};
use waypoint::Workbook;

use crate::cli::GoalsAction;
use crate::commands::{optional, parse_amount, prompt_theme};
use crate::ui::theme::Icon;
use crate::ui::{Align, Table, UiContext};

pub fn cmd_goals(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<GoalsAction>,
) -> Result<()> {
    match action.unwrap_or(GoalsAction::List) {
        GoalsAction::List => {
            print!("{}", render_goals(ctx, workbook));
            Ok(())
        }
        GoalsAction::Add => add_goal(ctx, workbook),
        GoalsAction::Delete { id } => delete_goal(ctx, workbook, id),
    }
}

pub(crate) fn render_goals(ctx: &UiContext, workbook: &Workbook) -> String {
    let goals = workbook.goals();
    if goals.is_empty() {
        return format!(
            "{}\n{}\n",
            ctx.dim("No goals yet."),
            ctx.dim("Add one with `waypoint goals add`."),
        );
    }

    let mut table = Table::new(&[
        ("Goal", Align::Left),
        ("Horizon", Align::Left),
        ("Kind", Align::Left),
        ("Progress", Align::Right),
        ("Saved", Align::Right),
        ("Target", Align::Right),
        ("By", Align::Left),
    ]);
    for goal in goals {
        let done = goal.completed_at.is_some();
        let title = if done {
            format!("{} {}", goal.title, ctx.icon(Icon::Success))
        } else {
            goal.title.clone()
        };
        table.add_row(vec![
            title,
            goal.timeframe.label().to_string(),
            goal.kind.label().to_string(),
            format_percent(goal.progress_fraction() * 100.0, 0),
            format_currency(goal.current_amount),
            format_currency(goal.target_amount),
            if goal.target_date.is_empty() {
                ctx.dim("-")
            } else {
                format_date(&goal.target_date)
            },
        ]);
    }

    let mut out = table.render(ctx.color, ctx.unicode);
    out.push_str(&ctx.dim(&format!("{} goal(s)", goals.len())));
    out.push('\n');
    out
}

fn add_goal(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let theme = prompt_theme(ctx);

    let title: String = Input::with_theme(&theme)
        .with_prompt("Goal title")
        .interact_text()?;

    let timeframe_labels: Vec<&str> = Timeframe::ALL.iter().map(|t| t.label()).collect();
    let timeframe = Timeframe::ALL[Select::with_theme(&theme)
        .with_prompt("Horizon")
        .items(&timeframe_labels)
        .default(0)
        .interact()?];

    let kind_labels: Vec<&str> = GoalKind::ALL.iter().map(|k| k.label()).collect();
    let kind = GoalKind::ALL[Select::with_theme(&theme)
        .with_prompt("Kind")
        .items(&kind_labels)
        .default(0)
        .interact()?];

    let target_amount = parse_amount(
        &Input::<String>::with_theme(&theme)
            .with_prompt("Target amount")
            .allow_empty(true)
            .interact_text()?,
    );
    let progress_prompt = if kind.is_debt_payoff() {
        "Paid off so far"
    } else {
        "Already saved"
    };
    let current_amount = parse_amount(
        &Input::<String>::with_theme(&theme)
            .with_prompt(progress_prompt)
            .allow_empty(true)
            .interact_text()?,
    );
    let target_date: String = Input::with_theme(&theme)
        .with_prompt("Target date (YYYY-MM-DD, blank for none)")
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt("Why this goal matters (blank to skip)")
        .allow_empty(true)
        .interact_text()?;

    workbook.add_goal(NewGoal {
        timeframe,
        kind,
        title: title.clone(),
        description,
        target_amount,
        current_amount,
        target_date,
        linked_account_id: None,
        smart: SmartPlan::default(),
        completed_at: None,
    });

    println!("{} Added goal \"{}\"", ctx.icon(Icon::Success), title);
    Ok(())
}

fn delete_goal(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            if workbook.goals().is_empty() {
                println!("{}", ctx.dim("No goals to delete."));
                return Ok(());
            }
            let labels: Vec<String> = workbook
                .goals()
                .iter()
                .map(|g| format!("{} ({})", g.title, format_currency(g.target_amount)))
                .collect();
            let Some(index) = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Delete which goal?")
                .items(&labels)
                .interact_opt()?
            else {
                return Ok(());
            };
            workbook.goals()[index].id.clone()
        }
    };

    match workbook.goals().iter().find(|g| g.id == id) {
        Some(goal) => {
            let title = goal.title.clone();
            workbook.delete_goal(&id);
            println!("{} Deleted goal \"{}\"", ctx.icon(Icon::Success), title);
        }
        None => println!("{} No goal with ID {}", ctx.icon(Icon::Warning), id),
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
    fn test_render_goals_empty_points_at_add() {
        let workbook = test_workbook();
        let rendered = render_goals(&test_ctx(), &workbook);
        assert!(rendered.contains("No goals yet."));
    }

    #[test]
    fn test_render_goals_lists_progress() {
        let mut workbook = test_workbook();
        workbook.add_goal(NewGoal {
            title: "Emergency fund".to_string(),
            target_amount: 1000.0,
            current_amount: 250.0,
            target_date: "2024-06-01".to_string(),
            ..Default::default()
        });

        let rendered = render_goals(&test_ctx(), &workbook);
        assert!(rendered.contains("Emergency fund"));
        assert!(rendered.contains("25%"));
        assert!(rendered.contains("$250.00"));
        assert!(rendered.contains("$1,000.00"));
        assert!(rendered.contains("Jun 1, 2024"));
        assert!(rendered.contains("1 goal(s)"));
    }
}
