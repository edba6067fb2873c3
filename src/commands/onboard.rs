//! `waypoint onboard` - the guided setup wizard.
//!
//! Fourteen screens over [`OnboardingFlow`]. This module owns only the
//! prompts and rendering; every transition and commit rule lives in the
//! flow itself. Exiting mid-way keeps whatever the flow has already
//! committed (expenses and income write through on Continue) and drops
//! the rest.

use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};
use is_terminal::IsTerminal;

use waypoint::application::onboarding::{step_meta, DraftGoal, OnboardingFlow, TOTAL_STEPS};
use waypoint::domain::entities::{NewIncomeStream, NewTransaction};
use waypoint::domain::services::metrics;
use waypoint::domain::value_objects::{ExpenseCategory, Frequency, GoalKind, IncomeKind, Timeframe};
use waypoint::presentation::format::format_currency;
use waypoint::Workbook;

use crate::commands::accounts::prompt_new_account;
use crate::commands::{parse_amount, prompt_theme};
use crate::ui::theme::Icon;
use crate::ui::{Panel, PanelStyle, UiContext};

enum Nav {
    Continue,
    Back,
    Skip,
    Exit,
    Extra(usize),
}

pub fn cmd_onboard(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        println!("Onboarding is interactive and needs a terminal.");
        println!("Try `waypoint sample` to explore demo data instead.");
        return Ok(());
    }

    let mut flow = OnboardingFlow::new();
    loop {
        if flow.at_welcome() {
            match welcome_screen(ctx, workbook)? {
                Welcome::Start => flow.start(workbook),
                Welcome::Sample => {
                    flow.load_sample(workbook);
                    println!("{} Sample data loaded", ctx.icon(Icon::Success));
                    println!("{}", ctx.dim("Look around with `waypoint summary`."));
                    return Ok(());
                }
                Welcome::Exit => return Ok(()),
            }
            continue;
        }

        if flow.at_done() {
            print_header(ctx, TOTAL_STEPS);
            print!("{}", render_done_summary(ctx, &flow));
            let choice = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Finish up")
                .items(&["Finish and save", "Back", "Start over"])
                .default(0)
                .interact()?;
            match choice {
                0 => {
                    flow.finish(workbook);
                    println!("{} Setup complete", ctx.icon(Icon::Success));
                    println!("{}", ctx.dim("See where you stand with `waypoint summary`."));
                    return Ok(());
                }
                1 => flow.back(),
                _ => flow.reset(workbook),
            }
            continue;
        }

        let step = flow.step();
        print_header(ctx, step);
        let nav = match step {
            1 => intro_step(
                ctx,
                &flow,
                "First, a picture of where you are: goals, accounts, and spending.",
            )?,
            2 => goals_step(ctx, &mut flow)?,
            3 => accounts_step(ctx, &mut flow, 0)?,
            4 => accounts_step(ctx, &mut flow, 1)?,
            5 => accounts_step(ctx, &mut flow, 2)?,
            6 => accounts_step(ctx, &mut flow, 3)?,
            7 => expenses_step(ctx, &mut flow)?,
            8 => intro_step(
                ctx,
                &flow,
                "Next, the plan: where money comes from and what recurs.",
            )?,
            9 => income_step(ctx, &mut flow)?,
            10 => schedule_step(ctx, &flow, workbook)?,
            11 => intro_step(
                ctx,
                &flow,
                "Last, safety nets: size an emergency fund against real scenarios.",
            )?,
            _ => fund_step(ctx, &mut flow)?,
        };

        match nav {
            Nav::Continue => flow.advance(workbook),
            Nav::Back => flow.back(),
            Nav::Skip => flow.skip(),
            Nav::Exit => {
                println!("{}", ctx.dim("Exited setup. Anything already saved stays saved."));
                println!("{}", ctx.dim("Run `waypoint onboard` to pick up again."));
                return Ok(());
            }
            Nav::Extra(_) => unreachable!("step fns resolve their own extras"),
        }
    }
}

enum Welcome {
    Start,
    Sample,
    Exit,
}

fn welcome_screen(ctx: &UiContext, workbook: &Workbook) -> Result<Welcome> {
    let mut panel = Panel::with_title(ctx.bold("Welcome to waypoint"));
    panel.add_line("A workbook for goals, accounts, spending, and income.");
    panel.add_line("Setup takes about ten minutes and every step can be skipped.");
    if workbook.onboarding_completed() {
        panel.add_empty();
        panel.add_line(&ctx.warning(
            "Starting over clears goals, accounts, expenses, income, and research notes.",
        ));
    }
    print!("{}", panel.render(ctx.color, ctx.unicode));

    let choice = Select::with_theme(&prompt_theme(ctx))
        .with_prompt("How do you want to begin?")
        .items(&["Get started", "Load sample data instead", "Exit"])
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => Welcome::Start,
        1 => Welcome::Sample,
        _ => Welcome::Exit,
    })
}

fn print_header(ctx: &UiContext, step: usize) {
    let Some(meta) = step_meta(step) else {
        return;
    };
    println!();
    println!(
        "{}  {}",
        ctx.bold(&format!("Step {step}/{TOTAL_STEPS}")),
        ctx.dim(&format!("{} / {}", meta.phase.label(), meta.name)),
    );
}

/// One navigation prompt per screen round. Extra actions come first so
/// the cursor starts on the step's verb; Continue follows.
fn step_nav(ctx: &UiContext, flow: &OnboardingFlow, extras: &[&str]) -> Result<Nav> {
    let mut items: Vec<&str> = extras.to_vec();
    items.push("Continue");
    if flow.can_go_back() {
        items.push("Back");
    }
    items.push("Skip this step");
    items.push("Exit setup");

    let choice = Select::with_theme(&prompt_theme(ctx))
        .items(&items)
        .default(0)
        .interact()?;
    if choice < extras.len() {
        return Ok(Nav::Extra(choice));
    }
    Ok(match items[choice] {
        "Continue" => Nav::Continue,
        "Back" => Nav::Back,
        "Skip this step" => Nav::Skip,
        _ => Nav::Exit,
    })
}

fn intro_step(ctx: &UiContext, flow: &OnboardingFlow, blurb: &str) -> Result<Nav> {
    println!("{}", ctx.dim(blurb));
    loop {
        match step_nav(ctx, flow, &[])? {
            Nav::Extra(_) => continue,
            nav => return Ok(nav),
        }
    }
}

fn goals_step(ctx: &UiContext, flow: &mut OnboardingFlow) -> Result<Nav> {
    println!(
        "{}",
        ctx.dim("Name the goals first; the numbers get easier once they serve something.")
    );
    loop {
        for goal in &flow.draft.goals {
            println!(
                "  {} {} ({})",
                ctx.icon(Icon::Arrow),
                goal.title,
                format_currency(goal.target_amount),
            );
        }
        match step_nav(ctx, flow, &["Add a goal"])? {
            Nav::Extra(_) => {
                let goal = prompt_draft_goal(ctx)?;
                flow.draft.goals.push(goal);
            }
            nav => return Ok(nav),
        }
    }
}

fn prompt_draft_goal(ctx: &UiContext) -> Result<DraftGoal> {
    let theme = prompt_theme(ctx);
    let title: String = Input::with_theme(&theme)
        .with_prompt("Goal")
        .interact_text()?;

    let horizons: Vec<String> = Timeframe::ALL
        .iter()
        .map(|t| format!("{} ({})", t.label(), t.horizon()))
        .collect();
    let timeframe = Timeframe::ALL[Select::with_theme(&theme)
        .with_prompt("Horizon")
        .items(&horizons)
        .default(0)
        .interact()?];

    let kinds: Vec<&str> = GoalKind::ALL.iter().map(|k| k.label()).collect();
    let kind = GoalKind::ALL[Select::with_theme(&theme)
        .with_prompt("Kind")
        .items(&kinds)
        .default(0)
        .interact()?];

    let target_amount = parse_amount(
        &Input::<String>::with_theme(&theme)
            .with_prompt("Target amount (blank if none)")
            .allow_empty(true)
            .interact_text()?,
    );
    let target_date: String = Input::with_theme(&theme)
        .with_prompt("Target date (YYYY-MM-DD, blank if none)")
        .allow_empty(true)
        .interact_text()?;

    Ok(DraftGoal {
        timeframe,
        kind,
        title,
        target_amount,
        target_date: target_date.trim().to_string(),
    })
}

/// Steps 3 through 6 share one shape; `category` indexes the account
/// category list the same way `accounts add` does.
fn accounts_step(ctx: &UiContext, flow: &mut OnboardingFlow, category: usize) -> Result<Nav> {
    let (blurb, verb) = match category {
        0 => ("Checking, savings, actual cash. Where money sits.", "Add a cash account"),
        1 => ("Retirement and brokerage accounts.", "Add an investment account"),
        2 => ("Student, auto, medical, personal. Balances owed.", "Add a loan"),
        _ => ("Every open card, even the empty ones.", "Add a credit card"),
    };
    println!("{}", ctx.dim(blurb));
    loop {
        let drafts = match category {
            0 => &flow.draft.cash_accounts,
            1 => &flow.draft.investment_accounts,
            2 => &flow.draft.loan_accounts,
            _ => &flow.draft.card_accounts,
        };
        for account in drafts {
            println!(
                "  {} {} {} ({})",
                ctx.icon(Icon::Arrow),
                account.institution,
                account.nickname,
                format_currency(account.balance),
            );
        }
        match step_nav(ctx, flow, &[verb])? {
            Nav::Extra(_) => {
                let account = prompt_new_account(&prompt_theme(ctx), category)?;
                match category {
                    0 => flow.draft.cash_accounts.push(account),
                    1 => flow.draft.investment_accounts.push(account),
                    2 => flow.draft.loan_accounts.push(account),
                    _ => flow.draft.card_accounts.push(account),
                }
            }
            nav => return Ok(nav),
        }
    }
}

fn expenses_step(ctx: &UiContext, flow: &mut OnboardingFlow) -> Result<Nav> {
    println!(
        "{}",
        ctx.dim("Pick a tracking window and seed it with whatever expenses you remember.")
    );
    println!(
        "{}",
        ctx.dim("Continuing saves this step immediately; skipping saves nothing.")
    );

    let theme = prompt_theme(ctx);
    let start: String = Input::with_theme(&theme)
        .with_prompt("Window start (YYYY-MM-DD, blank for all dates)")
        .with_initial_text(&flow.draft.expense_start)
        .allow_empty(true)
        .interact_text()?;
    let end: String = Input::with_theme(&theme)
        .with_prompt("Window end (YYYY-MM-DD, blank for all dates)")
        .with_initial_text(&flow.draft.expense_end)
        .allow_empty(true)
        .interact_text()?;
    let goal: String = Input::with_theme(&theme)
        .with_prompt("Monthly spend goal (blank for none)")
        .allow_empty(true)
        .interact_text()?;
    flow.draft.expense_start = start.trim().to_string();
    flow.draft.expense_end = end.trim().to_string();
    flow.draft.monthly_goal = parse_amount(&goal);

    loop {
        if !flow.draft.transactions.is_empty() {
            println!(
                "  {} {} draft expense(s)",
                ctx.icon(Icon::Arrow),
                flow.draft.transactions.len(),
            );
        }
        match step_nav(ctx, flow, &["Add an expense"])? {
            Nav::Extra(_) => {
                let transaction = prompt_draft_transaction(ctx)?;
                flow.draft.transactions.push(transaction);
            }
            nav => return Ok(nav),
        }
    }
}

fn prompt_draft_transaction(ctx: &UiContext) -> Result<NewTransaction> {
    let theme = prompt_theme(ctx);
    let date: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .interact_text()?;
    let labels: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
    let category = ExpenseCategory::ALL[dialoguer::FuzzySelect::with_theme(&theme)
        .with_prompt("Category (type to filter)")
        .items(&labels)
        .default(0)
        .interact()?];
    let amount = parse_amount(
        &Input::<String>::with_theme(&theme)
            .with_prompt("Amount")
            .interact_text()?,
    );

    Ok(NewTransaction {
        date,
        description,
        category,
        amount,
        account_id: None,
    })
}

fn income_step(ctx: &UiContext, flow: &mut OnboardingFlow) -> Result<Nav> {
    println!("{}", ctx.dim("Every stream counts: salary, hourly work, fellowships."));
    println!("{}", ctx.dim("Continuing saves this step immediately; skipping saves nothing."));
    loop {
        for stream in &flow.draft.streams {
            println!(
                "  {} {} ({})",
                ctx.icon(Icon::Arrow),
                stream.name,
                stream.kind.label(),
            );
        }
        match step_nav(ctx, flow, &["Add an income stream"])? {
            Nav::Extra(_) => {
                let theme = prompt_theme(ctx);
                let name: String = Input::with_theme(&theme)
                    .with_prompt("Stream name")
                    .interact_text()?;
                let labels: Vec<&str> = IncomeKind::ALL.iter().map(|k| k.label()).collect();
                let kind = IncomeKind::ALL[Select::with_theme(&theme)
                    .with_prompt("Kind")
                    .items(&labels)
                    .default(0)
                    .interact()?];
                flow.draft.streams.push(NewIncomeStream {
                    name,
                    kind,
                    is_active: true,
                });
            }
            nav => return Ok(nav),
        }
    }
}

fn schedule_step(ctx: &UiContext, flow: &OnboardingFlow, workbook: &Workbook) -> Result<Nav> {
    print!("{}", render_schedule_overview(ctx, workbook));
    loop {
        match step_nav(ctx, flow, &[])? {
            Nav::Extra(_) => continue,
            nav => return Ok(nav),
        }
    }
}

pub(crate) fn render_schedule_overview(ctx: &UiContext, workbook: &Workbook) -> String {
    let mut out = String::new();
    out.push_str(&ctx.dim("A ready-made routine ships with the workbook:"));
    out.push('\n');
    for frequency in Frequency::ALL {
        let count = workbook
            .schedule_items()
            .iter()
            .filter(|i| i.frequency == frequency)
            .count();
        out.push_str(&format!(
            "  {} {}  {}\n",
            ctx.icon(Icon::Arrow),
            frequency.label(),
            ctx.dim(&format!("{count} task(s)")),
        ));
    }
    out.push_str(&ctx.dim("Check tasks off later with `waypoint schedule`."));
    out.push('\n');
    out
}

fn fund_step(ctx: &UiContext, flow: &mut OnboardingFlow) -> Result<Nav> {
    println!(
        "{}",
        ctx.dim("Size the fund from scenarios that could actually hit you, not a rule of thumb.")
    );
    loop {
        let target = metrics::emergency_fund_target(&flow.draft.scenarios);
        println!("  {} Draft target {}", ctx.icon(Icon::Arrow), format_currency(target));
        match step_nav(ctx, flow, &["Choose scenarios and amounts"])? {
            Nav::Extra(_) => prompt_scenarios(ctx, flow)?,
            nav => return Ok(nav),
        }
    }
}

fn prompt_scenarios(ctx: &UiContext, flow: &mut OnboardingFlow) -> Result<()> {
    let theme = prompt_theme(ctx);
    let labels: Vec<String> = flow.draft.scenarios.iter().map(|s| s.label.clone()).collect();
    let defaults: Vec<bool> = flow.draft.scenarios.iter().map(|s| s.enabled).collect();
    let checked = MultiSelect::with_theme(&theme)
        .with_prompt("Which could happen to you? (space toggles, enter confirms)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let ids: Vec<String> = flow.draft.scenarios.iter().map(|s| s.id.clone()).collect();
    for (index, id) in ids.iter().enumerate() {
        let enable = checked.contains(&index);
        if flow.draft.scenarios[index].enabled != enable {
            flow.draft.toggle_scenario(id);
        }
    }

    for index in 0..flow.draft.scenarios.len() {
        let scenario = flow.draft.scenarios[index].clone();
        if !scenario.enabled {
            continue;
        }
        if !scenario.example_hint.is_empty() {
            println!("{}", ctx.dim(&scenario.example_hint));
        }
        let typed: String = Input::with_theme(&theme)
            .with_prompt(format!("{} amount", scenario.label))
            .default(format!("{:.2}", scenario.amount))
            .interact_text()?;
        flow.draft.set_scenario_amount(&scenario.id, parse_amount(&typed));
    }
    Ok(())
}

pub(crate) fn render_done_summary(ctx: &UiContext, flow: &OnboardingFlow) -> String {
    let draft = &flow.draft;
    let accounts = draft.all_accounts().count();

    let mut panel = Panel::with_title(ctx.bold("Ready to save")).style(PanelStyle::Success);
    panel.add_line(&format!("{} goal(s)", draft.goals.len()));
    panel.add_line(&format!(
        "{} account(s), net worth {}",
        accounts,
        format_currency(draft.net_worth_preview()),
    ));
    panel.add_line(&format!(
        "Emergency fund target {}",
        format_currency(metrics::emergency_fund_target(&draft.scenarios)),
    ));
    panel.add_empty();
    panel.add_line(&ctx.dim("Expense and income steps were saved when you continued past them."));
    panel.render(ctx.color, ctx.unicode)
}
