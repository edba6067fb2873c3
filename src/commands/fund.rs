//! `waypoint fund` - the emergency fund calculator.
//!
//! Eleven seeded scenarios; each enabled one contributes its amount to
//! the target. Coverage compares the target against cash on hand across
//! cash accounts.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use waypoint::domain::services::metrics;
use waypoint::presentation::format::format_currency;
use waypoint::Workbook;

use crate::cli::FundAction;
use crate::commands::{parse_amount, prompt_theme};
use crate::ui::theme::Icon;
use crate::ui::UiContext;

pub fn cmd_fund(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<FundAction>,
) -> Result<()> {
    match action.unwrap_or(FundAction::List) {
        FundAction::List => {
            print!("{}", render_fund(ctx, workbook));
            Ok(())
        }
        FundAction::Toggle { id } => toggle_scenario(ctx, workbook, id),
        FundAction::Amount { id, amount } => set_amount(ctx, workbook, id, amount),
        FundAction::Reset => reset_scenarios(ctx, workbook),
    }
}

pub(crate) fn render_fund(ctx: &UiContext, workbook: &Workbook) -> String {
    let scenarios = workbook.emergency_fund_scenarios();
    let mut out = String::new();

    for scenario in scenarios {
        let icon = if scenario.enabled {
            ctx.icon(Icon::Done)
        } else {
            ctx.icon(Icon::Pending)
        };
        let amount = if scenario.enabled {
            format_currency(scenario.amount)
        } else {
            ctx.dim(&format_currency(scenario.amount))
        };
        out.push_str(&format!("{} {}  {}\n", icon, scenario.label, amount));
        if !scenario.example_hint.is_empty() {
            out.push_str(&format!("  {}\n", ctx.dim(&scenario.example_hint)));
        }
    }
    out.push('\n');

    let target = metrics::emergency_fund_target(scenarios);
    let cash = metrics::total_cash(workbook.accounts());
    out.push_str(&format!("{}  {}\n", ctx.dim("Target"), format_currency(target)));
    out.push_str(&format!("{}  {}\n", ctx.dim("Cash  "), format_currency(cash)));
    if target <= 0.0 {
        out.push_str(&ctx.dim("Enable scenarios to build a target."));
        out.push('\n');
    } else if cash >= target {
        out.push_str(&format!(
            "{} Covered, with {} to spare\n",
            ctx.icon(Icon::Success),
            format_currency(cash - target),
        ));
    } else {
        out.push_str(&format!(
            "{} {} short\n",
            ctx.icon(Icon::Warning),
            format_currency(target - cash),
        ));
    }
    out
}

fn pick_scenario(ctx: &UiContext, workbook: &Workbook, prompt: &str) -> Result<Option<String>> {
    let labels: Vec<String> = workbook
        .emergency_fund_scenarios()
        .iter()
        .map(|s| {
            let state = if s.enabled { "on" } else { "off" };
            format!("{} ({}, {})", s.label, format_currency(s.amount), state)
        })
        .collect();
    let Some(index) = Select::with_theme(&prompt_theme(ctx))
        .with_prompt(prompt)
        .items(&labels)
        .interact_opt()?
    else {
        return Ok(None);
    };
    Ok(Some(workbook.emergency_fund_scenarios()[index].id.clone()))
}

fn toggle_scenario(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => match pick_scenario(ctx, workbook, "Toggle which scenario?")? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    if !workbook
        .emergency_fund_scenarios()
        .iter()
        .any(|s| s.id == id)
    {
        println!("{} No scenario with ID {}", ctx.icon(Icon::Warning), id);
        return Ok(());
    }
    workbook.toggle_scenario(&id);

    let scenario = workbook
        .emergency_fund_scenarios()
        .iter()
        .find(|s| s.id == id)
        .cloned();
    if let Some(scenario) = scenario {
        let state = if scenario.enabled { "on" } else { "off" };
        println!(
            "{} \"{}\" is now {}, target {}",
            ctx.icon(Icon::Success),
            scenario.label,
            state,
            format_currency(metrics::emergency_fund_target(
                workbook.emergency_fund_scenarios()
            )),
        );
    }
    Ok(())
}

fn set_amount(
    ctx: &UiContext,
    workbook: &mut Workbook,
    id: Option<String>,
    amount: Option<f64>,
) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => match pick_scenario(ctx, workbook, "Size which scenario?")? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let Some(scenario) = workbook
        .emergency_fund_scenarios()
        .iter()
        .find(|s| s.id == id)
        .cloned()
    else {
        println!("{} No scenario with ID {}", ctx.icon(Icon::Warning), id);
        return Ok(());
    };

    let amount = match amount {
        Some(amount) => amount,
        None => {
            if !scenario.example_hint.is_empty() {
                println!("{}", ctx.dim(&scenario.example_hint));
            }
            parse_amount(
                &Input::<String>::with_theme(&prompt_theme(ctx))
                    .with_prompt("Amount")
                    .default(format!("{:.2}", scenario.amount))
                    .interact_text()?,
            )
        }
    };

    workbook.update_scenario_amount(&id, amount);
    println!(
        "{} \"{}\" sized at {}",
        ctx.icon(Icon::Success),
        scenario.label,
        format_currency(amount),
    );
    Ok(())
}

fn reset_scenarios(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let confirmed = Confirm::with_theme(&prompt_theme(ctx))
        .with_prompt("Reset all scenarios to the seeded defaults?")
        .default(false)
        .interact()?;
    if confirmed {
        workbook.reset_emergency_fund_scenarios();
        println!("{} Scenarios reset", ctx.icon(Icon::Success));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use waypoint::domain::entities::{AccountKind, NewAccount};
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
    fn test_render_fund_shows_shortfall() {
        let mut workbook = test_workbook();
        let id = workbook.emergency_fund_scenarios()[0].id.clone();
        if !workbook.emergency_fund_scenarios()[0].enabled {
            workbook.toggle_scenario(&id);
        }
        workbook.update_scenario_amount(&id, 3000.0);
        workbook.add_account(NewAccount {
            institution: "Ally".to_string(),
            nickname: "Savings".to_string(),
            last_four: None,
            balance: 1000.0,
            notes: None,
            kind: AccountKind::Cash {
                subtype: "Savings".to_string(),
                apy: None,
            },
        });

        let rendered = render_fund(&test_ctx(), &workbook);
        assert!(rendered.contains("$2,000.00 short"));
    }

    #[test]
    fn test_toggle_keeps_amount_for_reenable() {
        let mut workbook = test_workbook();
        let id = workbook.emergency_fund_scenarios()[0].id.clone();
        workbook.update_scenario_amount(&id, 1234.0);

        workbook.toggle_scenario(&id);
        workbook.toggle_scenario(&id);
        assert_eq!(workbook.emergency_fund_scenarios()[0].amount, 1234.0);
    }

    #[test]
    fn test_reset_restores_seeded_amounts() {
        let mut workbook = test_workbook();
        let seeded = workbook.emergency_fund_scenarios().to_vec();
        let id = seeded[0].id.clone();
        workbook.update_scenario_amount(&id, 99999.0);

        workbook.reset_emergency_fund_scenarios();
        assert_eq!(workbook.emergency_fund_scenarios(), seeded.as_slice());
    }
}
