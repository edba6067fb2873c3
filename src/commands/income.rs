//! `waypoint income` - income streams, paycheck verification, and
//! estimated tax payments.
//!
//! Paycheck recording is the verification workflow: the expected net is
//! derived from the withholding lines and compared against what the bank
//! actually received, and the discrepancy is shown before the entry is
//! committed.

use anyhow::Result;
use dialoguer::{Input, Select};

use waypoint::domain::entities::{
    NewEstimatedTaxPayment, NewIncomeStream, NewPaycheckEntry, PaycheckEntry,
};
use waypoint::domain::services::metrics;
use waypoint::domain::value_objects::{IncomeKind, Jurisdiction};
use waypoint::presentation::format::{format_currency, format_currency_signed, format_date};
use waypoint::Workbook;

use crate::cli::IncomeAction;
use crate::commands::{optional, parse_amount, prompt_theme};
use crate::ui::theme::Icon;
use crate::ui::{Align, Table, UiContext};

const PAYCHECK_LIMIT: usize = 8;

pub fn cmd_income(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<IncomeAction>,
) -> Result<()> {
    match action.unwrap_or(IncomeAction::List) {
        IncomeAction::List => {
            print!("{}", render_income(ctx, workbook));
            Ok(())
        }
        IncomeAction::Add => add_stream(ctx, workbook),
        IncomeAction::Delete { id } => delete_stream(ctx, workbook, id),
        IncomeAction::Paycheck => record_paycheck(ctx, workbook),
        IncomeAction::Tax => record_tax_payment(ctx, workbook),
    }
}

pub(crate) fn render_income(ctx: &UiContext, workbook: &Workbook) -> String {
    let streams = workbook.income_streams();
    if streams.is_empty() {
        return format!(
            "{}\n{}\n",
            ctx.dim("No income streams yet."),
            ctx.dim("Add one with `waypoint income add`."),
        );
    }

    let mut out = String::new();
    out.push_str(&ctx.bold("Income streams"));
    out.push('\n');
    let mut table = Table::new(&[
        ("", Align::Left),
        ("Stream", Align::Left),
        ("Kind", Align::Left),
    ]);
    for stream in streams {
        let icon = if stream.is_active {
            Icon::Done
        } else {
            Icon::Pending
        };
        table.add_row(vec![
            ctx.icon(icon),
            stream.name.clone(),
            stream.kind.label().to_string(),
        ]);
    }
    out.push_str(&table.render(ctx.color, ctx.unicode));
    out.push('\n');

    let paychecks = workbook.paycheck_entries();
    if !paychecks.is_empty() {
        out.push_str(&ctx.bold("Recent paychecks"));
        out.push('\n');
        let mut table = Table::new(&[
            ("Date", Align::Left),
            ("Stream", Align::Left),
            ("Gross", Align::Right),
            ("Expected", Align::Right),
            ("Received", Align::Right),
            ("Diff", Align::Right),
        ]);
        // stored in insertion order; show the latest first
        for entry in paychecks.iter().rev().take(PAYCHECK_LIMIT) {
            let stream_name = streams
                .iter()
                .find(|s| s.id == entry.stream_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "(removed stream)".to_string());
            table.add_row(vec![
                format_date(&entry.paycheck_date),
                stream_name,
                format_currency(entry.gross_amount),
                format_currency(metrics::expected_net(entry)),
                format_currency(entry.received_net),
                render_discrepancy(ctx, metrics::discrepancy(entry)),
            ]);
        }
        out.push_str(&table.render(ctx.color, ctx.unicode));
        out.push('\n');
    }

    let payments = workbook.estimated_tax_payments();
    if !payments.is_empty() {
        out.push_str(&ctx.bold("Estimated tax payments"));
        out.push('\n');
        let mut table = Table::new(&[
            ("Date", Align::Left),
            ("To", Align::Left),
            ("Quarter", Align::Left),
            ("Amount", Align::Right),
        ]);
        for payment in payments {
            table.add_row(vec![
                format_date(&payment.date),
                payment.jurisdiction.label().to_string(),
                payment.quarter.clone().unwrap_or_else(|| "-".to_string()),
                format_currency(payment.amount),
            ]);
        }
        out.push_str(&table.render(ctx.color, ctx.unicode));
    }
    out
}

/// Zero renders dim, a shortfall in red with the amount, an overage in
/// green. A cent either way matters here: this is the number that catches
/// payroll mistakes.
fn render_discrepancy(ctx: &UiContext, diff: f64) -> String {
    if diff.abs() < 0.005 {
        ctx.dim("$0.00")
    } else if diff < 0.0 {
        ctx.error(&format_currency_signed(diff))
    } else {
        ctx.success(&format_currency_signed(diff))
    }
}

fn add_stream(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
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

    workbook.add_income_stream(NewIncomeStream {
        name: name.clone(),
        kind,
        is_active: true,
    });
    println!("{} Added income stream \"{}\"", ctx.icon(Icon::Success), name);
    if kind.is_non_withholding() {
        println!(
            "{}",
            ctx.dim("No withholding at the source: record estimated payments with `waypoint income tax`.")
        );
    }
    Ok(())
}

fn delete_stream(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            if workbook.income_streams().is_empty() {
                println!("{}", ctx.dim("No income streams to delete."));
                return Ok(());
            }
            let labels: Vec<String> = workbook
                .income_streams()
                .iter()
                .map(|s| format!("{} ({})", s.name, s.kind.label()))
                .collect();
            let Some(index) = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Delete which stream?")
                .items(&labels)
                .interact_opt()?
            else {
                return Ok(());
            };
            workbook.income_streams()[index].id.clone()
        }
    };

    match workbook.income_streams().iter().find(|s| s.id == id) {
        Some(stream) => {
            let name = stream.name.clone();
            workbook.delete_income_stream(&id);
            println!("{} Deleted income stream \"{}\"", ctx.icon(Icon::Success), name);
            println!("{}", ctx.dim("Paycheck history is kept."));
        }
        None => println!("{} No income stream with ID {}", ctx.icon(Icon::Warning), id),
    }
    Ok(())
}

fn record_paycheck(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    if workbook.income_streams().is_empty() {
        println!(
            "{} Add an income stream first: `waypoint income add`",
            ctx.icon(Icon::Warning)
        );
        return Ok(());
    }

    let theme = prompt_theme(ctx);
    let labels: Vec<String> = workbook
        .income_streams()
        .iter()
        .map(|s| format!("{} ({})", s.name, s.kind.label()))
        .collect();
    let index = Select::with_theme(&theme)
        .with_prompt("Which stream?")
        .items(&labels)
        .default(0)
        .interact()?;
    let stream = &workbook.income_streams()[index];
    let stream_id = stream.id.clone();
    let hourly = stream.kind == IncomeKind::Hourly;

    let period_start: String = Input::with_theme(&theme)
        .with_prompt("Period start (YYYY-MM-DD)")
        .interact_text()?;
    let period_end: String = Input::with_theme(&theme)
        .with_prompt("Period end (YYYY-MM-DD)")
        .interact_text()?;
    let paycheck_date: String = Input::with_theme(&theme)
        .with_prompt("Pay date (YYYY-MM-DD)")
        .default(workbook.today())
        .interact_text()?;

    let (hours_worked, hourly_rate, gross_default) = if hourly {
        let hours = prompt_number(&theme, "Hours worked")?;
        let rate = prompt_number(&theme, "Hourly rate")?;
        (Some(hours), Some(rate), Some(hours * rate))
    } else {
        (None, None, None)
    };

    let gross_amount = match gross_default {
        Some(computed) => parse_amount(
            &Input::<String>::with_theme(&theme)
                .with_prompt("Gross amount")
                .default(format!("{computed:.2}"))
                .interact_text()?,
        ),
        None => prompt_number(&theme, "Gross amount")?,
    };

    let federal_wh = prompt_withholding(&theme, "Federal withholding")?;
    let fica = prompt_withholding(&theme, "FICA / Social Security")?;
    let medicare_ee = prompt_withholding(&theme, "Medicare")?;
    let state_wh = prompt_withholding(&theme, "State withholding")?;
    let retirement = prompt_withholding(&theme, "Retirement contributions")?;
    let other_pre_tax = prompt_withholding(&theme, "Other pre-tax deductions")?;
    let received_net = prompt_number(&theme, "Net amount received")?;

    // Preview entry, never stored: the id stays empty.
    let preview = PaycheckEntry {
        id: String::new(),
        stream_id: stream_id.clone(),
        period_start: period_start.clone(),
        period_end: period_end.clone(),
        paycheck_date: paycheck_date.clone(),
        gross_amount,
        hours_worked,
        hourly_rate,
        federal_wh,
        fica,
        medicare_ee,
        state_wh,
        retirement,
        other_pre_tax,
        received_net,
    };
    let expected = metrics::expected_net(&preview);
    let diff = metrics::discrepancy(&preview);

    println!(
        "Expected net {}, received {} ({})",
        format_currency(expected),
        format_currency(received_net),
        render_discrepancy(ctx, diff),
    );
    if diff.abs() >= 0.005 {
        println!(
            "{}",
            ctx.dim("A nonzero difference usually means a withholding line was missed or payroll made a mistake.")
        );
    }

    workbook.add_paycheck_entry(NewPaycheckEntry {
        stream_id,
        period_start,
        period_end,
        paycheck_date,
        gross_amount,
        hours_worked,
        hourly_rate,
        federal_wh,
        fica,
        medicare_ee,
        state_wh,
        retirement,
        other_pre_tax,
        received_net,
    });
    println!("{} Recorded paycheck", ctx.icon(Icon::Success));
    Ok(())
}

fn record_tax_payment(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let theme = prompt_theme(ctx);
    let jurisdictions = [Jurisdiction::Federal, Jurisdiction::State];
    let labels: Vec<&str> = jurisdictions.iter().map(|j| j.label()).collect();
    let jurisdiction = jurisdictions[Select::with_theme(&theme)
        .with_prompt("Paid to")
        .items(&labels)
        .default(0)
        .interact()?];

    let date: String = Input::with_theme(&theme)
        .with_prompt("Payment date (YYYY-MM-DD)")
        .default(workbook.today())
        .interact_text()?;
    let amount = prompt_number(&theme, "Amount")?;
    let quarter = optional(
        Input::<String>::with_theme(&theme)
            .with_prompt("Quarter, e.g. Q2 2024 (blank to skip)")
            .allow_empty(true)
            .interact_text()?,
    );
    let confirmation_number = optional(
        Input::<String>::with_theme(&theme)
            .with_prompt("Confirmation number (blank to skip)")
            .allow_empty(true)
            .interact_text()?,
    );

    workbook.add_estimated_tax_payment(NewEstimatedTaxPayment {
        jurisdiction,
        date,
        amount,
        confirmation_number,
        quarter,
    });
    println!(
        "{} Recorded {} estimated tax payment of {}",
        ctx.icon(Icon::Success),
        jurisdiction.label(),
        format_currency(amount),
    );
    Ok(())
}

fn prompt_number(theme: &crate::ui::theme::WaypointTheme, prompt: &str) -> Result<f64> {
    Ok(parse_amount(
        &Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .interact_text()?,
    ))
}

/// Withholding prompts default to blank, which parses to zero.
fn prompt_withholding(theme: &crate::ui::theme::WaypointTheme, prompt: &str) -> Result<f64> {
    Ok(parse_amount(
        &Input::<String>::with_theme(theme)
            .with_prompt(format!("{prompt} (blank for 0)"))
            .allow_empty(true)
            .interact_text()?,
    ))
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
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            )),
        )
        .unwrap()
    }

    fn paycheck(stream_id: &str, gross: f64, federal: f64, received: f64) -> NewPaycheckEntry {
        NewPaycheckEntry {
            stream_id: stream_id.to_string(),
            period_start: "2024-04-01".to_string(),
            period_end: "2024-04-15".to_string(),
            paycheck_date: "2024-04-19".to_string(),
            gross_amount: gross,
            federal_wh: federal,
            received_net: received,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_income_shows_discrepancy() {
        let mut workbook = test_workbook();
        workbook.add_income_stream(NewIncomeStream {
            name: "University RA".to_string(),
            kind: IncomeKind::W2,
            is_active: true,
        });
        let stream_id = workbook.income_streams()[0].id.clone();
        // expected net 1800, received 1750: fifty dollars short
        workbook.add_paycheck_entry(paycheck(&stream_id, 2000.0, 200.0, 1750.0));

        let rendered = render_income(&test_ctx(), &workbook);
        assert!(rendered.contains("University RA"));
        assert!(rendered.contains("W-2 (Salary)"));
        assert!(rendered.contains("$1,800.00"));
        assert!(rendered.contains("-$50.00"));
    }

    #[test]
    fn test_render_income_orphan_paycheck_keeps_row() {
        let mut workbook = test_workbook();
        workbook.add_income_stream(NewIncomeStream {
            name: "Tutoring".to_string(),
            kind: IncomeKind::Hourly,
            is_active: true,
        });
        let stream_id = workbook.income_streams()[0].id.clone();
        workbook.add_paycheck_entry(paycheck(&stream_id, 400.0, 0.0, 400.0));
        workbook.delete_income_stream(&stream_id);
        workbook.add_income_stream(NewIncomeStream {
            name: "Fellowship".to_string(),
            kind: IncomeKind::Fellowship,
            is_active: true,
        });

        let rendered = render_income(&test_ctx(), &workbook);
        assert!(rendered.contains("(removed stream)"));
        assert!(rendered.contains("$400.00"));
    }

    #[test]
    fn test_render_income_tax_payments_section() {
        let mut workbook = test_workbook();
        workbook.add_income_stream(NewIncomeStream {
            name: "NRSA Fellowship".to_string(),
            kind: IncomeKind::Fellowship,
            is_active: true,
        });
        workbook.add_estimated_tax_payment(NewEstimatedTaxPayment {
            jurisdiction: Jurisdiction::Federal,
            date: "2024-04-15".to_string(),
            amount: 850.0,
            confirmation_number: None,
            quarter: Some("Q1 2024".to_string()),
        });

        let rendered = render_income(&test_ctx(), &workbook);
        assert!(rendered.contains("Estimated tax payments"));
        assert!(rendered.contains("Federal"));
        assert!(rendered.contains("Q1 2024"));
        assert!(rendered.contains("$850.00"));
    }
}
