//! `waypoint institutions` - the research tables: institution rates,
//! index funds, and card offers.
//!
//! Every rate and fee column is a free string persisted exactly as
//! typed. These are notes for comparison shopping, not live data.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use waypoint::domain::entities::{NewCardComparison, NewInstitutionRow, NewSecurityReference};
use waypoint::domain::value_objects::InstitutionKind;
use waypoint::Workbook;

use crate::cli::InstitutionsAction;
use crate::commands::prompt_theme;
use crate::ui::theme::Icon;
use crate::ui::{Align, Table, UiContext};

pub fn cmd_institutions(
    ctx: &UiContext,
    workbook: &mut Workbook,
    action: Option<InstitutionsAction>,
) -> Result<()> {
    match action.unwrap_or(InstitutionsAction::List) {
        InstitutionsAction::List => {
            print!("{}", render_institutions(ctx, workbook));
            Ok(())
        }
        InstitutionsAction::Add => add_row(ctx, workbook),
        InstitutionsAction::Delete { id } => delete_row(ctx, workbook, id),
    }
}

pub(crate) fn render_institutions(ctx: &UiContext, workbook: &Workbook) -> String {
    let institutions = workbook.institutions();
    let securities = workbook.securities();
    let cards = workbook.card_comparisons();
    if institutions.is_empty() && securities.is_empty() && cards.is_empty() {
        return format!(
            "{}\n{}\n",
            ctx.dim("No research notes yet."),
            ctx.dim("Add a row with `waypoint institutions add`."),
        );
    }

    let mut out = String::new();
    if !institutions.is_empty() {
        out.push_str(&ctx.bold("Institutions"));
        out.push('\n');
        let mut table = Table::new(&[
            ("", Align::Left),
            ("Name", Align::Left),
            ("Kind", Align::Left),
            ("Checking", Align::Left),
            ("Savings", Align::Left),
            ("12mo CD", Align::Left),
            ("Fees", Align::Left),
        ]);
        for row in institutions {
            let used = if row.is_currently_used {
                ctx.icon(Icon::Done)
            } else {
                " ".to_string()
            };
            table.add_row(vec![
                used,
                row.name.clone(),
                row.kind.label().to_string(),
                dash_if_blank(&row.checking_apy),
                dash_if_blank(&row.savings_apy),
                dash_if_blank(&row.cd_12mo),
                dash_if_blank(&row.fees_minimums),
            ]);
        }
        out.push_str(&table.render(ctx.color, ctx.unicode));
        out.push_str(&ctx.dim("APY columns as published when noted."));
        out.push_str("\n\n");
    }

    if !securities.is_empty() {
        out.push_str(&ctx.bold("Funds"));
        out.push('\n');
        let mut table = Table::new(&[
            ("Ticker", Align::Left),
            ("Name", Align::Left),
            ("Expense ratio", Align::Left),
            ("Notes", Align::Left),
        ]);
        for security in securities {
            table.add_row(vec![
                security.ticker.clone(),
                security.name.clone(),
                dash_if_blank(&security.expense_ratio),
                dash_if_blank(&security.notes),
            ]);
        }
        out.push_str(&table.render(ctx.color, ctx.unicode));
        out.push('\n');
    }

    if !cards.is_empty() {
        out.push_str(&ctx.bold("Card offers"));
        out.push('\n');
        let mut table = Table::new(&[
            ("Card", Align::Left),
            ("Likelihood", Align::Left),
            ("Annual fee", Align::Left),
            ("Rewards", Align::Left),
            ("APR", Align::Left),
        ]);
        for card in cards {
            table.add_row(vec![
                card.card.clone(),
                dash_if_blank(&card.likelihood),
                dash_if_blank(&card.annual_fee),
                dash_if_blank(&card.reward_type),
                dash_if_blank(&card.apr),
            ]);
        }
        out.push_str(&table.render(ctx.color, ctx.unicode));
    }
    out
}

fn dash_if_blank(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

const TABLES: [&str; 3] = ["Institution", "Fund", "Card offer"];

fn add_row(ctx: &UiContext, workbook: &mut Workbook) -> Result<()> {
    let theme = prompt_theme(ctx);
    let table = Select::with_theme(&theme)
        .with_prompt("Add to which table?")
        .items(&TABLES)
        .default(0)
        .interact()?;

    match table {
        0 => {
            let name: String = Input::with_theme(&theme)
                .with_prompt("Institution name")
                .interact_text()?;
            let labels: Vec<&str> = InstitutionKind::ALL.iter().map(|k| k.label()).collect();
            let kind = InstitutionKind::ALL[Select::with_theme(&theme)
                .with_prompt("Kind")
                .items(&labels)
                .default(0)
                .interact()?];
            let is_currently_used = Confirm::with_theme(&theme)
                .with_prompt("Do you bank here today?")
                .default(false)
                .interact()?;

            workbook.add_institution(NewInstitutionRow {
                name: name.clone(),
                kind,
                fees_minimums: prompt_note(&theme, "Fees / minimums")?,
                checking_apy: prompt_note(&theme, "Checking APY")?,
                savings_apy: prompt_note(&theme, "Savings APY")?,
                cd_6mo: prompt_note(&theme, "6mo CD APY")?,
                cd_12mo: prompt_note(&theme, "12mo CD APY")?,
                cd_24mo: prompt_note(&theme, "24mo CD APY")?,
                pros: prompt_note(&theme, "Pros")?,
                cons: prompt_note(&theme, "Cons")?,
                is_currently_used,
            });
            println!("{} Added institution \"{}\"", ctx.icon(Icon::Success), name);
        }
        1 => {
            let ticker: String = Input::with_theme(&theme)
                .with_prompt("Ticker")
                .interact_text()?;
            workbook.add_security(NewSecurityReference {
                ticker: ticker.clone(),
                name: prompt_note(&theme, "Fund name")?,
                expense_ratio: prompt_note(&theme, "Expense ratio")?,
                notes: prompt_note(&theme, "Notes")?,
            });
            println!("{} Added fund \"{}\"", ctx.icon(Icon::Success), ticker);
        }
        _ => {
            let card: String = Input::with_theme(&theme)
                .with_prompt("Card name")
                .interact_text()?;
            workbook.add_card_comparison(NewCardComparison {
                card: card.clone(),
                likelihood: prompt_note(&theme, "Approval likelihood")?,
                annual_fee: prompt_note(&theme, "Annual fee")?,
                reward_type: prompt_note(&theme, "Reward type")?,
                apr: prompt_note(&theme, "APR")?,
                promo_details: prompt_note(&theme, "Promo details")?,
            });
            println!("{} Added card offer \"{}\"", ctx.icon(Icon::Success), card);
        }
    }
    Ok(())
}

/// Blank stays blank: these columns render as "-" but persist as typed.
fn prompt_note(theme: &crate::ui::theme::WaypointTheme, prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(format!("{prompt} (blank to skip)"))
        .allow_empty(true)
        .interact_text()?
        .trim()
        .to_string())
}

/// Deletion works across all three tables; the id decides which one the
/// row actually lives in.
fn delete_row(ctx: &UiContext, workbook: &mut Workbook, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            let mut labels = Vec::new();
            let mut ids = Vec::new();
            for row in workbook.institutions() {
                labels.push(format!("{} (institution)", row.name));
                ids.push(row.id.clone());
            }
            for security in workbook.securities() {
                labels.push(format!("{} (fund)", security.ticker));
                ids.push(security.id.clone());
            }
            for card in workbook.card_comparisons() {
                labels.push(format!("{} (card offer)", card.card));
                ids.push(card.id.clone());
            }
            if labels.is_empty() {
                println!("{}", ctx.dim("No research rows to delete."));
                return Ok(());
            }
            let Some(index) = Select::with_theme(&prompt_theme(ctx))
                .with_prompt("Delete which row?")
                .items(&labels)
                .interact_opt()?
            else {
                return Ok(());
            };
            ids[index].clone()
        }
    };

    if let Some(row) = workbook.institutions().iter().find(|r| r.id == id) {
        let name = row.name.clone();
        workbook.delete_institution(&id);
        println!("{} Deleted institution \"{}\"", ctx.icon(Icon::Success), name);
    } else if let Some(security) = workbook.securities().iter().find(|s| s.id == id) {
        let ticker = security.ticker.clone();
        workbook.delete_security(&id);
        println!("{} Deleted fund \"{}\"", ctx.icon(Icon::Success), ticker);
    } else if let Some(card) = workbook.card_comparisons().iter().find(|c| c.id == id) {
        let name = card.card.clone();
        workbook.delete_card_comparison(&id);
        println!("{} Deleted card offer \"{}\"", ctx.icon(Icon::Success), name);
    } else {
        println!("{} No research row with ID {}", ctx.icon(Icon::Warning), id);
    }
    Ok(())
}
