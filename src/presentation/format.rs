//! Display formatting
//!
//! Everything renders en-US: dollar amounts with comma grouping and two
//! decimals, short dates like "Jan 5, 2024". Date formatters pass
//! unparseable input through unchanged, since the snapshot never
//! validates what was typed.

use chrono::NaiveDate;

/// `1234.5` -> `$1,234.50`, negative values lead with the minus
pub fn format_currency(value: f64) -> String {
    let formatted = format!("${}", group_thousands(value.abs()));
    if value < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Explicit sign for deltas: `+$120.00`, `-$43.50`. Zero counts as
/// positive.
pub fn format_currency_signed(value: f64) -> String {
    let formatted = format!("${}", group_thousands(value.abs()));
    if value >= 0.0 {
        format!("+{formatted}")
    } else {
        format!("-{formatted}")
    }
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// ISO `YYYY-MM-DD` -> `Jan 5, 2024`
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Month key `YYYY-MM` -> `January 2024`
pub fn format_month_year(month: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %Y").to_string(),
        Err(_) => month.to_string(),
    }
}

fn group_thousands(abs: f64) -> String {
    let fixed = format!("{abs:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{frac_part}")
}
