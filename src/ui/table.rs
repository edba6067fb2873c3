use unicode_width::UnicodeWidthStr;

use crate::ui::panel::visible_width;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone)]
struct Column {
    header: &'static str,
    align: Align,
}

/// Column-aligned listing with a dim header row and rule.
///
/// Cells may carry ANSI codes; padding is computed from the stripped width.
/// A left-aligned final column is left unpadded so lines never end in
/// trailing spaces.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(header, align)| Column {
                    header,
                    align: *align,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(visible_width(cell));
                }
            }
        }

        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c.header, *w, c.align))
            .collect();
        out.push_str(&theme::paint(
            header.join("  ").trim_end(),
            theme::colors::DIM,
            supports_color,
        ));
        out.push('\n');

        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let rule = if supports_unicode {
            theme::borders::HORIZONTAL
        } else {
            theme::borders_ascii::HORIZONTAL
        }
        .repeat(rule_width);
        out.push_str(&theme::paint(&rule, theme::colors::DIM, supports_color));
        out.push('\n');

        let last = self.columns.len().saturating_sub(1);
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let column = &self.columns[i];
                    if i == last && column.align == Align::Left {
                        cell.clone()
                    } else {
                        pad(cell, widths[i], column.align)
                    }
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }
        out
    }
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(cell)));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_aligns_columns() {
        let mut t = Table::new(&[
            ("Goal", Align::Left),
            ("Saved", Align::Right),
            ("Target", Align::Right),
        ]);
        t.add_row(vec![
            "Emergency fund".to_string(),
            "$350.00".to_string(),
            "$12,000.00".to_string(),
        ]);
        t.add_row(vec![
            "Laptop".to_string(),
            "$80.00".to_string(),
            "$1,500.00".to_string(),
        ]);

        insta::assert_snapshot!(t.render(false, true), @r"
        Goal              Saved      Target
        ───────────────────────────────────
        Emergency fund  $350.00  $12,000.00
        Laptop           $80.00   $1,500.00
        ");
    }

    #[test]
    fn test_table_pads_by_visible_width_of_painted_cells() {
        let mut plain = Table::new(&[("A", Align::Left), ("B", Align::Left)]);
        plain.add_row(vec!["x".to_string(), "tail".to_string()]);

        let mut painted = Table::new(&[("A", Align::Left), ("B", Align::Left)]);
        painted.add_row(vec![
            theme::paint("x", theme::colors::SUCCESS, true),
            "tail".to_string(),
        ]);

        let plain_row = plain.render(false, true).lines().nth(2).unwrap().to_string();
        let painted_row = painted
            .render(false, true)
            .lines()
            .nth(2)
            .unwrap()
            .to_string();
        assert_eq!(visible_width(&plain_row), visible_width(&painted_row));
    }

    #[test]
    fn test_table_rule_uses_ascii_without_unicode() {
        let mut t = Table::new(&[("H", Align::Left)]);
        t.add_row(vec!["v".to_string()]);
        let rendered = t.render(false, false);
        assert!(rendered.lines().nth(1).unwrap().starts_with('-'));
    }

    #[test]
    fn test_table_len_counts_rows() {
        let mut t = Table::new(&[("H", Align::Left)]);
        assert!(t.is_empty());
        t.add_row(vec!["v".to_string()]);
        assert_eq!(t.len(), 1);
    }
}
