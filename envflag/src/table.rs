//! Plain light-bordered tables for diagnostic output

use unicode_width::UnicodeWidthStr;

const TOP_LEFT: &str = "┌";
const TOP_RIGHT: &str = "┐";
const BOTTOM_LEFT: &str = "└";
const BOTTOM_RIGHT: &str = "┘";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";
const LEFT_T: &str = "├";
const RIGHT_T: &str = "┤";
const TOP_T: &str = "┬";
const BOTTOM_T: &str = "┴";
const CROSS: &str = "┼";

#[derive(Debug, Default, Clone)]
pub(crate) struct Table {
    title: Option<String>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(|h| clean(&h.into())).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(clean(&title.into()));
        self
    }

    pub(crate) fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut cells: Vec<String> = row.into_iter().map(|c| clean(&c.to_string())).collect();
        cells.resize(self.header.len(), String::new());
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        // Widen the last column when the title does not fit.
        if let Some(title) = &self.title {
            let inner = inner_width(&widths);
            let needed = title.width() + 2;
            if needed > inner {
                if let Some(last) = widths.last_mut() {
                    *last += needed - inner;
                }
            }
        }
        widths
    }

    pub(crate) fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        if let Some(title) = &self.title {
            let inner = inner_width(&widths);
            push_line(&mut out, TOP_LEFT, &HORIZONTAL.repeat(inner), TOP_RIGHT);
            push_line(
                &mut out,
                VERTICAL,
                &format!(" {}", pad(title, inner - 1)),
                VERTICAL,
            );
            push_rule(&mut out, &widths, LEFT_T, TOP_T, RIGHT_T);
        } else {
            push_rule(&mut out, &widths, TOP_LEFT, TOP_T, TOP_RIGHT);
        }

        push_cells(&mut out, &widths, &self.header);
        push_rule(&mut out, &widths, LEFT_T, CROSS, RIGHT_T);
        for row in &self.rows {
            push_cells(&mut out, &widths, row);
        }
        push_rule(&mut out, &widths, BOTTOM_LEFT, BOTTOM_T, BOTTOM_RIGHT);

        out
    }
}

fn inner_width(widths: &[usize]) -> usize {
    widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1)
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

// Line breaks and tabs would tear the borders apart.
fn clean(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn push_line(out: &mut String, left: &str, body: &str, right: &str) {
    out.push_str(left);
    out.push_str(body);
    out.push_str(right);
    out.push('\n');
}

fn push_rule(out: &mut String, widths: &[usize], left: &str, join: &str, right: &str) {
    let body = widths
        .iter()
        .map(|w| HORIZONTAL.repeat(w + 2))
        .collect::<Vec<_>>()
        .join(join);
    push_line(out, left, &body, right);
}

fn push_cells(out: &mut String, widths: &[usize], cells: &[String]) {
    let body = widths
        .iter()
        .zip(cells)
        .map(|(w, cell)| format!(" {} ", pad(cell, *w)))
        .collect::<Vec<_>>()
        .join(VERTICAL);
    push_line(out, VERTICAL, &body, VERTICAL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_title() {
        let mut table = Table::new(["A", "Long"]);
        table.push_row(["xyz", "1"]);

        let expected = "\
┌─────┬──────┐
│ A   │ Long │
├─────┼──────┤
│ xyz │ 1    │
└─────┴──────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_with_title() {
        let mut table = Table::new(["K", "V"]).title("Flags list");
        table.push_row(["a", "b"]);

        let expected = "\
┌────────────┐
│ Flags list │
├───┬────────┤
│ K │ V      │
├───┼────────┤
│ a │ b      │
└───┴────────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_lines_have_equal_width() {
        let mut table = Table::new(["Name", "Value"]).title("Base Flag");
        table.push_row(["HOST", "日本語"]);
        table.push_row(["PORT", "8080"]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
    }

    #[test]
    fn test_short_rows_are_padded_and_control_chars_cleaned() {
        let mut table = Table::new(["A", "B"]);
        table.push_row(["line\nbreak"]);

        let rendered = table.render();
        assert!(rendered.contains("line break"));
        assert_eq!(rendered.lines().count(), 5);
    }
}
