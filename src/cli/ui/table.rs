use crate::cli::output::current_preferences;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Plain-text table with a header row, a rule, and an optional footer row.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub footer: Option<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn set_footer(&mut self, row: Vec<String>) {
        self.footer = Some(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest = self
                    .rows
                    .iter()
                    .chain(self.footer.iter())
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.chars().count(), usize::max);
                column.max_width.map_or(widest, |max| widest.min(max))
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let rule = horizontal_rule(&widths);

        let mut lines = vec![self.render_row(&header, &widths), rule.clone()];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        if let Some(footer) = &self.footer {
            lines.push(rule);
            lines.push(self.render_row(footer, &widths));
        }
        lines.join("\n")
    }
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    match alignment {
        Alignment::Left => format!("{fitted:<width$}"),
        Alignment::Right => format!("{fitted:>width$}"),
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode { '-' } else { '─' };
    ch.to_string().repeat(total)
}
