//! Template rendering for CLI output using outstanding

use console::Style;
use outstanding::{render_auto, render_with_output, Theme};
use serde::Serialize;
use sloclib::{LOCTable, LanguageMap, TableRow};

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Include template at compile time
const STATS_TABLE_TEMPLATE: &str = include_str!("../templates/stats_table.jinja");

/// Spaces between columns.
const PADDING: usize = 2;

/// Row data for template rendering (pre-formatted)
#[derive(Debug, Serialize)]
struct TemplateRow {
    /// Pre-padded cells (right-aligned), label first
    cells: Vec<String>,
}

/// Data context for stats table template
#[derive(Debug, Serialize)]
struct StatsTableContext {
    /// Pre-padded column headers
    columns: Vec<String>,
    /// Data rows, Total included
    rows: Vec<TemplateRow>,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("header", Style::new().bold())
}

/// Compute the width of every column (label column first), padding included.
fn column_widths(table: &LOCTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();

    for row in &table.rows {
        let cells = std::iter::once(&row.label).chain(row.values.iter());
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    widths.into_iter().map(|w| w + PADDING).collect()
}

fn pad_right_aligned<'a>(
    cells: impl Iterator<Item = &'a String>,
    widths: &[usize],
) -> Vec<String> {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect()
}

/// Convert a TableRow to a TemplateRow, pre-formatting cells
fn to_template_row(row: &TableRow, widths: &[usize]) -> TemplateRow {
    let cells = std::iter::once(&row.label).chain(row.values.iter());
    TemplateRow {
        cells: pad_right_aligned(cells, widths),
    }
}

/// Render the stats table through the template.
///
/// Widths are computed on the plain text so styling never shifts columns.
pub fn render_table(table: &LOCTable, output_mode: OutputMode) -> Result<String, anyhow::Error> {
    let widths = column_widths(table);
    let context = StatsTableContext {
        columns: pad_right_aligned(table.headers.iter(), &widths),
        rows: table
            .rows
            .iter()
            .map(|row| to_template_row(row, &widths))
            .collect(),
    };

    render_with_output(STATS_TABLE_TEMPLATE, &context, &create_theme(), output_mode)
        .map_err(|e| anyhow::anyhow!("failed to render table: {e}"))
}

/// Render the per-language map through outstanding's JSON dispatch.
pub fn render_json(languages: &LanguageMap) -> Result<String, anyhow::Error> {
    render_auto(STATS_TABLE_TEMPLATE, languages, &create_theme(), OutputMode::Json)
        .map_err(|e| anyhow::anyhow!("failed to render JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sloclib::{CountQuerySet, CountResult, LineStats, Ordering};

    fn sample_result() -> CountResult {
        let mut result = CountResult::new();
        result.add(
            "Go",
            LineStats {
                file_count: 1,
                total_lines: 4,
                code_lines: 3,
                blank_lines: 1,
                comment_lines: 0,
            },
        );
        result.add(
            "Markdown",
            LineStats {
                file_count: 1,
                total_lines: 5,
                code_lines: 5,
                blank_lines: 0,
                comment_lines: 0,
            },
        );
        result
    }

    fn sample_table() -> LOCTable {
        let qs = CountQuerySet::from_result(&sample_result(), Ordering::default());
        LOCTable::from_count_queryset(&qs)
    }

    #[test]
    fn test_column_widths() {
        let widths = column_widths(&sample_table());
        // Language, Files, Code, Comment, Blank, Total
        assert_eq!(widths, vec![10, 7, 6, 9, 7, 7]);
    }

    #[test]
    fn test_to_template_row() {
        let row = TableRow {
            label: "Go".to_string(),
            values: vec!["1".to_string(), "3".to_string()],
        };
        let template_row = to_template_row(&row, &[6, 4, 5]);

        assert_eq!(template_row.cells, vec!["    Go", "   1", "    3"]);
    }

    #[test]
    fn test_render_table_plain() {
        let output = render_table(&sample_table(), OutputMode::Text).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  Language  Files  Code  Comment  Blank  Total");
        assert_eq!(lines[1], "     Total      2     8        0      1      9");
        assert_eq!(lines[2], "  Markdown      1     5        0      0      5");
        assert_eq!(lines[3], "        Go      1     3        0      1      4");
    }

    #[test]
    fn test_columns_line_up() {
        let output = render_table(&sample_table(), OutputMode::Text).unwrap();
        let lengths: Vec<usize> = output.lines().map(|l| l.len()).collect();

        assert!(lengths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_json_field_names() {
        let json = render_json(&sample_result().languages).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["Go"]["FileCount"], 1);
        assert_eq!(parsed["Go"]["CodeLines"], 3);
        assert_eq!(parsed["Go"]["BlankLines"], 1);
        assert_eq!(parsed["Go"]["TotalLines"], 4);
        assert_eq!(parsed["Markdown"]["CommentLines"], 0);
        assert!(parsed.get("Total").is_none());
    }
}
