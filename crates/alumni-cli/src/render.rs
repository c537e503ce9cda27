//! Terminal rendering of query outcomes.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use alumni_ingest::format_numeric;
use alumni_model::{AggregateRow, Dataset};
use alumni_query::QueryOutcome;

/// Shown instead of charts when a query matches nothing.
pub const EMPTY_RESULT_WARNING: &str = "No data available based on the current filter settings!";

const DASHBOARD_TITLE: &str = "Alumni System Dashboard";
const BAR_WIDTH: usize = 30;
const BAR_GLYPH: char = '█';

/// How query results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Render a query outcome for printing.
///
/// An empty outcome renders the warning line in table mode and an
/// `is_empty` report in JSON mode.
pub fn render_outcome(
    outcome: &QueryOutcome,
    top_n: usize,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&outcome.report()),
        OutputFormat::Table => Ok(render_dashboard(outcome, top_n)),
    }
}

/// Human-readable dashboard: participant count, points by alumni, top N.
pub fn render_dashboard(outcome: &QueryOutcome, top_n: usize) -> String {
    let Some(result) = outcome.result() else {
        return EMPTY_RESULT_WARNING.to_string();
    };
    let mut out = String::new();
    out.push_str(DASHBOARD_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "Total Participants: {}\n",
        format_count(result.participant_count)
    ));
    out.push('\n');
    out.push_str("Points by Alumni\n");
    out.push_str(&points_table(&result.by_name, Color::Blue).to_string());
    out.push_str("\n\n");
    out.push_str(&format!("Top {top_n} Alumni by Points\n"));
    out.push_str(&points_table(&result.top, Color::DarkYellow).to_string());
    out
}

/// Table of the distinct names and platforms available as filters.
pub fn render_options(dataset: &Dataset) -> String {
    let names = dataset.distinct_names();
    let platforms = dataset.distinct_platforms();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Platform")]);
    apply_table_style(&mut table);
    for idx in 0..names.len().max(platforms.len()) {
        table.add_row(vec![
            option_cell(names.get(idx).copied()),
            option_cell(platforms.get(idx).copied()),
        ]);
    }
    format!(
        "{} records, {} names, {} platforms\n{table}",
        format_count(dataset.len()),
        format_count(names.len()),
        format_count(platforms.len())
    )
}

/// Format a count with thousands separators (`1234567` → `1,234,567`).
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A horizontal bar scaled against `max`.
///
/// Non-positive values and a non-positive `max` draw nothing.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round() as usize;
    std::iter::repeat_n(BAR_GLYPH, len.clamp(1, width)).collect()
}

fn points_table(rows: &[AggregateRow], color: Color) -> Table {
    let max = rows
        .iter()
        .map(|row| row.total_points)
        .fold(0.0_f64, f64::max);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Points"),
        header_cell(""),
    ]);
    apply_points_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(format_numeric(row.total_points)),
            Cell::new(bar(row.total_points, max, BAR_WIDTH)).fg(color),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_points_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn option_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
