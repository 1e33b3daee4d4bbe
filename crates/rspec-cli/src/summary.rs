use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rspec_cli::pipeline::KeySummary;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Mode: {}", result.mode.label());
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.target_dir.display());
    } else {
        println!("Output: {}", result.target_dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Language"),
        header_cell("Directory"),
        header_cell("Fetched"),
        header_cell("Emitted"),
        header_cell("Activated"),
        header_cell("Files"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_fetched = 0usize;
    let mut total_emitted = 0usize;
    let mut total_files = 0usize;
    for summary in &result.keys {
        total_fetched += summary.rules_fetched;
        total_emitted += summary.rules_emitted;
        total_files += summary.files.len();
        table.add_row(key_row(summary));
    }
    let total_activated = result
        .keys
        .iter()
        .filter_map(|summary| summary.profile_activations)
        .reduce(|total, count| total + count);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_fetched).add_attribute(Attribute::Bold),
        Cell::new(total_emitted).add_attribute(Attribute::Bold),
        activation_cell(total_activated).add_attribute(Attribute::Bold),
        Cell::new(total_files).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn key_row(summary: &KeySummary) -> Vec<Cell> {
    vec![
        Cell::new(&summary.language_key)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.output_dir.display()),
        Cell::new(summary.rules_fetched),
        emitted_cell(summary.rules_emitted, summary.rules_fetched),
        activation_cell(summary.profile_activations),
        Cell::new(summary.files.len()),
    ]
}

/// Highlight keys where the compatibility filter dropped every rule.
fn emitted_cell(emitted: usize, fetched: usize) -> Cell {
    if emitted == 0 && fetched > 0 {
        Cell::new(emitted).fg(Color::Yellow)
    } else {
        Cell::new(emitted)
    }
}

fn activation_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
