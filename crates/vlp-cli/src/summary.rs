//! End-of-run console summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CleanSummary, SplitSummary};

pub fn print_clean_summary(summary: &CleanSummary) {
    match &summary.output {
        Some(path) => println!("Cleaned data: {}", path.display()),
        None => println!("Cleaned data: not written"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Numeric"),
        header_cell("Categorical"),
        header_cell("Index dropped"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [0, 1, 2, 3, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 4, CellAlignment::Center);
    table.add_row(vec![
        Cell::new(summary.rows),
        Cell::new(summary.columns),
        Cell::new(summary.numeric_columns),
        Cell::new(summary.categorical_columns),
        Cell::new(if summary.index_dropped { "yes" } else { "no" }),
        error_cell(summary.errors.len()),
    ]);
    println!("{table}");

    for error in &summary.errors {
        println!("error: {error}");
    }
}

pub fn print_split_summary(summary: &SplitSummary) {
    println!("Train data: {}", summary.train_path.display());
    println!("Test data: {}", summary.test_path.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Train"),
        header_cell("Test"),
        header_cell("Test fraction"),
        header_cell("Seed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.rows),
        Cell::new(summary.train_rows),
        Cell::new(summary.test_rows),
        Cell::new(summary.test_size),
        Cell::new(summary.random_state),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn error_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red)
    } else {
        Cell::new(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
