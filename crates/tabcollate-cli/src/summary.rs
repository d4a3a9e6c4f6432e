use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tabcollate_ingest::{CleanedTable, Collection, MergeReport};
use tabcollate_model::{Cell as TableCell, NULL_LITERAL, Row};
use tabcollate_cli::pipeline::LoadOutcome;

/// Rows shown by `clean` before the rest is summarized.
const PREVIEW_ROWS: usize = 20;

pub fn print_load_summary(outcome: &LoadOutcome) {
    let collection = &outcome.collection;
    println!("{collection}");
    println!("{}", merge_table(collection.report()));
    println!("{}", collection_table(collection));
    if let Some(table) = skipped_table(collection.report()) {
        println!("{table}");
    }
    println!("{}", collection.report().summary());
    for path in &outcome.written {
        println!("Wrote {}", path.display());
    }
}

pub fn print_cleaned(path: &Path, cleaned: &CleanedTable) {
    println!("File: {}", path.display());
    match cleaned.header_index() {
        Some(index) => println!(
            "{} rows, {} columns, header at row {index}",
            cleaned.numrows(),
            cleaned.numcols()
        ),
        None => println!("Table is empty after cleaning"),
    }
    if !cleaned.is_empty() {
        println!("{}", cleaned_table(cleaned));
    }
}

fn merge_table(report: &MergeReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Total Rows"),
        header_cell("Merged"),
    ]);
    apply_table_style(&mut table);
    apply_summary_constraints(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for line in &report.lines {
        let merged = if line.merged {
            Cell::new("✓").fg(Color::Green)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(&line.file),
            Cell::new(line.rows),
            Cell::new(line.total_rows),
            merged,
        ]);
    }
    table
}

fn collection_table(collection: &Collection) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Header"),
    ]);
    apply_table_style(&mut table);
    apply_summary_constraints(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in collection {
        let name = if entry.name == collection.report().merged_into {
            Cell::new(&entry.name)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&entry.name)
        };
        let header = entry.header();
        table.add_row(vec![
            name,
            Cell::new(entry.row_count()),
            Cell::new(header.map_or(0, Vec::len)),
            header.map_or_else(|| dim_cell("-"), |row| Cell::new(join_row(row))),
        ]);
    }
    table
}

fn skipped_table(report: &MergeReport) -> Option<Table> {
    if report.skipped.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Skipped"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for skipped in &report.skipped {
        table.add_row(vec![
            Cell::new(&skipped.file).fg(Color::Yellow),
            dim_cell(&skipped.reason),
        ]);
    }
    Some(table)
}

fn cleaned_table(cleaned: &CleanedTable) -> Table {
    let mut table = Table::new();
    if let Some(header) = cleaned.header() {
        table.set_header(header.iter().map(|cell| header_cell(&cell.to_string())));
    }
    apply_table_style(&mut table);
    let mut shown = 0usize;
    for row in cleaned.data_rows().take(PREVIEW_ROWS) {
        table.add_row(row.iter().map(value_cell));
        shown += 1;
    }
    let hidden = cleaned.numrows().saturating_sub(shown);
    if hidden > 0 {
        table.add_row(vec![dim_cell(format!("... {hidden} more rows"))]);
    }
    for index in 0..cleaned.numcols() {
        let numeric = cleaned
            .data_rows()
            .filter_map(|row| row.get(index))
            .all(|cell| !matches!(cell, TableCell::Text(_)));
        if numeric {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Widths for the four-column merge and collection tables: name, two counts, wide last column.
fn apply_summary_constraints(table: &mut Table) {
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ColumnConstraint::UpperBoundary(Width::Percentage(60)),
    ]);
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

fn value_cell(value: &TableCell) -> Cell {
    match value {
        TableCell::Absent => dim_cell(""),
        TableCell::Text(text) if text.is_empty() || text == NULL_LITERAL => {
            dim_cell(text)
        }
        other => Cell::new(other),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn join_row(row: &Row) -> String {
    row.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabcollate_ingest::{MergeLine, clean};
    use tabcollate_model::{CleanOptions, Table as RawTable};

    fn report() -> MergeReport {
        MergeReport {
            lines: vec![MergeLine {
                file: "jan.csv".to_string(),
                rows: 2,
                total_rows: 2,
                merged: true,
            }],
            skipped: Vec::new(),
            merged_into: "jan.csv".to_string(),
            entries: 1,
        }
    }

    #[test]
    fn summary_tables_carry_width_constraints() {
        let table = merge_table(&report());
        assert_eq!(
            table.column(0).and_then(|column| column.constraint()),
            Some(&ColumnConstraint::UpperBoundary(Width::Percentage(40)))
        );
    }

    #[test]
    fn four_column_preview_is_unconstrained() {
        let raw = RawTable::from_text(vec![
            vec!["item", "qty", "price", "note"],
            vec!["bolt", "4", "0.5", "zinc"],
        ]);
        let cleaned = clean(&raw, &CleanOptions::default()).unwrap();
        let mut table = cleaned_table(&cleaned);
        assert_eq!(table.column_count(), 4);
        for index in 0..4 {
            assert!(table.column(index).unwrap().constraint().is_none());
        }
    }

    #[test]
    fn join_row_uses_display_form() {
        let row = vec![TableCell::text("id"), TableCell::Number(2.5), TableCell::Absent];
        assert_eq!(join_row(&row), "id, 2.5, ");
    }
}
