//! Tests for tabcollate-model types.

use tabcollate_model::{Cell, CleanOptions, Table, TypeCounts};

#[test]
fn cells_serialize_with_kind_tags() {
    let json = serde_json::to_string(&vec![
        Cell::text("id"),
        Cell::Number(1.5),
        Cell::Absent,
    ])
    .expect("serialize cells");
    assert_eq!(
        json,
        r#"[{"kind":"Text","value":"id"},{"kind":"Number","value":1.5},{"kind":"Absent"}]"#
    );
}

#[test]
fn table_deserializes_from_json() {
    let json = r#"{"rows":[[{"kind":"Text","value":"a"}],[{"kind":"Absent"}]]}"#;
    let table: Table = serde_json::from_str(json).expect("deserialize table");
    assert_eq!(table.rows, vec![vec![Cell::text("a")], vec![Cell::Absent]]);
}

#[test]
fn options_round_trip_through_json() {
    let options = CleanOptions::new().with_col_sparseness(0.25);
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: CleanOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round, options);
}

#[test]
fn column_counts_follow_filled_table() {
    let table = Table::from_text(vec![vec!["id", "val"], vec!["1"], vec!["NULL", "x"]]).filled();
    let first = TypeCounts::from_cells(table.column(0));
    let second = TypeCounts::from_cells(table.column(1));
    assert_eq!(first.none, 1);
    assert_eq!(second.none, 1);
    assert_eq!(second.string, 2);
}
