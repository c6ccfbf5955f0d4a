use sheetfill_common::{CellValue, RowRange};
use sheetfill_engine::{Action, EngineError, FillColumn};
use sheetfill_store::{MemoryTable, TabularStore};

fn names_table() -> MemoryTable {
    MemoryTable::from_columns([
        ("Voornaam", vec![CellValue::from("Jan"), CellValue::from("Eva")]),
        (
            "Achternaam",
            vec![CellValue::from("Jansen"), CellValue::from("de Boer")],
        ),
    ])
}

fn full_name_action() -> Action {
    FillColumn::new(
        "VolledigeNaam",
        vec!["Voornaam".to_string(), "Achternaam".to_string()],
        "{Voornaam} {Achternaam}",
    )
    .unwrap()
    .into()
}

#[test]
fn fills_all_rows_and_reports_count() {
    let mut store = names_table();
    let report = full_name_action()
        .execute(&mut store, RowRange::All)
        .unwrap();

    assert_eq!(report.rows_filled, 2);
    assert_eq!(report.target, "VolledigeNaam");
    assert!(report.to_string().contains("2 rows"));
    assert_eq!(store.cell("VolledigeNaam", 0), CellValue::from("Jan Jansen"));
    assert_eq!(store.cell("VolledigeNaam", 1), CellValue::from("Eva de Boer"));
}

#[test]
fn fills_exactly_the_requested_range() {
    let mut store = MemoryTable::from_columns([(
        "A",
        vec![
            CellValue::from("a0"),
            CellValue::from("a1"),
            CellValue::from("a2"),
            CellValue::from("a3"),
        ],
    )]);
    let action: Action = FillColumn::new("B", vec!["A".to_string()], "<{A}>")
        .unwrap()
        .into();

    let report = action
        .execute(&mut store, RowRange::span(1, 2).unwrap())
        .unwrap();
    assert_eq!(report.rows_filled, 2);

    // Rows outside [1,2] stay untouched.
    assert_eq!(store.cell("B", 0), CellValue::Empty);
    assert_eq!(store.cell("B", 1), CellValue::from("<a1>"));
    assert_eq!(store.cell("B", 2), CellValue::from("<a2>"));
    assert_eq!(store.cell("B", 3), CellValue::Empty);
}

#[test]
fn rerunning_is_idempotent() {
    let mut store = names_table();
    let action = full_name_action();

    action.execute(&mut store, RowRange::All).unwrap();
    let first: Vec<CellValue> = (0..2).map(|r| store.cell("VolledigeNaam", r)).collect();

    let report = action.execute(&mut store, RowRange::All).unwrap();
    let second: Vec<CellValue> = (0..2).map(|r| store.cell("VolledigeNaam", r)).collect();

    // Still counts as work, but the contents are recomputed identically.
    assert_eq!(report.rows_filled, 2);
    assert_eq!(first, second);
}

#[test]
fn range_is_clamped_at_execution_time() {
    let mut store = names_table();
    let action = full_name_action();

    let report = action
        .execute(&mut store, RowRange::span(0, 100).unwrap())
        .unwrap();
    assert_eq!(report.rows_filled, 2);
}

#[test]
fn range_past_the_end_is_a_no_op_success() {
    let mut store = names_table();
    let action = full_name_action();

    let report = action
        .execute(&mut store, RowRange::span(10, 20).unwrap())
        .unwrap();
    assert_eq!(report.rows_filled, 0);
    assert!(report.to_string().contains("0 rows"));
    assert!(!store.has_column("VolledigeNaam"));
}

#[test]
fn missing_source_column_fails_before_writing() {
    let mut store = names_table();
    let action: Action = FillColumn::new(
        "Uit",
        vec!["Voornaam".to_string(), "Tussenvoegsel".to_string()],
        "{Voornaam} {Tussenvoegsel}",
    )
    .unwrap()
    .into();

    let err = action.execute(&mut store, RowRange::All).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidColumn {
            column: "Tussenvoegsel".to_string()
        }
    );
    assert!(!store.has_column("Uit"));
}

#[test]
fn empty_source_cells_render_as_empty_string() {
    let mut store = MemoryTable::from_columns([
        ("A", vec![CellValue::from("x"), CellValue::Empty]),
        ("B", vec![CellValue::Empty, CellValue::from("y")]),
    ]);
    let action: Action = FillColumn::new(
        "C",
        vec!["A".to_string(), "B".to_string()],
        "{A}-{B}",
    )
    .unwrap()
    .into();

    action.execute(&mut store, RowRange::All).unwrap();
    assert_eq!(store.cell("C", 0), CellValue::from("x-"));
    assert_eq!(store.cell("C", 1), CellValue::from("-y"));
}

#[test]
fn target_may_be_an_existing_column() {
    let mut store = MemoryTable::from_columns([
        ("A", vec![CellValue::from("nieuw")]),
        ("B", vec![CellValue::from("oud")]),
    ]);
    let action: Action = FillColumn::new("B", vec!["A".to_string()], "{A}")
        .unwrap()
        .into();

    action.execute(&mut store, RowRange::All).unwrap();
    assert_eq!(store.cell("B", 0), CellValue::from("nieuw"));
    assert_eq!(store.column_names(), vec!["A", "B"]);
}

#[test]
fn closed_store_is_rejected() {
    let mut store = MemoryTable::new();
    let err = full_name_action()
        .execute(&mut store, RowRange::All)
        .unwrap_err();
    assert_eq!(err, EngineError::StoreClosed);
}

#[test]
fn non_text_sources_render_through_display() {
    let mut store = MemoryTable::from_columns([
        ("Aantal", vec![CellValue::Int(3)]),
        ("Prijs", vec![CellValue::Number(4.5)]),
    ]);
    let action: Action = FillColumn::new(
        "Regel",
        vec!["Aantal".to_string(), "Prijs".to_string()],
        "{Aantal} x {Prijs}",
    )
    .unwrap()
    .into();

    action.execute(&mut store, RowRange::All).unwrap();
    assert_eq!(store.cell("Regel", 0), CellValue::from("3 x 4.5"));
}
