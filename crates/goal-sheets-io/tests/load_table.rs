//! Loading spreadsheets from disk

use std::fs;
use std::path::PathBuf;

use goal_sheets_core::{CellValue, Error};
use goal_sheets_io::{load_table, LoadError, LoadOptions, WorkbookReader};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_xlsx_first_sheet_only() {
    let table = load_table(fixture("vendas.xlsx"), &LoadOptions::default()).unwrap();

    assert_eq!(table.headers(), ["Consultor", "Filial", "Valor", "Ativo"]);
    assert!(!table.has_column("Meta"));
    // the blank fourth row is skipped
    assert_eq!(table.len(), 3);
    assert_eq!(table.distinct_values("Consultor"), vec!["Ana", "Bia"]);
    assert_eq!(table.distinct_values("Filial"), vec!["1", "2"]);

    let rows = table.rows();
    assert_eq!(rows[0].get("Consultor"), Some(&CellValue::text("Ana")));
    assert_eq!(rows[0].get("Valor"), Some(&CellValue::Number(100.0)));
    assert_eq!(rows[1].get("Valor"), Some(&CellValue::Number(50.5)));
    assert_eq!(rows[0].get("Ativo"), Some(&CellValue::text("true")));
    assert_eq!(rows[1].get("Ativo"), Some(&CellValue::text("false")));
    assert_eq!(rows[2].get("Consultor"), Some(&CellValue::text("Bia")));
    assert!(!rows[2].contains("Ativo"));
}

#[test]
fn test_read_xlsx_from_memory() {
    let bytes = fs::read(fixture("vendas.xlsx")).unwrap();
    let table = WorkbookReader::read(bytes).unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.rows().iter().all(|row| !row.contains("Meta")));
}

#[test]
fn test_load_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vendas.csv");
    fs::write(
        &path,
        "Consultor,Filial,Valor\nAna,1,100\nAna,2,50\nBia,1,10\n\n",
    )
    .unwrap();

    let table = load_table(&path, &LoadOptions::default()).unwrap();

    assert_eq!(table.headers(), ["Consultor", "Filial", "Valor"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.distinct_values("Consultor"), vec!["Ana", "Bia"]);
    assert_eq!(table.distinct_values("Filial"), vec!["1", "2"]);
    assert_eq!(
        table.rows()[2].get("Valor"),
        Some(&CellValue::Number(10.0))
    );
}

#[test]
fn test_load_tsv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vendas.tsv");
    fs::write(&path, "Consultor\tValor\nAna, Silva\t100\n").unwrap();

    let table = load_table(&path, &LoadOptions::default()).unwrap();
    assert_eq!(
        table.rows()[0].get("Consultor"),
        Some(&CellValue::text("Ana, Silva"))
    );
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.pdf");
    fs::write(&path, "x").unwrap();

    let err = load_table(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
}

#[test]
fn test_corrupt_workbook_becomes_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vendas.xlsx");
    fs::write(&path, "this is not a zip archive").unwrap();

    let err = load_table(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Workbook(_)));
    assert!(matches!(Error::from(err), Error::Parse(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_table(dir.path().join("absent.csv"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
