//! Sessions backed by real files

use std::fs;

use goal_sheets::prelude::*;
use pretty_assertions::assert_eq;

const SALES: &str = "Consultor;Filial;Valor\nAna;1;100\nAna;2;50\nBia;1;10\nCaio;10;\n";

#[test]
fn test_load_calculate_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("vendas.csv");
    let state = dir.path().join("state").join("goal.json");
    fs::write(&sheet, SALES).unwrap();

    {
        let mut session = Session::new(JsonFileStore::new(&state));
        session.load_file(&sheet).unwrap();
        assert_eq!(session.columns().unwrap(), ["Consultor", "Filial", "Valor"]);
        assert_eq!(
            session.select_column("Filial").unwrap(),
            vec!["1", "2", "10"]
        );

        let calc = session
            .calculate(&CalculationRequest {
                selection: Some(Selection::SpecificValue("1".into())),
                percent: Some(10.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(calc.total, 110.0);
        assert_eq!(format_money(calc.goal), "R$ 121,00");
        assert_eq!(calc.record.to_string(), "Filial = 1");
    }

    let mut session = Session::new(JsonFileStore::new(&state));
    assert_eq!(session.restored_settings().unwrap().column, None);

    session.load_file(&sheet).unwrap();
    let restored = session.restored_settings().unwrap();
    assert_eq!(restored.column.as_deref(), Some("Filial"));
    assert_eq!(restored.selection, Some(Selection::SpecificValue("1".into())));
    assert_eq!(restored.percent, Some(10.0));

    let history = session.history().list().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].percent_label(), "10%");
}

#[test]
fn test_busy_callback_and_failed_load() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("vendas.csv");
    fs::write(&sheet, SALES).unwrap();

    let mut session = Session::new(MemoryStore::new());
    let mut events = Vec::new();
    session.load_file_with(&sheet, |busy| events.push(busy)).unwrap();
    assert_eq!(events, vec![true, false]);

    let mut events = Vec::new();
    let err = session
        .load_file_with(dir.path().join("missing.xlsx"), |busy| events.push(busy))
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(events, vec![true, false]);

    // the previous table is still loaded
    assert_eq!(session.table().map(TableDataStore::len), Some(4));
}

#[test]
fn test_header_only_sheet_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("vazio.csv");
    fs::write(&sheet, "Consultor,Valor\n").unwrap();

    let mut session = Session::new(MemoryStore::new());
    assert!(matches!(session.load_file(&sheet), Err(Error::Parse(_))));
    assert!(matches!(session.columns(), Err(Error::NoTable)));
}

#[test]
fn test_history_survives_settings_reset() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("goal.json");
    let session = Session::new(JsonFileStore::new(&state));

    session
        .calculate(&CalculationRequest {
            column: Some("Consultor".into()),
            selection: Some(Selection::ManualEntry),
            manual_label: Some("  João ".into()),
            manual_amount: Some(500.0),
            percent: Some(12.5),
        })
        .unwrap();

    session.settings().reset().unwrap();
    assert_eq!(session.settings().load().unwrap(), Settings::default());

    let history = session.history().list().unwrap();
    assert_eq!(
        history[0].to_string(),
        "column Consultor, value João, manual total R$ 500,00"
    );
    assert_eq!(history[0].percent_label(), "12.5%");
}
