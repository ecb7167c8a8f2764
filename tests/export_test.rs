mod common;

use anyhow::Result;
use common::test_service;
use productivity_suite::io::{ExportFormat, ExportKind, Exporter};

#[test]
fn test_export_ledger_csv() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    service.add_income("salary", 520000)?;
    service.add_expense("rent", 150000)?;
    service.add_expense("coffee", 350)?;

    let mut out = Vec::new();
    let count = Exporter::new(&service).export_ledger_csv(&mut out)?;

    assert_eq!(count, 3);
    assert_eq!(
        String::from_utf8(out)?,
        "kind,label,amount\nincome,Salary,5200.00\nexpense,Coffee,3.50\nexpense,Rent,1500.00\n"
    );
    Ok(())
}

#[test]
fn test_export_ledger_json() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    service.add_income("salary", 520000)?;
    service.add_expense("coffee", 350)?;

    let mut out = Vec::new();
    let count = Exporter::new(&service).export(ExportKind::Ledger, ExportFormat::Json, &mut out)?;

    assert_eq!(count, 2);
    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(
        value,
        serde_json::json!([
            {"kind": "income", "label": "Salary", "amount": 5200.0},
            {"kind": "expense", "label": "Coffee", "amount": 3.5}
        ])
    );
    Ok(())
}

#[test]
fn test_export_notes_csv_quotes_content() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    service.add_note("buy milk, eggs")?;

    let mut out = Vec::new();
    let count = Exporter::new(&service).export(ExportKind::Notes, ExportFormat::Csv, &mut out)?;

    assert_eq!(count, 1);
    let text = String::from_utf8(out)?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("timestamp,content"));
    let row = lines.next().unwrap_or_default();
    assert!(row.ends_with(",\"buy milk, eggs\""));
    Ok(())
}

#[test]
fn test_export_notes_json_matches_data_file_shape() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    service.add_note("one")?;
    service.add_note("two")?;

    let mut out = Vec::new();
    Exporter::new(&service).export_notes_json(&mut out)?;

    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["content"], "two");
    assert!(value[0]["timestamp"].is_string());
    Ok(())
}

#[test]
fn test_export_kind_and_format_parsing() {
    assert_eq!(ExportKind::from_str("Ledger"), Some(ExportKind::Ledger));
    assert_eq!(ExportKind::from_str("notes"), Some(ExportKind::Notes));
    assert_eq!(ExportKind::from_str("wallets"), None);
    assert_eq!(ExportFormat::from_str("JSON"), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::from_str("xml"), None);
}
