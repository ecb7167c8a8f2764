use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::application::SuiteService;
use crate::domain::{EntryKind, Note, cents_to_units, format_cents};

/// What to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Ledger,
    Notes,
}

impl ExportKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ledger" | "budget" => Some(ExportKind::Ledger),
            "notes" => Some(ExportKind::Notes),
            _ => None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// One ledger row as exported. `amount` is in currency units, like the CSV
/// column and the data file.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerRow<'a> {
    pub kind: EntryKind,
    pub label: &'a str,
    pub amount: f64,
}

/// Exporter for getting suite data out as CSV or JSON
pub struct Exporter<'a> {
    service: &'a SuiteService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a SuiteService) -> Self {
        Self { service }
    }

    /// Export `kind` in `format`, returning the number of records written.
    pub fn export<W: Write>(&self, kind: ExportKind, format: ExportFormat, writer: W) -> Result<usize> {
        match (kind, format) {
            (ExportKind::Ledger, ExportFormat::Csv) => self.export_ledger_csv(writer),
            (ExportKind::Ledger, ExportFormat::Json) => self.export_ledger_json(writer),
            (ExportKind::Notes, ExportFormat::Csv) => self.export_notes_csv(writer),
            (ExportKind::Notes, ExportFormat::Json) => self.export_notes_json(writer),
        }
    }

    /// Export ledger entries to CSV: kind, label, amount
    pub fn export_ledger_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["kind", "label", "amount"])?;

        let mut count = 0;
        for (kind, label, amount) in self.service.ledger().entries() {
            csv_writer.write_record([kind.as_str(), label, format_cents(amount).as_str()])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export ledger entries to a JSON array
    pub fn export_ledger_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let rows: Vec<LedgerRow> = self
            .service
            .ledger()
            .entries()
            .map(|(kind, label, amount)| LedgerRow {
                kind,
                label,
                amount: cents_to_units(amount),
            })
            .collect();
        serde_json::to_writer_pretty(&mut writer, &rows)?;
        writeln!(writer)?;
        Ok(rows.len())
    }

    /// Export notes to CSV: timestamp, content
    pub fn export_notes_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["timestamp", "content"])?;

        let notes = self.service.notes();
        for note in notes {
            csv_writer.write_record([note.formatted_timestamp().as_str(), note.content.as_str()])?;
        }

        csv_writer.flush()?;
        Ok(notes.len())
    }

    /// Export notes to a JSON array, same shape as in the data file
    pub fn export_notes_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let notes: &[Note] = self.service.notes();
        serde_json::to_writer_pretty(&mut writer, notes)?;
        writeln!(writer)?;
        Ok(notes.len())
    }
}
