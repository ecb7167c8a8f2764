use std::io::{self, Write};

use crate::application::{LedgerReport, LineItem};
use crate::domain::{Note, format_cents};

fn write_items<W: Write>(out: &mut W, heading: &str, items: &[LineItem]) -> io::Result<()> {
    writeln!(out, "{heading}")?;
    if items.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for item in items {
        writeln!(
            out,
            "  {:<20} {:>12}  {:>5.1}%",
            truncate(&item.label, 20),
            format_cents(item.amount),
            item.percentage
        )?;
    }
    Ok(())
}

/// Human-readable ledger breakdown followed by the three totals.
pub fn write_summary<W: Write>(out: &mut W, report: &LedgerReport) -> io::Result<()> {
    writeln!(out, "📊 Budget Summary")?;
    if report.is_empty() {
        writeln!(out, "ℹ️  No income or expenses recorded yet.")?;
    } else {
        write_items(out, "Income:", &report.income)?;
        write_items(out, "Expenses:", &report.expenses)?;
    }
    writeln!(out, "{}", "-".repeat(36))?;
    writeln!(out, "Total income:    {:>15}", format_cents(report.total_income))?;
    writeln!(out, "Total expenses:  {:>15}", format_cents(report.total_expenses))?;
    writeln!(out, "Net savings:     {:>15}", format_cents(report.net_savings))?;
    Ok(())
}

/// Notes numbered from 1 in insertion order.
pub fn write_notes<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(out, "ℹ️  No notes yet.");
    }
    writeln!(out, "📒 Your notes:")?;
    for (index, note) in notes.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {}",
            index + 1,
            note.formatted_timestamp(),
            note.content
        )?;
    }
    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{kept}...")
    }
}
