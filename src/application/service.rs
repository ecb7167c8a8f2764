use crate::domain::{
    Cents, Document, EntryKind, LedgerAggregate, Note, NoteLog, Summary, format_cents,
    normalize_label,
};
use crate::storage::Store;

use super::{AppError, LedgerReport};

/// Application service owning the live suite state.
/// This is the primary interface for any client (interactive menu, subcommands, tests).
pub struct SuiteService {
    store: Store,
    ledger: LedgerAggregate,
    notes: NoteLog,
}

/// Result of adding an amount to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerUpdate {
    pub kind: EntryKind,
    pub label: String,
    pub added: Cents,
    pub running_total: Cents,
}

impl SuiteService {
    /// Create a service over an already-loaded document.
    pub fn new(store: Store, document: Document) -> Result<Self, AppError> {
        let (ledger, notes) = document.into_parts()?;
        Ok(Self {
            store,
            ledger,
            notes,
        })
    }

    /// Load the store's document. Unusable data is discarded and the error
    /// handed back so the caller can tell the user.
    pub fn open(store: Store) -> (Self, Option<AppError>) {
        let loaded = store.load();
        let mut recovered_from = loaded.recovered_from.map(AppError::from);
        let (ledger, notes) = match loaded.document.into_parts() {
            Ok(parts) => parts,
            Err(err) => {
                log::warn!("discarding loaded document: {err}");
                recovered_from = Some(err.into());
                Default::default()
            }
        };
        let service = Self {
            store,
            ledger,
            notes,
        };
        (service, recovered_from)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // ========================
    // Ledger operations
    // ========================

    /// Add a positive amount under an income source or expense category.
    pub fn record(
        &mut self,
        kind: EntryKind,
        label: &str,
        amount: Cents,
    ) -> Result<LedgerUpdate, AppError> {
        if normalize_label(label).is_empty() {
            return Err(AppError::EmptyLabel);
        }
        if amount <= 0 {
            return Err(AppError::NonPositiveAmount(format_cents(amount)));
        }

        let (label, running_total) = self.ledger.add(kind, label, amount)?;
        Ok(LedgerUpdate {
            kind,
            label,
            added: amount,
            running_total,
        })
    }

    pub fn add_income(&mut self, source: &str, amount: Cents) -> Result<LedgerUpdate, AppError> {
        self.record(EntryKind::Income, source, amount)
    }

    pub fn add_expense(&mut self, category: &str, amount: Cents) -> Result<LedgerUpdate, AppError> {
        self.record(EntryKind::Expense, category, amount)
    }

    pub fn ledger(&self) -> &LedgerAggregate {
        &self.ledger
    }

    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    pub fn ledger_report(&self) -> LedgerReport {
        LedgerReport::from_ledger(&self.ledger)
    }

    // ========================
    // Note operations
    // ========================

    pub fn add_note(&mut self, content: &str) -> Result<Note, AppError> {
        Ok(self.notes.add_note(content)?.clone())
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.list_notes()
    }

    // ========================
    // Persistence
    // ========================

    /// Snapshot of the current state as the persisted document.
    pub fn document(&self) -> Document {
        Document::from_parts(&self.ledger, &self.notes)
    }

    /// Write the current state through the store. A failed save is returned
    /// to the caller and not retried.
    pub fn save(&self) -> Result<(), AppError> {
        self.store.save(&self.document())?;
        Ok(())
    }
}
