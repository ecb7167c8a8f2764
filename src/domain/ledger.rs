use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Cents, MAX_CENTS, format_cents};

/// Which side of the ledger an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in, keyed by source (salary, freelance, ...)
    Income,
    /// Money going out, keyed by category (rent, groceries, ...)
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(EntryKind::Income),
            "expense" | "expenses" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize a user-supplied label: trim, then uppercase the first character
/// and lowercase the rest. "  salary " and "SALARY" both become "Salary".
pub fn normalize_label(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Totals derived from the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Cents,
    pub total_expenses: Cents,
    pub net_savings: Cents,
}

/// Running totals per income source and per expense category.
///
/// Entries are created on first use of a label and summed on every later use.
/// Nothing is ever removed. Callers reject non-positive input; the aggregate
/// only guarantees that no label total and no side total ever exceeds
/// [`MAX_CENTS`] in magnitude.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerAggregate {
    income: BTreeMap<String, Cents>,
    expenses: BTreeMap<String, Cents>,
}

impl LedgerAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an aggregate from persisted maps. Keys are re-normalized, so
    /// two stored labels that differ only in casing are merged.
    pub fn from_parts(
        income: BTreeMap<String, Cents>,
        expenses: BTreeMap<String, Cents>,
    ) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for (label, amount) in income {
            ledger.add(EntryKind::Income, &label, amount)?;
        }
        for (label, amount) in expenses {
            ledger.add(EntryKind::Expense, &label, amount)?;
        }
        Ok(ledger)
    }

    /// Add `amount` under the normalized `label`. Returns the normalized label
    /// and the new running total for it.
    ///
    /// Fails without touching the ledger if the label total or the side total
    /// would leave the `±MAX_CENTS` range.
    pub fn add(
        &mut self,
        kind: EntryKind,
        label: &str,
        amount: Cents,
    ) -> Result<(String, Cents), LedgerError> {
        let label = normalize_label(label);
        let map = match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        };

        let current = map.get(&label).copied().unwrap_or(0);
        let new_side_total = side_total(map) + i128::from(amount);
        let total = current
            .checked_add(amount)
            .filter(|total| within_limit(i128::from(*total)) && within_limit(new_side_total))
            .ok_or_else(|| LedgerError::LimitExceeded {
                kind,
                label: label.clone(),
            })?;

        map.insert(label.clone(), total);
        log::debug!("ledger {kind} '{label}' += {amount} -> {total}");
        Ok((label, total))
    }

    pub fn add_income(
        &mut self,
        source: &str,
        amount: Cents,
    ) -> Result<(String, Cents), LedgerError> {
        self.add(EntryKind::Income, source, amount)
    }

    pub fn add_expense(
        &mut self,
        category: &str,
        amount: Cents,
    ) -> Result<(String, Cents), LedgerError> {
        self.add(EntryKind::Expense, category, amount)
    }

    pub fn income(&self) -> &BTreeMap<String, Cents> {
        &self.income
    }

    pub fn expenses(&self) -> &BTreeMap<String, Cents> {
        &self.expenses
    }

    /// Running total for one label, looked up after normalization.
    pub fn get(&self, kind: EntryKind, label: &str) -> Option<Cents> {
        let label = normalize_label(label);
        match kind {
            EntryKind::Income => self.income.get(&label).copied(),
            EntryKind::Expense => self.expenses.get(&label).copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    /// Every entry as `(kind, label, amount)`, income first, each side in
    /// label order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryKind, &str, Cents)> {
        let income = self
            .income
            .iter()
            .map(|(label, amount)| (EntryKind::Income, label.as_str(), *amount));
        let expenses = self
            .expenses
            .iter()
            .map(|(label, amount)| (EntryKind::Expense, label.as_str(), *amount));
        income.chain(expenses)
    }

    /// Side totals stay within `±MAX_CENTS`, so neither the sums nor the
    /// difference can overflow.
    pub fn summary(&self) -> Summary {
        let total_income = side_total(&self.income) as Cents;
        let total_expenses = side_total(&self.expenses) as Cents;
        Summary {
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
        }
    }

    pub fn into_parts(self) -> (BTreeMap<String, Cents>, BTreeMap<String, Cents>) {
        (self.income, self.expenses)
    }
}

fn side_total(map: &BTreeMap<String, Cents>) -> i128 {
    map.values().copied().map(i128::from).sum()
}

fn within_limit(total: i128) -> bool {
    (-i128::from(MAX_CENTS)..=i128::from(MAX_CENTS)).contains(&total)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{kind} total for '{label}' would exceed the limit of {}", format_cents(MAX_CENTS))]
    LimitExceeded { kind: EntryKind, label: String },
}
