use serde::{Deserialize, Serialize};

use crate::domain::{Cents, LedgerAggregate};

/// Income vs expense breakdown of the whole ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerReport {
    pub income: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
    pub total_income: Cents,
    pub total_expenses: Cents,
    pub net_savings: Cents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Cents,
    /// Share of its side of the ledger, 0-100.
    pub percentage: f64,
}

impl LedgerReport {
    pub fn from_ledger(ledger: &LedgerAggregate) -> Self {
        let summary = ledger.summary();
        Self {
            income: line_items(ledger.income().iter(), summary.total_income),
            expenses: line_items(ledger.expenses().iter(), summary.total_expenses),
            total_income: summary.total_income,
            total_expenses: summary.total_expenses,
            net_savings: summary.net_savings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }
}

// Largest first; ties keep label order.
fn line_items<'a>(entries: impl Iterator<Item = (&'a String, &'a Cents)>, total: Cents) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = entries
        .map(|(label, amount)| LineItem {
            label: label.clone(),
            amount: *amount,
            percentage: if total > 0 {
                *amount as f64 * 100.0 / total as f64
            } else {
                0.0
            },
        })
        .collect();
    items.sort_by(|a, b| b.amount.cmp(&a.amount));
    items
}
