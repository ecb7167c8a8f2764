use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Cents, LedgerAggregate, LedgerError, Note, NoteLog};

/// The single persisted unit: both ledger sides plus the note log.
///
/// Missing fields deserialize as empty, so `{}` is a valid (empty) document.
/// Labels are normalized on the way in, and a file whose totals would break
/// the ledger limit fails to deserialize like any other malformed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct Document {
    #[serde(serialize_with = "unit_amounts::serialize")]
    pub income: BTreeMap<String, Cents>,
    #[serde(serialize_with = "unit_amounts::serialize")]
    pub expenses: BTreeMap<String, Cents>,
    pub notes: Vec<Note>,
}

/// The document exactly as written on disk, before labels are merged.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawDocument {
    #[serde(deserialize_with = "unit_amounts::deserialize")]
    income: BTreeMap<String, Cents>,
    #[serde(deserialize_with = "unit_amounts::deserialize")]
    expenses: BTreeMap<String, Cents>,
    notes: Vec<Note>,
}

impl TryFrom<RawDocument> for Document {
    type Error = LedgerError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let ledger = LedgerAggregate::from_parts(raw.income, raw.expenses)?;
        let (income, expenses) = ledger.into_parts();
        Ok(Self {
            income,
            expenses,
            notes: raw.notes,
        })
    }
}

impl Document {
    /// Assemble the save payload field by field from the live components.
    pub fn from_parts(ledger: &LedgerAggregate, notes: &NoteLog) -> Self {
        Self {
            income: ledger.income().clone(),
            expenses: ledger.expenses().clone(),
            notes: notes.list_notes().to_vec(),
        }
    }

    /// Split the document into the live components the suite works on.
    /// Fails if the ledger maps break the total limit.
    pub fn into_parts(self) -> Result<(LedgerAggregate, NoteLog), LedgerError> {
        Ok((
            LedgerAggregate::from_parts(self.income, self.expenses)?,
            NoteLog::from_notes(self.notes),
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty() && self.notes.is_empty()
    }
}

/// Amounts are cents in memory and non-negative unit numbers on disk.
mod unit_amounts {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::{Cents, cents_to_units, units_to_cents};

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<String, Cents>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (label, cents) in map {
            out.serialize_entry(label, &cents_to_units(*cents))?;
        }
        out.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Cents>, D::Error> {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(label, units)| match units_to_cents(units) {
                Some(cents) if cents >= 0 => Ok((label, cents)),
                _ => Err(D::Error::custom(format!(
                    "amount for '{label}' must be a non-negative number, got {units}"
                ))),
            })
            .collect()
    }
}
