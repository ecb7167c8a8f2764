use thiserror::Error;

use crate::domain::{LedgerError, NoteError, ParseCentsError};
use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseCentsError),

    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(String),

    #[error("Amount too large: {0}")]
    AmountTooLarge(#[from] LedgerError),

    #[error("Label cannot be empty")]
    EmptyLabel,

    #[error("Note cannot be empty")]
    EmptyNote,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<NoteError> for AppError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::Empty => AppError::EmptyNote,
        }
    }
}
