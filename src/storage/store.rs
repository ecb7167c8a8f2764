use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::domain::Document;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of [`Store::load`]: always a usable document, plus the error that
/// was discarded when the backing file could not be used.
#[derive(Debug)]
pub struct Loaded {
    pub document: Document,
    pub recovered_from: Option<StoreError>,
}

/// JSON-file persistence for the suite's [`Document`].
///
/// The file is opened and closed around every call; no handle is held.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the backing file.
    /// A missing file is a fresh start and yields an empty document.
    pub fn try_load(&self) -> Result<Document, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("no data file at {}, starting fresh", self.path.display());
                return Ok(Document::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let document: Document =
            serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;
        log::info!(
            "loaded {}: {} income, {} expense, {} notes",
            self.path.display(),
            document.income.len(),
            document.expenses.len(),
            document.notes.len()
        );
        Ok(document)
    }

    /// Load the document, never failing: unreadable or malformed content is
    /// discarded and an empty document is returned alongside the error.
    pub fn load(&self) -> Loaded {
        match self.try_load() {
            Ok(document) => Loaded {
                document,
                recovered_from: None,
            },
            Err(err) => {
                log::warn!("discarding unusable data file: {err}");
                Loaded {
                    document: Document::default(),
                    recovered_from: Some(err),
                }
            }
        }
    }

    /// Serialize (4-space pretty JSON) and overwrite the backing file.
    ///
    /// Encoding happens before the file is touched; a failed write is
    /// reported and abandoned.
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = to_pretty_json(document).map_err(StoreError::Encode)?;
        fs::write(&self.path, bytes).map_err(|source| {
            log::error!("save to {} failed: {source}", self.path.display());
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        log::info!("saved {}", self.path.display());
        Ok(())
    }
}

/// Pretty-print with 4-space indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
