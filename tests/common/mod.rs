// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use productivity_suite::application::SuiteService;
use productivity_suite::cli::Session;
use productivity_suite::game::{GuessingGame, STARTING_LIVES};
use productivity_suite::storage::Store;
use tempfile::TempDir;

/// Secret used by every scripted guessing game.
pub const TEST_SECRET: u32 = 42;

/// Helper to create a temp dir and a store path inside it (file not created)
pub fn test_store() -> Result<(Store, TempDir)> {
    let temp_dir = TempDir::new()?;
    let store = Store::new(temp_dir.path().join("data.json"));
    Ok((store, temp_dir))
}

/// Helper to create a service over an empty temporary store
pub fn test_service() -> Result<(SuiteService, TempDir)> {
    let (store, temp_dir) = test_store()?;
    let (service, recovered) = SuiteService::open(store);
    assert!(recovered.is_none());
    Ok((service, temp_dir))
}

/// Helper to write raw content to the store's backing file
pub fn write_raw(store: &Store, content: &str) -> Result<PathBuf> {
    std::fs::write(store.path(), content)?;
    Ok(store.path().to_path_buf())
}

/// Helper to build a timestamp
pub fn timestamp(date: &str, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// Run an interactive session over `store` with scripted input.
/// Returns the final service state and everything printed.
pub fn run_script(store: Store, script: &str) -> Result<(SuiteService, String)> {
    let mut output = Vec::new();
    let service = Session::open(store, script.as_bytes(), &mut output)?
        .with_game_factory(|| GuessingGame::with_secret(TEST_SECRET, STARTING_LIVES))
        .run()?;
    Ok((service, String::from_utf8(output)?))
}
