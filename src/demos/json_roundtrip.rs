use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default file the demo writes to, relative to the working directory.
pub const DEFAULT_DEMO_FILE: &str = "data.json";

/// The fixed record written and read back by the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Person {
    pub fn sample() -> Self {
        Self {
            name: "Alice".into(),
            age: 25,
            city: "NY".into(),
        }
    }
}

/// Write `person` to `path` as JSON, then read it back.
pub fn round_trip(path: &Path, person: &Person) -> Result<Person> {
    let json = serde_json::to_string(person)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let loaded = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    log::debug!("json demo round-tripped through {}", path.display());
    Ok(loaded)
}

/// Round-trip the sample person through `path` and render what was read back
/// as the same compact JSON that was written.
pub fn run_demo(path: &Path) -> Result<String> {
    let loaded = round_trip(path, &Person::sample())?;
    Ok(serde_json::to_string(&loaded)?)
}
