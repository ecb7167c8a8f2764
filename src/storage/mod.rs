mod store;

pub use store::*;

/// Data file used when no `--data-file` is given, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "productivity_data.json";
