//! Standalone demos shipped next to the suite. They share no state with it.

pub mod animals;
pub mod json_roundtrip;
