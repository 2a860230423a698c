//! Long-running background services spawned by the binary.

pub mod generation;
pub mod reading_retention;
