//! GridWatch domain core.
//!
//! Pure domain logic for the IoT monitoring backend — no database access,
//! no HTTP. The caller (the `gridwatch-api` pipeline) is responsible for
//! persistence and notification dispatch.
//!
//! - [`registry`] — compiled-in metric table: names, valid ranges, sensor
//!   categories.
//! - [`sensor`] — the three sensor reading variants and their field tables.
//! - [`generator`] — synthetic reading generation.
//! - [`validation`] — total reading validation against registry bounds.
//! - [`threshold`] — per-metric alert configuration and the crossing
//!   decision.
//! - [`alert`] — the immutable alert record produced by a crossing.

pub mod alert;
pub mod error;
pub mod generator;
pub mod registry;
pub mod sensor;
pub mod threshold;
pub mod types;
pub mod validation;
