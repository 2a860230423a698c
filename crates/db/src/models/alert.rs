//! Alert rows.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use gridwatch_core::types::Timestamp;

/// A persisted row of the append-only `alerts` table.
///
/// Stores a snapshot of the threshold value that was active at evaluation
/// time; never updated after insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlertRow {
    pub id: Uuid,
    pub metric: String,
    pub observed_value: f64,
    pub threshold_value: f64,
    pub direction: String,
    pub category: String,
    pub triggered_at: Timestamp,
    pub created_at: Timestamp,
}
