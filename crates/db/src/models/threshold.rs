//! Threshold configuration rows.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use gridwatch_core::error::CoreError;
use gridwatch_core::threshold::Threshold;
use gridwatch_core::types::Timestamp;

/// A persisted row of the `threshold_configs` table.
///
/// At most one row per metric exists; saves upsert in place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThresholdConfigRow {
    pub id: Uuid,
    pub metric: String,
    pub threshold_value: f64,
    pub direction: String,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ThresholdConfigRow {
    /// Rehydrate the evaluator-facing threshold from a stored row.
    ///
    /// Rows are only ever written from validated [`Threshold`]s, so a parse
    /// failure here means the table was tampered with out of band.
    pub fn to_threshold(&self) -> Result<Threshold, CoreError> {
        Ok(Threshold {
            metric: self.metric.clone(),
            value: self.threshold_value,
            direction: self
                .direction
                .parse()
                .map_err(CoreError::Internal)?,
            category: self.category.parse().map_err(CoreError::Internal)?,
        })
    }
}
