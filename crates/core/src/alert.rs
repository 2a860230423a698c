//! Alert records produced by threshold crossings.

use serde::Serialize;
use uuid::Uuid;

use crate::sensor::SensorCategory;
use crate::threshold::{AlertDirection, Threshold};
use crate::types::Timestamp;

/// A single threshold crossing.
///
/// Stores a snapshot of the threshold value that was active at evaluation
/// time, not a live reference — later threshold edits do not change
/// historical alerts. Never mutated or retracted once persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: Uuid,
    /// Canonical metric name (see [`crate::registry`]).
    pub metric: String,
    /// The observed value that triggered the alert.
    pub observed_value: f64,
    /// The threshold value that was crossed.
    pub threshold_value: f64,
    /// The comparison direction that fired.
    pub direction: AlertDirection,
    /// The sensor category owning the metric.
    pub category: SensorCategory,
    /// When the crossing was evaluated.
    pub triggered_at: Timestamp,
}

impl Alert {
    /// Build the record for a crossing of `threshold` by `observed`.
    pub fn new(threshold: &Threshold, observed: f64, now: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            metric: threshold.metric.clone(),
            observed_value: observed,
            threshold_value: threshold.value,
            direction: threshold.direction,
            category: threshold.category,
            triggered_at: now,
        }
    }
}
