//! The reading ingestion pipeline: validate, persist, evaluate, notify.

use std::sync::Arc;

use chrono::Utc;

use gridwatch_core::alert::Alert;
use gridwatch_core::sensor::SensorReading;
use gridwatch_core::validation;
use gridwatch_db::repositories::{
    AirPollutionReadingRepo, AlertRepo, StreetLightReadingRepo, ThresholdRepo, TrafficReadingRepo,
};
use gridwatch_db::DbPool;
use gridwatch_events::AlertFanout;

use crate::error::AppResult;

/// Runs every reading, generated or submitted, through the same path:
/// validate against the metric registry, persist to the category table,
/// evaluate each alertable metric against its configured threshold, and
/// hand any fired alerts to the notification fan-out.
///
/// Threshold reads are not isolated from concurrent threshold writes; an
/// evaluation may see either the old or the new value. Alerts are persisted
/// before fan-out starts, so `/alerts/recent` can return an alert whose
/// notifications are still in flight.
pub struct IngestService {
    pool: DbPool,
    fanout: Arc<AlertFanout>,
}

impl IngestService {
    pub fn new(pool: DbPool, fanout: Arc<AlertFanout>) -> Self {
        Self { pool, fanout }
    }

    /// Ingest one reading end to end. Returns the validated reading and the
    /// alerts it fired.
    ///
    /// Validation failures reject the reading before anything is persisted:
    /// no row, no alert, no notification.
    pub async fn ingest(&self, reading: SensorReading) -> AppResult<(SensorReading, Vec<Alert>)> {
        validation::validate(&reading, Utc::now())?;

        match &reading {
            SensorReading::Traffic(r) => {
                TrafficReadingRepo::insert(&self.pool, r).await?;
            }
            SensorReading::AirPollution(r) => {
                AirPollutionReadingRepo::insert(&self.pool, r).await?;
            }
            SensorReading::StreetLight(r) => {
                StreetLightReadingRepo::insert(&self.pool, r).await?;
            }
        }

        let mut fired = Vec::new();
        for (metric, observed) in reading.alertable_metrics() {
            if let Some(alert) = self.evaluate(metric, observed).await? {
                fired.push(alert);
            }
        }

        Ok((reading, fired))
    }

    /// Evaluate one observed metric value against its configured threshold.
    ///
    /// No configured threshold is a defined no-op. A crossing persists an
    /// alert snapshot and spawns the fan-out without waiting for delivery.
    /// Every crossing produces a new alert; there is no cooldown or
    /// deduplication.
    async fn evaluate(&self, metric: &str, observed: f64) -> AppResult<Option<Alert>> {
        let Some(row) = ThresholdRepo::find_by_metric(&self.pool, metric).await? else {
            return Ok(None);
        };
        let threshold = row.to_threshold()?;

        let Some(alert) = threshold.evaluate(observed, Utc::now()) else {
            return Ok(None);
        };

        AlertRepo::insert(&self.pool, &alert).await?;
        tracing::info!(
            metric,
            observed,
            threshold = threshold.value,
            direction = %threshold.direction,
            "Threshold crossed, alert recorded"
        );

        self.fanout.spawn_notify(alert.clone());

        Ok(Some(alert))
    }
}
