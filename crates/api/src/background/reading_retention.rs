//! Periodic cleanup of old sensor readings.
//!
//! Spawns a background task that deletes reading rows older than the
//! configured retention period from all three category tables. Alerts are
//! an audit trail and are never purged.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use gridwatch_db::repositories::{
    AirPollutionReadingRepo, StreetLightReadingRepo, TrafficReadingRepo,
};

/// Default retention period: 7 days.
const DEFAULT_RETENTION_HOURS: i64 = 168;

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the reading retention cleanup loop.
///
/// Deletes reading rows older than `READING_RETENTION_HOURS` (defaults to
/// 168). Runs until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    let retention_hours: i64 = std::env::var("READING_RETENTION_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RETENTION_HOURS);

    tracing::info!(
        retention_hours,
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Reading retention job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reading retention job stopping");
                break;
            }
            _ = interval.tick() => {
                let cutoff = Utc::now() - chrono::Duration::hours(retention_hours);
                purge(&pool, cutoff).await;
            }
        }
    }
}

async fn purge(pool: &PgPool, cutoff: chrono::DateTime<Utc>) {
    let results = [
        (
            "traffic_sensor_data",
            TrafficReadingRepo::delete_older_than(pool, cutoff).await,
        ),
        (
            "air_pollution_sensor_data",
            AirPollutionReadingRepo::delete_older_than(pool, cutoff).await,
        ),
        (
            "street_light_sensor_data",
            StreetLightReadingRepo::delete_older_than(pool, cutoff).await,
        ),
    ];

    for (table, result) in results {
        match result {
            Ok(deleted) => {
                if deleted > 0 {
                    tracing::info!(table, deleted, "Reading retention: purged old rows");
                } else {
                    tracing::debug!(table, "Reading retention: no rows to purge");
                }
            }
            Err(e) => {
                tracing::error!(table, error = %e, "Reading retention: cleanup failed");
            }
        }
    }
}
