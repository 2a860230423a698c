//! Periodic synthetic reading generation.
//!
//! Each tick generates one reading per sensor category and runs it through
//! the full ingestion pipeline, exactly as an HTTP submission would be.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use gridwatch_core::generator;
use gridwatch_core::sensor::SensorCategory;

use crate::pipeline::IngestService;

/// Run the generation loop until `cancel` is triggered.
///
/// A failure for one category is logged and does not stop the tick or the
/// loop; the remaining categories still run.
pub async fn run(pipeline: Arc<IngestService>, interval_secs: u64, cancel: CancellationToken) {
    tracing::info!(interval_secs, "Generation scheduler started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Generation scheduler stopping");
                break;
            }
            _ = interval.tick() => {
                tick(&pipeline).await;
            }
        }
    }
}

/// One scheduler tick: generate and ingest a reading per category.
async fn tick(pipeline: &IngestService) {
    for category in SensorCategory::ALL {
        let reading = generator::generate(category);
        match pipeline.ingest(reading).await {
            Ok((reading, alerts)) => {
                tracing::debug!(
                    category = %category,
                    location = reading.location(),
                    alerts_fired = alerts.len(),
                    "Generated reading ingested"
                );
            }
            Err(e) => {
                tracing::error!(category = %category, error = %e, "Generated reading rejected");
            }
        }
    }
}
