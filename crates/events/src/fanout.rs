//! Alert fan-out to recipients across all configured channels.

use std::sync::Arc;

use futures::future::join_all;

use gridwatch_core::alert::Alert;
use gridwatch_db::models::recipient::Recipient;
use gridwatch_db::repositories::RecipientRepo;
use gridwatch_db::DbPool;

use crate::sink::NotificationSink;

/// Dispatches each alert to every (recipient, sink) pair.
///
/// The recipient directory is snapshotted once per alert, at fan-out start;
/// recipients added while a fan-out is in flight receive the next alert, not
/// this one. Individual delivery failures are logged and swallowed so that
/// one unreachable channel never blocks the rest.
pub struct AlertFanout {
    pool: DbPool,
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl AlertFanout {
    pub fn new(pool: DbPool, sinks: Vec<Arc<dyn NotificationSink>>) -> Self {
        Self { pool, sinks }
    }

    /// Number of configured channels.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Snapshot the recipient directory and dispatch `alert` to everyone.
    ///
    /// Returns the number of delivery attempts made. Only the recipient
    /// lookup can fail; delivery errors are logged per attempt.
    pub async fn notify_all(&self, alert: &Alert) -> Result<usize, sqlx::Error> {
        if self.sinks.is_empty() {
            return Ok(0);
        }
        let recipients = RecipientRepo::list_all(&self.pool).await?;
        Ok(self.dispatch(alert, &recipients).await)
    }

    /// Deliver `alert` to every recipient over every sink, concurrently.
    ///
    /// Returns the number of attempts (`recipients × sinks`).
    pub async fn dispatch(&self, alert: &Alert, recipients: &[Recipient]) -> usize {
        let mut attempts = Vec::with_capacity(recipients.len() * self.sinks.len());
        for recipient in recipients {
            for sink in &self.sinks {
                attempts.push(async move {
                    if let Err(e) = sink.deliver(recipient, alert).await {
                        tracing::warn!(
                            sink = sink.name(),
                            recipient = %recipient.email,
                            metric = %alert.metric,
                            error = %e,
                            "Alert delivery failed"
                        );
                    }
                });
            }
        }
        let count = attempts.len();
        join_all(attempts).await;
        count
    }

    /// Fire-and-forget fan-out on a background task.
    ///
    /// The HTTP request (or scheduler tick) that triggered the alert does
    /// not wait for deliveries to complete.
    pub fn spawn_notify(self: &Arc<Self>, alert: Alert) {
        let fanout = Arc::clone(self);
        tokio::spawn(async move {
            match fanout.notify_all(&alert).await {
                Ok(attempts) => {
                    tracing::debug!(
                        metric = %alert.metric,
                        attempts,
                        "Alert fan-out complete"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        metric = %alert.metric,
                        error = %e,
                        "Failed to load recipients for alert fan-out"
                    );
                }
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
