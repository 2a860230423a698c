//! Repository for the append-only `alerts` table.

use sqlx::PgPool;

use gridwatch_core::alert::Alert;
use gridwatch_core::types::Timestamp;

use crate::models::alert::AlertRow;

/// Column list for `alerts` queries.
const COLUMNS: &str = "\
    id, metric, observed_value, threshold_value, direction, category, \
    triggered_at, created_at";

/// Provides insert and time-window queries for alerts.
///
/// There are no update or delete operations: an alert, once persisted, is
/// never retracted or corrected.
pub struct AlertRepo;

impl AlertRepo {
    /// Persist a new alert record.
    pub async fn insert(pool: &PgPool, alert: &Alert) -> Result<AlertRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts \
                (id, metric, observed_value, threshold_value, direction, category, triggered_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AlertRow>(&query)
            .bind(alert.id)
            .bind(&alert.metric)
            .bind(alert.observed_value)
            .bind(alert.threshold_value)
            .bind(alert.direction.as_str())
            .bind(alert.category.as_str())
            .bind(alert.triggered_at)
            .fetch_one(pool)
            .await
    }

    /// List alerts triggered at or after `since`, newest first.
    pub async fn list_since(pool: &PgPool, since: Timestamp) -> Result<Vec<AlertRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts \
             WHERE triggered_at >= $1 \
             ORDER BY triggered_at DESC"
        );
        sqlx::query_as::<_, AlertRow>(&query)
            .bind(since)
            .fetch_all(pool)
            .await
    }
}
