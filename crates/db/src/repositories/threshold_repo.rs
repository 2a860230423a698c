//! Repository for the `threshold_configs` table.

use sqlx::PgPool;
use uuid::Uuid;

use gridwatch_core::threshold::Threshold;

use crate::models::threshold::ThresholdConfigRow;

/// Column list for `threshold_configs` queries.
const COLUMNS: &str = "\
    id, metric, threshold_value, direction, category, created_at, updated_at";

/// Provides query operations for threshold configurations.
pub struct ThresholdRepo;

impl ThresholdRepo {
    /// Upsert the active configuration for a metric.
    ///
    /// If a configuration already exists for `threshold.metric`, its value,
    /// direction, and `updated_at` are overwritten in place — the table
    /// never holds two active configs for the same metric.
    pub async fn upsert(
        pool: &PgPool,
        threshold: &Threshold,
    ) -> Result<ThresholdConfigRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO threshold_configs (id, metric, threshold_value, direction, category) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (metric) \
             DO UPDATE SET \
                threshold_value = EXCLUDED.threshold_value, \
                direction = EXCLUDED.direction, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ThresholdConfigRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&threshold.metric)
            .bind(threshold.value)
            .bind(threshold.direction.as_str())
            .bind(threshold.category.as_str())
            .fetch_one(pool)
            .await
    }

    /// Look up the active configuration for a metric, if any.
    pub async fn find_by_metric(
        pool: &PgPool,
        metric: &str,
    ) -> Result<Option<ThresholdConfigRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM threshold_configs WHERE metric = $1");
        sqlx::query_as::<_, ThresholdConfigRow>(&query)
            .bind(metric)
            .fetch_optional(pool)
            .await
    }

    /// List all active configurations, ordered by metric name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ThresholdConfigRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM threshold_configs ORDER BY metric");
        sqlx::query_as::<_, ThresholdConfigRow>(&query)
            .fetch_all(pool)
            .await
    }
}
