//! Repository for the `street_light_sensor_data` table.

use sqlx::PgPool;

use gridwatch_core::sensor::StreetLightReading;
use gridwatch_core::types::Timestamp;

use crate::models::sensor_data::{ReadingFilter, StreetLightReadingRow};

/// Column list for `street_light_sensor_data` queries.
const COLUMNS: &str = "\
    id, location, recorded_at, brightness_level, power_consumption, status, \
    created_at";

/// Provides insert and filtered list operations for street light readings.
pub struct StreetLightReadingRepo;

impl StreetLightReadingRepo {
    /// Persist a validated street light reading.
    pub async fn insert(
        pool: &PgPool,
        reading: &StreetLightReading,
    ) -> Result<StreetLightReadingRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO street_light_sensor_data \
                (id, location, recorded_at, brightness_level, power_consumption, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StreetLightReadingRow>(&query)
            .bind(reading.id)
            .bind(&reading.location)
            .bind(reading.timestamp)
            .bind(reading.brightness_level)
            .bind(reading.power_consumption)
            .bind(reading.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// List readings matching the filter, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ReadingFilter,
    ) -> Result<Vec<StreetLightReadingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM street_light_sensor_data \
             WHERE ($1::TEXT IS NULL OR location = $1) \
               AND ($2::TEXT IS NULL OR status = $2) \
               AND ($3::TIMESTAMPTZ IS NULL OR recorded_at >= $3) \
               AND ($4::TIMESTAMPTZ IS NULL OR recorded_at <= $4) \
             ORDER BY recorded_at DESC \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, StreetLightReadingRow>(&query)
            .bind(&filter.location)
            .bind(&filter.status)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Delete readings recorded before `cutoff`. Returns the rows removed.
    pub async fn delete_older_than(pool: &PgPool, cutoff: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM street_light_sensor_data WHERE recorded_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
