//! Repository for the `air_pollution_sensor_data` table.

use sqlx::PgPool;

use gridwatch_core::sensor::AirPollutionReading;
use gridwatch_core::types::Timestamp;

use crate::models::sensor_data::{AirPollutionReadingRow, ReadingFilter};

/// Column list for `air_pollution_sensor_data` queries.
const COLUMNS: &str = "\
    id, location, recorded_at, pm2_5, pm10, co, no2, so2, ozone, \
    pollution_level, created_at";

/// Provides insert and filtered list operations for air pollution readings.
pub struct AirPollutionReadingRepo;

impl AirPollutionReadingRepo {
    /// Persist a validated air pollution reading.
    pub async fn insert(
        pool: &PgPool,
        reading: &AirPollutionReading,
    ) -> Result<AirPollutionReadingRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO air_pollution_sensor_data \
                (id, location, recorded_at, pm2_5, pm10, co, no2, so2, ozone, pollution_level) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AirPollutionReadingRow>(&query)
            .bind(reading.id)
            .bind(&reading.location)
            .bind(reading.timestamp)
            .bind(reading.pm2_5)
            .bind(reading.pm10)
            .bind(reading.co)
            .bind(reading.no2)
            .bind(reading.so2)
            .bind(reading.ozone)
            .bind(reading.pollution_level.as_str())
            .fetch_one(pool)
            .await
    }

    /// List readings matching the filter, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ReadingFilter,
    ) -> Result<Vec<AirPollutionReadingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM air_pollution_sensor_data \
             WHERE ($1::TEXT IS NULL OR location = $1) \
               AND ($2::TEXT IS NULL OR pollution_level = $2) \
               AND ($3::TIMESTAMPTZ IS NULL OR recorded_at >= $3) \
               AND ($4::TIMESTAMPTZ IS NULL OR recorded_at <= $4) \
             ORDER BY recorded_at DESC \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, AirPollutionReadingRow>(&query)
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
        let result = sqlx::query("DELETE FROM air_pollution_sensor_data WHERE recorded_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
