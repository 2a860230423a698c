//! Sensor reading rows and submission DTOs, one table per sensor category.
//!
//! Rows store the categorical field as its stable text form; the domain
//! enums live in `gridwatch_core::sensor`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use gridwatch_core::sensor::{
    AirPollutionReading, CongestionLevel, LightStatus, PollutionLevel, StreetLightReading,
    TrafficReading,
};
use gridwatch_core::types::Timestamp;

// ---------------------------------------------------------------------------
// Traffic
// ---------------------------------------------------------------------------

/// A persisted row of the `traffic_sensor_data` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrafficReadingRow {
    pub id: Uuid,
    pub location: String,
    pub recorded_at: Timestamp,
    pub traffic_density: i32,
    pub avg_speed: f64,
    pub congestion_level: String,
    pub created_at: Timestamp,
}

/// Inbound traffic reading submission.
///
/// `id` and `timestamp` are optional; missing values are defaulted (fresh
/// id, now) before validation rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitTrafficReading {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub location: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    pub traffic_density: i32,
    pub avg_speed: f64,
    pub congestion_level: CongestionLevel,
}

impl SubmitTrafficReading {
    /// Build the domain reading, defaulting a missing id/timestamp.
    pub fn into_reading(self, now: Timestamp) -> TrafficReading {
        TrafficReading {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            location: self.location,
            timestamp: self.timestamp.unwrap_or(now),
            traffic_density: self.traffic_density,
            avg_speed: self.avg_speed,
            congestion_level: self.congestion_level,
        }
    }
}

// ---------------------------------------------------------------------------
// Air pollution
// ---------------------------------------------------------------------------

/// A persisted row of the `air_pollution_sensor_data` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AirPollutionReadingRow {
    pub id: Uuid,
    pub location: String,
    pub recorded_at: Timestamp,
    pub pm2_5: f64,
    pub pm10: f64,
    pub co: f64,
    pub no2: f64,
    pub so2: f64,
    pub ozone: f64,
    pub pollution_level: String,
    pub created_at: Timestamp,
}

/// Inbound air pollution reading submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAirPollutionReading {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub location: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    pub pm2_5: f64,
    pub pm10: f64,
    pub co: f64,
    pub no2: f64,
    pub so2: f64,
    pub ozone: f64,
    pub pollution_level: PollutionLevel,
}

impl SubmitAirPollutionReading {
    /// Build the domain reading, defaulting a missing id/timestamp.
    pub fn into_reading(self, now: Timestamp) -> AirPollutionReading {
        AirPollutionReading {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            location: self.location,
            timestamp: self.timestamp.unwrap_or(now),
            pm2_5: self.pm2_5,
            pm10: self.pm10,
            co: self.co,
            no2: self.no2,
            so2: self.so2,
            ozone: self.ozone,
            pollution_level: self.pollution_level,
        }
    }
}

// ---------------------------------------------------------------------------
// Street light
// ---------------------------------------------------------------------------

/// A persisted row of the `street_light_sensor_data` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StreetLightReadingRow {
    pub id: Uuid,
    pub location: String,
    pub recorded_at: Timestamp,
    pub brightness_level: i32,
    pub power_consumption: f64,
    pub status: String,
    pub created_at: Timestamp,
}

/// Inbound street light reading submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitStreetLightReading {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub location: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    pub brightness_level: i32,
    pub power_consumption: f64,
    pub status: LightStatus,
}

impl SubmitStreetLightReading {
    /// Build the domain reading, defaulting a missing id/timestamp.
    pub fn into_reading(self, now: Timestamp) -> StreetLightReading {
        StreetLightReading {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            location: self.location,
            timestamp: self.timestamp.unwrap_or(now),
            brightness_level: self.brightness_level,
            power_consumption: self.power_consumption,
            status: self.status,
        }
    }
}

// ---------------------------------------------------------------------------
// Query filter
// ---------------------------------------------------------------------------

/// Default page size for reading list queries.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Filter parameters shared by the reading list queries.
///
/// `status` matches the categorical column's text form (e.g. `High`, `On`);
/// an unknown value simply matches nothing.
#[derive(Debug, Clone)]
pub struct ReadingFilter {
    pub location: Option<String>,
    pub status: Option<String>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ReadingFilter {
    fn default() -> Self {
        Self {
            location: None,
            status: None,
            from: None,
            to: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn into_reading_defaults_missing_id_and_timestamp() {
        let now = Utc::now();
        let submit = SubmitTrafficReading {
            id: None,
            location: "Street 9".to_string(),
            timestamp: None,
            traffic_density: 120,
            avg_speed: 55.0,
            congestion_level: CongestionLevel::Moderate,
        };

        let reading = submit.into_reading(now);
        assert_eq!(reading.timestamp, now);
        assert!(!reading.id.is_nil());
    }

    #[test]
    fn into_reading_keeps_supplied_id_and_timestamp() {
        let id = Uuid::new_v4();
        let recorded = Utc::now() - Duration::minutes(5);
        let submit = SubmitStreetLightReading {
            id: Some(id),
            location: "LightPole-3".to_string(),
            timestamp: Some(recorded),
            brightness_level: 70,
            power_consumption: 1400.0,
            status: LightStatus::On,
        };

        let reading = submit.into_reading(Utc::now());
        assert_eq!(reading.id, id);
        assert_eq!(reading.timestamp, recorded);
    }
}
