//! Total validation of sensor readings against the metric registry.
//!
//! Must run before persistence for both generated and externally submitted
//! readings. A reading that fails here is never stored and never reaches
//! the alert evaluator.

use crate::error::CoreError;
use crate::registry;
use crate::sensor::SensorReading;
use crate::types::Timestamp;

/// Validate every required field of a reading.
///
/// Checks, in order: location non-blank, timestamp not after `now`, every
/// numeric field within its registry bounds (boundary values are valid).
/// Identity and the categorical field are guaranteed structurally — inbound
/// DTOs default a missing id/timestamp before constructing a reading, and
/// the categorical enums cannot be null.
pub fn validate(reading: &SensorReading, now: Timestamp) -> Result<(), CoreError> {
    if reading.location().trim().is_empty() {
        return Err(CoreError::Validation {
            field: "location",
            reason: "must not be blank".to_string(),
        });
    }

    if reading.timestamp() > now {
        return Err(CoreError::Validation {
            field: "timestamp",
            reason: "must not be in the future".to_string(),
        });
    }

    let category = reading.category();
    for (name, value) in reading.numeric_fields() {
        let spec = registry::field_spec(category, name).ok_or_else(|| CoreError::Validation {
            field: "category",
            reason: format!("no registry entry for field '{name}'"),
        })?;
        if value < spec.min || value > spec.max {
            return Err(CoreError::Validation {
                field: spec.name,
                reason: format!(
                    "must be between {} and {}, got {value}",
                    spec.min, spec.max
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{
        AirPollutionReading, CongestionLevel, PollutionLevel, SensorReading, TrafficReading,
    };
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn traffic(density: i32, speed: f64) -> SensorReading {
        SensorReading::Traffic(TrafficReading {
            id: Uuid::new_v4(),
            location: "Street 12".to_string(),
            timestamp: Utc::now(),
            traffic_density: density,
            avg_speed: speed,
            congestion_level: CongestionLevel::Low,
        })
    }

    fn air_with_co(co: f64) -> SensorReading {
        SensorReading::AirPollution(AirPollutionReading {
            id: Uuid::new_v4(),
            location: "Zone 1".to_string(),
            timestamp: Utc::now(),
            pm2_5: 10.0,
            pm10: 20.0,
            co,
            no2: 5.0,
            so2: 2.0,
            ozone: 100.0,
            pollution_level: PollutionLevel::Moderate,
        })
    }

    #[test]
    fn boundary_values_are_valid() {
        validate(&traffic(0, 0.0), Utc::now()).unwrap();
        validate(&traffic(500, 120.0), Utc::now()).unwrap();
        validate(&air_with_co(0.0), Utc::now()).unwrap();
        validate(&air_with_co(50.0), Utc::now()).unwrap();
    }

    #[test]
    fn one_unit_outside_either_bound_fails() {
        assert_matches!(
            validate(&traffic(501, 60.0), Utc::now()),
            Err(CoreError::Validation { field: "trafficDensity", .. })
        );
        assert_matches!(
            validate(&traffic(-1, 60.0), Utc::now()),
            Err(CoreError::Validation { field: "trafficDensity", .. })
        );
        assert_matches!(
            validate(&traffic(100, 121.0), Utc::now()),
            Err(CoreError::Validation { field: "avgSpeed", .. })
        );
    }

    #[test]
    fn out_of_range_co_names_the_field() {
        assert_matches!(
            validate(&air_with_co(55.0), Utc::now()),
            Err(CoreError::Validation { field: "co", .. })
        );
    }

    #[test]
    fn non_alertable_fields_are_still_bounded() {
        let mut reading = match air_with_co(10.0) {
            SensorReading::AirPollution(r) => r,
            _ => unreachable!(),
        };
        reading.pm2_5 = 101.0;
        assert_matches!(
            validate(&SensorReading::AirPollution(reading), Utc::now()),
            Err(CoreError::Validation { field: "pm2_5", .. })
        );
    }

    #[test]
    fn blank_location_fails() {
        let reading = SensorReading::Traffic(TrafficReading {
            id: Uuid::new_v4(),
            location: "   ".to_string(),
            timestamp: Utc::now(),
            traffic_density: 10,
            avg_speed: 30.0,
            congestion_level: CongestionLevel::Low,
        });
        assert_matches!(
            validate(&reading, Utc::now()),
            Err(CoreError::Validation { field: "location", .. })
        );
    }

    #[test]
    fn future_timestamp_fails() {
        let reading = SensorReading::Traffic(TrafficReading {
            id: Uuid::new_v4(),
            location: "Street 1".to_string(),
            timestamp: Utc::now() + Duration::minutes(5),
            traffic_density: 10,
            avg_speed: 30.0,
            congestion_level: CongestionLevel::Low,
        });
        assert_matches!(
            validate(&reading, Utc::now()),
            Err(CoreError::Validation { field: "timestamp", .. })
        );
    }
}
