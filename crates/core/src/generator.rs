//! Synthetic sensor reading generation.
//!
//! Values are sampled uniformly within the registry bounds for each field,
//! so a generated reading always passes [`crate::validation::validate`].

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::registry;
use crate::sensor::{
    AirPollutionReading, CongestionLevel, LightStatus, PollutionLevel, SensorCategory,
    SensorReading, StreetLightReading, TrafficReading,
};

/// Produce a synthetic reading for the given category.
///
/// Location is drawn from the category's label pool, the timestamp is now,
/// and the id is a fresh v4 UUID.
pub fn generate(category: SensorCategory) -> SensorReading {
    let mut rng = rand::rng();
    let now = Utc::now();

    match category {
        SensorCategory::Traffic => SensorReading::Traffic(TrafficReading {
            id: Uuid::new_v4(),
            location: format!("Street {}", rng.random_range(1..=100)),
            timestamp: now,
            traffic_density: sample_int(&mut rng, category, registry::METRIC_TRAFFIC_DENSITY),
            avg_speed: sample(&mut rng, category, registry::METRIC_AVG_SPEED),
            congestion_level: *choose(&mut rng, CongestionLevel::ALL),
        }),
        SensorCategory::AirPollution => SensorReading::AirPollution(AirPollutionReading {
            id: Uuid::new_v4(),
            location: format!("Zone {}", rng.random_range(1..=30)),
            timestamp: now,
            pm2_5: sample(&mut rng, category, "pm2_5"),
            pm10: sample(&mut rng, category, "pm10"),
            co: sample(&mut rng, category, registry::METRIC_CO),
            no2: sample(&mut rng, category, "no2"),
            so2: sample(&mut rng, category, "so2"),
            ozone: sample(&mut rng, category, registry::METRIC_OZONE),
            pollution_level: *choose(&mut rng, PollutionLevel::ALL),
        }),
        SensorCategory::StreetLight => SensorReading::StreetLight(StreetLightReading {
            id: Uuid::new_v4(),
            location: format!("LightPole-{}", rng.random_range(0..100)),
            timestamp: now,
            brightness_level: sample_int(&mut rng, category, registry::METRIC_BRIGHTNESS_LEVEL),
            power_consumption: sample(&mut rng, category, registry::METRIC_POWER_CONSUMPTION),
            status: *choose(&mut rng, LightStatus::ALL),
        }),
    }
}

/// Uniform sample within the registry bounds of a float field.
fn sample<R: Rng>(rng: &mut R, category: SensorCategory, field: &str) -> f64 {
    let spec = registry::field_spec(category, field)
        .unwrap_or_else(|| panic!("registry is missing field '{field}' for {category}"));
    rng.random_range(spec.min..=spec.max)
}

/// Uniform sample within the registry bounds of an integer field.
fn sample_int<R: Rng>(rng: &mut R, category: SensorCategory, field: &str) -> i32 {
    let spec = registry::field_spec(category, field)
        .unwrap_or_else(|| panic!("registry is missing field '{field}' for {category}"));
    rng.random_range(spec.min as i32..=spec.max as i32)
}

fn choose<'a, R: Rng, T>(rng: &mut R, values: &'a [T]) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;
    use chrono::Utc;

    #[test]
    fn generated_readings_always_validate() {
        for category in SensorCategory::ALL {
            for _ in 0..100 {
                let reading = generate(category);
                assert_eq!(reading.category(), category);
                validate(&reading, Utc::now()).expect("generated reading must be valid");
            }
        }
    }

    #[test]
    fn generated_values_respect_registry_bounds() {
        for category in SensorCategory::ALL {
            for _ in 0..100 {
                let reading = generate(category);
                for (name, value) in reading.numeric_fields() {
                    let spec = registry::field_spec(category, name).unwrap();
                    assert!(
                        value >= spec.min && value <= spec.max,
                        "{name} = {value} outside [{}, {}]",
                        spec.min,
                        spec.max
                    );
                }
            }
        }
    }

    #[test]
    fn generated_readings_have_fresh_identities() {
        let a = generate(SensorCategory::Traffic);
        let b = generate(SensorCategory::Traffic);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn locations_come_from_the_category_pool() {
        let traffic = generate(SensorCategory::Traffic);
        assert!(traffic.location().starts_with("Street "));
        let air = generate(SensorCategory::AirPollution);
        assert!(air.location().starts_with("Zone "));
        let light = generate(SensorCategory::StreetLight);
        assert!(light.location().starts_with("LightPole-"));
    }
}
