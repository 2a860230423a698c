//! Sensor reading types.
//!
//! Each sensor category is a tagged variant of [`SensorReading`] carrying
//! its typed field set. Generic behavior (generation, validation, alert
//! evaluation) iterates the numeric fields through
//! [`SensorReading::numeric_fields`] together with the registry field
//! table, so nothing dispatches on the concrete variant beyond this module.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The three sensor kinds the platform ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorCategory {
    Traffic,
    AirPollution,
    StreetLight,
}

impl SensorCategory {
    pub const ALL: [SensorCategory; 3] = [
        SensorCategory::Traffic,
        SensorCategory::AirPollution,
        SensorCategory::StreetLight,
    ];

    /// Stable identifier used in the database and in API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            SensorCategory::Traffic => "traffic",
            SensorCategory::AirPollution => "air_pollution",
            SensorCategory::StreetLight => "street_light",
        }
    }
}

impl std::fmt::Display for SensorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SensorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traffic" => Ok(SensorCategory::Traffic),
            "air_pollution" => Ok(SensorCategory::AirPollution),
            "street_light" => Ok(SensorCategory::StreetLight),
            other => Err(format!("unknown sensor category '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Categorical field enums
// ---------------------------------------------------------------------------

macro_rules! categorical_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $text:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Stable identifier used in the database and in API payloads.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(format!(
                        concat!("unknown ", stringify!($name), " '{}'"),
                        other
                    )),
                }
            }
        }
    };
}

categorical_enum! {
    /// Congestion classification reported by traffic sensors.
    CongestionLevel {
        Low => "Low",
        Moderate => "Moderate",
        High => "High",
        Severe => "Severe",
    }
}

categorical_enum! {
    /// Air quality classification reported by pollution sensors.
    PollutionLevel {
        Good => "Good",
        Moderate => "Moderate",
        Unhealthy => "Unhealthy",
        VeryUnhealthy => "VeryUnhealthy",
        Hazardous => "Hazardous",
    }
}

categorical_enum! {
    /// Operational state of a street light.
    LightStatus {
        On => "On",
        Off => "Off",
    }
}

// ---------------------------------------------------------------------------
// Reading variants
// ---------------------------------------------------------------------------

/// A traffic sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficReading {
    pub id: Uuid,
    pub location: String,
    pub timestamp: Timestamp,
    pub traffic_density: i32,
    pub avg_speed: f64,
    pub congestion_level: CongestionLevel,
}

/// An air pollution sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionReading {
    pub id: Uuid,
    pub location: String,
    pub timestamp: Timestamp,
    pub pm2_5: f64,
    pub pm10: f64,
    pub co: f64,
    pub no2: f64,
    pub so2: f64,
    pub ozone: f64,
    pub pollution_level: PollutionLevel,
}

/// A street light sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetLightReading {
    pub id: Uuid,
    pub location: String,
    pub timestamp: Timestamp,
    pub brightness_level: i32,
    pub power_consumption: f64,
    pub status: LightStatus,
}

/// A sensor reading of any category.
///
/// Immutable once persisted; updates are not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum SensorReading {
    Traffic(TrafficReading),
    AirPollution(AirPollutionReading),
    StreetLight(StreetLightReading),
}

impl SensorReading {
    pub fn category(&self) -> SensorCategory {
        match self {
            SensorReading::Traffic(_) => SensorCategory::Traffic,
            SensorReading::AirPollution(_) => SensorCategory::AirPollution,
            SensorReading::StreetLight(_) => SensorCategory::StreetLight,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            SensorReading::Traffic(r) => r.id,
            SensorReading::AirPollution(r) => r.id,
            SensorReading::StreetLight(r) => r.id,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            SensorReading::Traffic(r) => &r.location,
            SensorReading::AirPollution(r) => &r.location,
            SensorReading::StreetLight(r) => &r.location,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            SensorReading::Traffic(r) => r.timestamp,
            SensorReading::AirPollution(r) => r.timestamp,
            SensorReading::StreetLight(r) => r.timestamp,
        }
    }

    /// All bounded numeric fields, in registry declaration order.
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        match self {
            SensorReading::Traffic(r) => vec![
                (registry::METRIC_TRAFFIC_DENSITY, f64::from(r.traffic_density)),
                (registry::METRIC_AVG_SPEED, r.avg_speed),
            ],
            SensorReading::AirPollution(r) => vec![
                ("pm2_5", r.pm2_5),
                ("pm10", r.pm10),
                (registry::METRIC_CO, r.co),
                ("no2", r.no2),
                ("so2", r.so2),
                (registry::METRIC_OZONE, r.ozone),
            ],
            SensorReading::StreetLight(r) => vec![
                (
                    registry::METRIC_BRIGHTNESS_LEVEL,
                    f64::from(r.brightness_level),
                ),
                (registry::METRIC_POWER_CONSUMPTION, r.power_consumption),
            ],
        }
    }

    /// The alert-eligible `(metric, value)` pairs of this reading — two per
    /// category, filtered through the registry's alertable flag.
    pub fn alertable_metrics(&self) -> Vec<(&'static str, f64)> {
        let specs = registry::fields_of(self.category());
        self.numeric_fields()
            .into_iter()
            .filter(|(name, _)| {
                specs
                    .iter()
                    .any(|spec| spec.name == *name && spec.alertable)
            })
            .collect()
    }
}

impl From<TrafficReading> for SensorReading {
    fn from(r: TrafficReading) -> Self {
        SensorReading::Traffic(r)
    }
}

impl From<AirPollutionReading> for SensorReading {
    fn from(r: AirPollutionReading) -> Self {
        SensorReading::AirPollution(r)
    }
}

impl From<StreetLightReading> for SensorReading {
    fn from(r: StreetLightReading) -> Self {
        SensorReading::StreetLight(r)
    }
}
