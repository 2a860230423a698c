//! Compiled-in metric registry.
//!
//! The canonical table of known metrics: which sensor category owns each
//! one, its valid inclusive range, and whether it can carry an alert
//! threshold. Generation, validation, and threshold configuration are all
//! driven off this table rather than per-sensor subclassing.

use crate::error::CoreError;
use crate::sensor::SensorCategory;

/// Canonical alertable metric names, as accepted by the threshold API.
pub const METRIC_TRAFFIC_DENSITY: &str = "trafficDensity";
pub const METRIC_AVG_SPEED: &str = "avgSpeed";
pub const METRIC_CO: &str = "co";
pub const METRIC_OZONE: &str = "ozone";
pub const METRIC_BRIGHTNESS_LEVEL: &str = "brightnessLevel";
pub const METRIC_POWER_CONSUMPTION: &str = "powerConsumption";

/// A bounded numeric sensor field.
///
/// Every numeric field of every reading variant has an entry; only fields
/// with `alertable = true` are valid threshold metrics.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub alertable: bool,
}

const TRAFFIC_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: METRIC_TRAFFIC_DENSITY,
        min: 0.0,
        max: 500.0,
        alertable: true,
    },
    FieldSpec {
        name: METRIC_AVG_SPEED,
        min: 0.0,
        max: 120.0,
        alertable: true,
    },
];

const AIR_POLLUTION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "pm2_5",
        min: 0.0,
        max: 100.0,
        alertable: false,
    },
    FieldSpec {
        name: "pm10",
        min: 0.0,
        max: 150.0,
        alertable: false,
    },
    FieldSpec {
        name: METRIC_CO,
        min: 0.0,
        max: 50.0,
        alertable: true,
    },
    FieldSpec {
        name: "no2",
        min: 0.0,
        max: 40.0,
        alertable: false,
    },
    FieldSpec {
        name: "so2",
        min: 0.0,
        max: 20.0,
        alertable: false,
    },
    FieldSpec {
        name: METRIC_OZONE,
        min: 0.0,
        max: 300.0,
        alertable: true,
    },
];

const STREET_LIGHT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: METRIC_BRIGHTNESS_LEVEL,
        min: 0.0,
        max: 100.0,
        alertable: true,
    },
    FieldSpec {
        name: METRIC_POWER_CONSUMPTION,
        min: 0.0,
        max: 5000.0,
        alertable: true,
    },
];

/// All numeric field specs for a sensor category, in declaration order.
pub fn fields_of(category: SensorCategory) -> &'static [FieldSpec] {
    match category {
        SensorCategory::Traffic => TRAFFIC_FIELDS,
        SensorCategory::AirPollution => AIR_POLLUTION_FIELDS,
        SensorCategory::StreetLight => STREET_LIGHT_FIELDS,
    }
}

/// Look up the field spec for a bounded numeric field of a category.
///
/// Unlike [`range_of`], this covers non-alertable fields too. Returns
/// `None` when the category has no field by that name.
pub fn field_spec(category: SensorCategory, name: &str) -> Option<&'static FieldSpec> {
    fields_of(category).iter().find(|f| f.name == name)
}

/// Resolve an alertable metric name to its owning category and spec.
///
/// Fails with [`CoreError::UnknownMetric`] for anything outside the fixed
/// alertable set, including bounded but non-alertable fields like `pm2_5`.
pub fn metric(name: &str) -> Result<(SensorCategory, &'static FieldSpec), CoreError> {
    for category in SensorCategory::ALL {
        if let Some(spec) = field_spec(category, name) {
            if spec.alertable {
                return Ok((category, spec));
            }
        }
    }
    Err(CoreError::UnknownMetric(name.to_string()))
}

/// The valid inclusive `(min, max)` range of an alertable metric.
pub fn range_of(name: &str) -> Result<(f64, f64), CoreError> {
    let (_, spec) = metric(name)?;
    Ok((spec.min, spec.max))
}

/// The sensor category that owns an alertable metric.
pub fn category_of(name: &str) -> Result<SensorCategory, CoreError> {
    let (category, _) = metric(name)?;
    Ok(category)
}
