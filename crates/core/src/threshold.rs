//! Per-metric alert thresholds and the crossing decision.
//!
//! Pure logic — no database access. The caller fetches the active
//! configuration for a metric and passes it in; absence of a configuration
//! is a defined no-op, not an error.

use serde::{Deserialize, Serialize};

use crate::alert::Alert;
use crate::error::CoreError;
use crate::registry;
use crate::sensor::SensorCategory;
use crate::types::Timestamp;

/// Which side of the threshold raises an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertDirection {
    Above,
    Below,
}

impl AlertDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertDirection::Above => "Above",
            AlertDirection::Below => "Below",
        }
    }
}

impl std::fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlertDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Above" => Ok(AlertDirection::Above),
            "Below" => Ok(AlertDirection::Below),
            other => Err(format!("unknown alert direction '{other}'")),
        }
    }
}

/// An active threshold for one metric, as seen by the evaluator.
///
/// Construction through [`Threshold::new`] guarantees the metric is known
/// and the value lies within its registry range, so evaluation never
/// re-validates threshold sanity.
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    pub metric: String,
    pub value: f64,
    pub direction: AlertDirection,
    pub category: SensorCategory,
}

impl Threshold {
    /// Build a validated threshold.
    ///
    /// Fails with [`CoreError::UnknownMetric`] for names outside the fixed
    /// alertable set and with [`CoreError::InvalidThreshold`] for values
    /// outside the metric's valid range (boundary values are accepted).
    pub fn new(metric: &str, value: f64, direction: AlertDirection) -> Result<Self, CoreError> {
        let (category, spec) = registry::metric(metric)?;
        if value < spec.min || value > spec.max {
            return Err(CoreError::InvalidThreshold {
                metric: metric.to_string(),
                value,
                min: spec.min,
                max: spec.max,
            });
        }
        Ok(Self {
            metric: metric.to_string(),
            value,
            direction,
            category,
        })
    }

    /// Whether an observed value crosses this threshold.
    ///
    /// Strict inequality only — equality never triggers.
    pub fn crossed_by(&self, observed: f64) -> bool {
        match self.direction {
            AlertDirection::Above => observed > self.value,
            AlertDirection::Below => observed < self.value,
        }
    }

    /// Evaluate an observed value, producing an alert record on a crossing.
    ///
    /// The alert snapshots this threshold's value and direction, so later
    /// configuration edits never retroactively change it.
    pub fn evaluate(&self, observed: f64, now: Timestamp) -> Option<Alert> {
        if !self.crossed_by(observed) {
            return None;
        }
        Some(Alert::new(self, observed, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;

    #[test]
    fn above_fires_strictly_above_only() {
        let t = Threshold::new("co", 40.0, AlertDirection::Above).unwrap();
        assert!(t.crossed_by(45.3));
        assert!(!t.crossed_by(40.0), "equality must never trigger");
        assert!(!t.crossed_by(39.9));
    }

    #[test]
    fn below_fires_strictly_below_only() {
        let t = Threshold::new("avgSpeed", 20.0, AlertDirection::Below).unwrap();
        assert!(t.crossed_by(19.99));
        assert!(!t.crossed_by(20.0));
        assert!(!t.crossed_by(20.1));
    }

    #[test]
    fn evaluate_snapshots_the_threshold() {
        let t = Threshold::new("co", 40.0, AlertDirection::Above).unwrap();
        let alert = t.evaluate(45.3, Utc::now()).expect("should trigger");
        assert_eq!(alert.metric, "co");
        assert_eq!(alert.observed_value, 45.3);
        assert_eq!(alert.threshold_value, 40.0);
        assert_eq!(alert.direction, AlertDirection::Above);
        assert_eq!(alert.category, SensorCategory::AirPollution);
    }

    #[test]
    fn evaluate_returns_none_without_a_crossing() {
        let t = Threshold::new("co", 40.0, AlertDirection::Above).unwrap();
        assert!(t.evaluate(40.0, Utc::now()).is_none());
        assert!(t.evaluate(39.9, Utc::now()).is_none());
    }

    #[test]
    fn threshold_values_at_range_boundaries_are_accepted() {
        assert!(Threshold::new("trafficDensity", 0.0, AlertDirection::Above).is_ok());
        assert!(Threshold::new("trafficDensity", 500.0, AlertDirection::Below).is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected_at_construction() {
        assert_matches!(
            Threshold::new("co", 51.0, AlertDirection::Above),
            Err(CoreError::InvalidThreshold { min, max, .. }) if min == 0.0 && max == 50.0
        );
        assert_matches!(
            Threshold::new("co", -0.1, AlertDirection::Below),
            Err(CoreError::InvalidThreshold { .. })
        );
    }

    #[test]
    fn unknown_metric_is_rejected() {
        assert_matches!(
            Threshold::new("humidity", 10.0, AlertDirection::Above),
            Err(CoreError::UnknownMetric(_))
        );
    }

    #[test]
    fn direction_round_trips_its_text_form() {
        assert_eq!("Above".parse::<AlertDirection>().unwrap(), AlertDirection::Above);
        assert_eq!(AlertDirection::Below.as_str(), "Below");
        assert!("Sideways".parse::<AlertDirection>().is_err());
    }
}
