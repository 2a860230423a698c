//! Request handlers, one module per resource.

pub mod alerts;
pub mod recipients;
pub mod sensors;
pub mod thresholds;
