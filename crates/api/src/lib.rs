//! GridWatch HTTP API.
//!
//! Exposes the sensor ingestion pipeline over REST: reading submission and
//! synthetic generation, threshold configuration, alert queries, and the
//! recipient directory. The router is built by [`router::build_app_router`]
//! so the binary and integration tests share one middleware stack.

pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
