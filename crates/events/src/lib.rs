//! GridWatch alert notification infrastructure.
//!
//! When a sensor reading crosses a configured threshold, the resulting
//! [`Alert`](gridwatch_core::alert::Alert) is pushed out to every registered
//! recipient over every configured channel:
//!
//! - [`NotificationSink`] — the channel abstraction (one delivery attempt
//!   per recipient per alert).
//! - [`delivery`] — concrete sinks (SMTP email, HTTP webhook).
//! - [`AlertFanout`] — snapshots the recipient directory and dispatches an
//!   alert to every (recipient, sink) pair concurrently.

pub mod delivery;
pub mod fanout;
pub mod sink;

pub use delivery::email::{EmailConfig, EmailSink};
pub use delivery::webhook::WebhookSink;
pub use fanout::AlertFanout;
pub use sink::{DeliveryError, NotificationSink};
