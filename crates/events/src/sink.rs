//! The notification channel abstraction.

use async_trait::async_trait;

use gridwatch_core::alert::Alert;
use gridwatch_db::models::recipient::Recipient;

/// Boxed error returned by a failed delivery attempt. Each sink has its own
/// concrete error type; the fan-out only logs them.
pub type DeliveryError = Box<dyn std::error::Error + Send + Sync>;

/// A channel capable of delivering an alert to a single recipient.
///
/// Implementations must be cheap to share across tasks; the fan-out holds
/// each sink behind an `Arc` and calls [`deliver`](Self::deliver)
/// concurrently for every recipient.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Short channel name used in log output ("email", "webhook", ...).
    fn name(&self) -> &'static str;

    /// Attempt to deliver `alert` to `recipient`.
    ///
    /// A failure affects this one attempt only; the fan-out continues with
    /// the remaining recipients and sinks.
    async fn deliver(&self, recipient: &Recipient, alert: &Alert) -> Result<(), DeliveryError>;
}
