//! Alert recipient rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use gridwatch_core::types::Timestamp;

/// A registered alert recipient.
///
/// The notification fan-out treats the full set of rows as the recipient
/// population at the moment an alert is dispatched.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipient {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for registering a recipient.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipient {
    pub email: String,
    pub name: String,
}
