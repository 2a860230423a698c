//! Repository for the `recipients` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::recipient::{CreateRecipient, Recipient};

/// Column list for `recipients` queries.
const COLUMNS: &str = "id, email, name, created_at";

/// Provides operations over the recipient directory.
pub struct RecipientRepo;

impl RecipientRepo {
    /// Register a new recipient. Fails on a duplicate email
    /// (`uq_recipients_email`).
    pub async fn create(pool: &PgPool, dto: &CreateRecipient) -> Result<Recipient, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipients (id, email, name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipient>(&query)
            .bind(Uuid::new_v4())
            .bind(&dto.email)
            .bind(&dto.name)
            .fetch_one(pool)
            .await
    }

    /// The full current recipient population, ordered by registration time.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Recipient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipients ORDER BY created_at");
        sqlx::query_as::<_, Recipient>(&query)
            .fetch_all(pool)
            .await
    }
}
