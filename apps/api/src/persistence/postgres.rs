//! PostgreSQL document store: one JSONB row per user.
//!
//! Schema:
//! ```sql
//! CREATE TABLE resumes (
//!     user_id    UUID PRIMARY KEY,
//!     document   JSONB NOT NULL,
//!     updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::resume::ResumeDocument;
use crate::persistence::{DocumentStore, StoreError};

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        PgDocumentStore { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn write(&self, user_id: Uuid, document: &ResumeDocument) -> Result<(), StoreError> {
        let value = serde_json::to_value(document)?;
        sqlx::query(
            r#"
            INSERT INTO resumes (user_id, document, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (user_id)
            DO UPDATE SET document = EXCLUDED.document, updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(&value)
        .execute(&self.pool)
        .await?;

        debug!(user_id = %user_id, "resume document written");
        Ok(())
    }

    async fn read(&self, user_id: Uuid) -> Result<Option<ResumeDocument>, StoreError> {
        let value: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT document FROM resumes WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        match value {
            // Absent fields fall back to the entity model's serde defaults.
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
