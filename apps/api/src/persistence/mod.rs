//! Persistence collaborator: a per-user document store.
//!
//! The core treats the document as opaque for transport; anything read back
//! passes through the entity model's defensive serde defaults, so a document
//! written by an older build (absent collections, missing record ids) still
//! loads cleanly.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::ResumeDocument;

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Upserts the user's document.
    async fn write(&self, user_id: Uuid, document: &ResumeDocument) -> Result<(), StoreError>;

    /// Reads the user's document; `None` when the user has never saved.
    async fn read(&self, user_id: Uuid) -> Result<Option<ResumeDocument>, StoreError>;

    /// Deletes the user's document. Deleting an absent document succeeds.
    async fn delete(&self, user_id: Uuid) -> Result<(), StoreError>;
}
