#![allow(dead_code)]
//! In-memory document store, used by the test suite and for running the
//! service without a database. Write latency and failure are injectable so
//! autosave coalescing and error paths can be exercised deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::resume::ResumeDocument;
use crate::persistence::{DocumentStore, StoreError};

#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<Uuid, ResumeDocument>>,
    write_count: AtomicUsize,
    fail_writes: AtomicBool,
    write_delay: Option<Duration>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write sleeps this long before committing, simulating a slow
    /// remote store.
    pub fn with_write_delay(delay: Duration) -> Self {
        MemoryDocumentStore {
            write_delay: Some(delay),
            ..Self::default()
        }
    }

    /// When set, writes fail with `StoreError::Unavailable` until cleared.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes since construction.
    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn write(&self, user_id: Uuid, document: &ResumeDocument) -> Result<(), StoreError> {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store configured to fail writes".to_string(),
            ));
        }
        self.documents
            .write()
            .await
            .insert(user_id, document.clone());
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn read(&self, user_id: Uuid) -> Result<Option<ResumeDocument>, StoreError> {
        Ok(self.documents.read().await.get(&user_id).cloned())
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), StoreError> {
        self.documents.write().await.remove(&user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_absent_returns_none() {
        let store = MemoryDocumentStore::new();
        assert!(store.read(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let store = MemoryDocumentStore::new();
        let user = Uuid::new_v4();
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Ada".to_string();

        store.write(user, &doc).await.unwrap();
        let read = store.read(user).await.unwrap().unwrap();
        assert_eq!(read, doc);
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryDocumentStore::new();
        let user = Uuid::new_v4();
        store.delete(user).await.unwrap();
        store.write(user, &ResumeDocument::default()).await.unwrap();
        store.delete(user).await.unwrap();
        assert!(store.read(user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failing_writes_surface_error() {
        let store = MemoryDocumentStore::new();
        store.set_fail_writes(true);
        let err = store
            .write(Uuid::new_v4(), &ResumeDocument::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(store.write_count(), 0);
    }
}
