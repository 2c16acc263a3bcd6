//! In-Memory Webinar Repository Adapter
//!
//! Stores webinars in a map guarded by an async lock.
//! Used by unit and end-to-end tests in place of PostgreSQL.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{RepositoryError, WebinarId};
use crate::domain::webinar::Webinar;
use crate::ports::WebinarRepository;

/// In-memory storage for webinars.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<RwLock<HashMap<WebinarId, Webinar>>>,
}

impl InMemoryWebinarRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a webinar directly, bypassing the port (test seeding).
    pub async fn insert(&self, webinar: Webinar) {
        self.webinars
            .write()
            .await
            .insert(webinar.id().clone(), webinar);
    }

    /// Look up a webinar directly.
    pub async fn get(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars.read().await.get(id).cloned()
    }

    /// Clear all stored data.
    pub async fn clear(&self) {
        self.webinars.write().await.clear();
    }

    /// Number of stored webinars.
    pub async fn len(&self) -> usize {
        self.webinars.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.webinars.read().await.is_empty()
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        let mut webinars = self.webinars.write().await;
        if webinars.contains_key(webinar.id()) {
            return Err(RepositoryError::database(
                "insert webinar",
                format!("duplicate key: {}", webinar.id()),
            ));
        }
        webinars.insert(webinar.id().clone(), webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, RepositoryError> {
        Ok(self.webinars.read().await.get(id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        let mut webinars = self.webinars.write().await;
        match webinars.get_mut(webinar.id()) {
            Some(slot) => {
                *slot = webinar.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(webinar.id().clone())),
        }
    }
}
