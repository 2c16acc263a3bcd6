//! Webinar repository port.
//!
//! Defines the contract for persisting and retrieving Webinar aggregates.
//! Implementations own all I/O; the use cases only see this trait.
//!
//! # Design
//!
//! - **Single-row writes**: `update` replaces one row and is the only
//!   atomicity the domain relies on
//! - **No retries**: failures are returned to the caller unchanged

use crate::domain::foundation::{RepositoryError, WebinarId};
use crate::domain::webinar::Webinar;
use async_trait::async_trait;

/// Repository port for Webinar aggregate persistence.
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Save a new webinar.
    ///
    /// # Errors
    ///
    /// - `Database` on persistence failure
    async fn create(&self, webinar: &Webinar) -> Result<(), RepositoryError>;

    /// Find a webinar by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, RepositoryError>;

    /// Update an existing webinar.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the webinar no longer exists
    /// - `Database` on persistence failure
    async fn update(&self, webinar: &Webinar) -> Result<(), RepositoryError>;
}
