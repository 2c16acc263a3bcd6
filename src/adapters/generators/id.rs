//! Identifier generator adapters.

use uuid::Uuid;

use crate::domain::foundation::WebinarId;
use crate::ports::IdGenerator;

/// Production generator: random UUID v4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> WebinarId {
        WebinarId::from_uuid(Uuid::new_v4())
    }
}

/// Deterministic generator for tests: returns the same id on every call.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    id: WebinarId,
}

impl FixedIdGenerator {
    /// Default fixture id.
    pub const DEFAULT_ID: &'static str = "id-1";

    pub fn new(id: WebinarId) -> Self {
        Self { id }
    }
}

impl Default for FixedIdGenerator {
    fn default() -> Self {
        Self {
            id: WebinarId::from_static(Self::DEFAULT_ID),
        }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> WebinarId {
        self.id.clone()
    }
}
