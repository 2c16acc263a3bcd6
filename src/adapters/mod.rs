//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer-token session validation
//! - `generators` - Id and clock sources (random/system and fixed)
//! - `http` - axum REST surface
//! - `memory` - In-memory repository
//! - `postgres` - PostgreSQL repository, pool and migrations

pub mod auth;
pub mod generators;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::StaticTokenValidator;
pub use generators::{FixedClock, FixedIdGenerator, SystemClock, UuidIdGenerator};
pub use memory::InMemoryWebinarRepository;
pub use postgres::PostgresWebinarRepository;
