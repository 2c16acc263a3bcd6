//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WebinarRepository` - Persistence boundary for webinars
//! - `IdGenerator` - Identifier source for new webinars
//! - `Clock` - Current time
//! - `SessionValidator` - Bearer token to caller identity

mod clock;
mod id_generator;
mod session_validator;
mod webinar_repository;

pub use clock::Clock;
pub use id_generator::IdGenerator;
pub use session_validator::SessionValidator;
pub use webinar_repository::WebinarRepository;
