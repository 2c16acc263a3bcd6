//! In-memory adapters.

mod webinar_repository;

pub use webinar_repository::InMemoryWebinarRepository;
