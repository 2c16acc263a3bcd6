//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `static_tokens` - Fixed token table loaded from configuration

mod static_tokens;

pub use static_tokens::StaticTokenValidator;
