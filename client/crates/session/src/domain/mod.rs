//! Domain Layer
//!
//! Contains the session entity, value objects, and the traits at the
//! persistence and request-signing seams.

pub mod entity;
pub mod repository;
pub mod token_source;
pub mod value_object;

// Re-exports
pub use entity::session::{Credentials, Session};
pub use repository::SessionRepository;
pub use token_source::TokenSource;
