//! Repository Traits
//!
//! Persistence interface for the session. Implementation is in the
//! infrastructure layer.
//!
//! The methods are synchronous: they touch local storage only, and the
//! request-signing path must never wait on I/O it does not own.

use crate::domain::entity::session::Credentials;
use crate::error::SessionResult;

/// Session persistence
pub trait SessionRepository: Send + Sync {
    /// Load persisted credentials
    ///
    /// `Ok(None)` when nothing (or only part of the credentials) is stored.
    fn load(&self) -> SessionResult<Option<Credentials>>;

    /// Persist credentials, replacing any previous ones
    fn save(&self, credentials: &Credentials) -> SessionResult<()>;

    /// Remove every persisted session value
    fn clear(&self) -> SessionResult<()>;
}
