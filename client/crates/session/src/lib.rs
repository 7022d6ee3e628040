//! Session Store
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, value objects, repository and token-source traits
//! - `application/` - The session store service, login-status subscriptions, config
//! - `infra/` - Key-value storage persistence
//!
//! ## Model
//! - A session is either `LoggedOut` or `LoggedIn(Credentials)`; a
//!   partially populated session cannot be expressed
//! - The current session is published as one immutable snapshot, so
//!   readers never observe a half-applied login
//! - Credentials survive restarts through the key-value storage; the
//!   after-login destination lives in memory only
//! - Storage failures never reach callers; the worst case is having to
//!   log in again

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::status::LoginStatus;
pub use application::store::SessionStore;
pub use domain::entity::session::{Credentials, Session};
pub use domain::token_source::TokenSource;
pub use domain::value_object::{bearer_token::BearerToken, destination::Destination, role::Role};
pub use error::{SessionError, SessionResult};
pub use infra::kv::KvSessionRepository;

pub use kernel::id::UserId;
