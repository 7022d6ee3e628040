//! Application Layer
//!
//! The session store service and its subscriptions.

pub mod config;
pub mod status;
pub mod store;

// Re-exports
pub use config::SessionConfig;
pub use status::LoginStatus;
pub use store::SessionStore;
