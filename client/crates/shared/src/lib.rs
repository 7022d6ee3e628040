//! Shared Kernel - Vocabulary shared by every client crate
//!
//! This crate contains the "smallest core" used across the client:
//! - Common error types and result aliases
//! - Typed identifiers for server-issued resources
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
