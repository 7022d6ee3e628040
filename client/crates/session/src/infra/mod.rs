//! Infrastructure Layer
//!
//! Persistence implementations.

pub mod kv;

pub use kv::KvSessionRepository;
