//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the client:
//! - Durable key-value storage (in-memory and JSON file backends)
//! - Bearer credential headers and request identification
//! - Token fingerprints for logging without leaking credentials

pub mod client;
pub mod crypto;
pub mod file_storage;
pub mod storage;

pub use file_storage::FileStorage;
pub use storage::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};
