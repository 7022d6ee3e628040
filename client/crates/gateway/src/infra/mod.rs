//! Infrastructure Layer
//!
//! HTTP implementation of the API contract.

pub mod http;
