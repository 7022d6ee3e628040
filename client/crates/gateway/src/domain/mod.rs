//! Domain Layer
//!
//! The remote API contract and the DTOs it speaks.

pub mod api;
pub mod model;
