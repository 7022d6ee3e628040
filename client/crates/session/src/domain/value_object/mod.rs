//! Value Object Module

pub mod bearer_token;
pub mod destination;
pub mod role;
