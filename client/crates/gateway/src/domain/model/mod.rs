//! Data transfer objects exchanged with the REST API

pub mod auth;
pub mod booking;
pub mod payment;
pub mod transaction;
pub mod villa;
