//! API Gateway
//!
//! Clean Architecture structure:
//! - `domain/` - The `VillaApi` contract and the DTOs it exchanges
//! - `application/` - Sign in/up/out use cases, the login gate, reports, config
//! - `infra/` - `reqwest` implementation
//!
//! ## Request contract
//! - Every request reads the current token from a [`session::TokenSource`]
//!   and carries `Authorization: Bearer <token>` when there is one
//! - Every request carries a fresh `X-Request-Id`
//! - A 401/403 is returned to the caller as [`ApiError::Status`]; the
//!   session is never cleared behind the caller's back

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::GatewayConfig;
pub use domain::api::VillaApi;
pub use error::{ApiError, ApiResult};
pub use infra::http::HttpGateway;
