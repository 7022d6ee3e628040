//! Application Layer
//!
//! Use cases tying the API to the session store, plus reports.

pub mod config;
pub mod report;
pub mod require_login;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use config::GatewayConfig;
pub use require_login::{Gate, RequireLogin};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;
