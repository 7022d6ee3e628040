//! Sign In Use Case
//!
//! Authenticates against the API and records the result in the session
//! store.

use std::sync::Arc;

use kernel::id::UserId;
use session::domain::repository::SessionRepository;
use session::{Destination, Role, SessionStore};

use crate::domain::api::VillaApi;
use crate::domain::model::auth::LoginRequest;
use crate::error::{ApiError, ApiResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone, PartialEq)]
pub struct SignInOutput {
    pub role: Role,
    pub user_id: UserId,
    /// Where the user was headed before being asked to log in
    pub destination: Option<Destination>,
}

/// Sign in use case
pub struct SignInUseCase<A, R>
where
    A: VillaApi,
    R: SessionRepository,
{
    api: Arc<A>,
    session: Arc<SessionStore<R>>,
}

impl<A, R> SignInUseCase<A, R>
where
    A: VillaApi,
    R: SessionRepository,
{
    pub fn new(api: Arc<A>, session: Arc<SessionStore<R>>) -> Self {
        Self { api, session }
    }

    /// On failure the session and the pending destination are left as they were
    pub async fn execute(&self, input: SignInInput) -> ApiResult<SignInOutput> {
        let request = LoginRequest {
            email: input.email,
            password: input.password,
        };

        let response = self.api.login(&request).await.inspect_err(|e| {
            tracing::info!(status = e.status(), "Sign in rejected");
        })?;

        let role = response.role;
        let user_id = response.user_id;
        if !self.session.login(role, user_id.clone(), response.token) {
            return Err(ApiError::Decode(serde::de::Error::custom(
                "login response carried blank credentials",
            )));
        }

        Ok(SignInOutput {
            role,
            user_id,
            destination: self.session.consume_after_login_destination(),
        })
    }
}
