//! Sign Up Use Case
//!
//! Creates an account. The user still has to sign in afterwards.

use std::sync::Arc;

use crate::domain::api::VillaApi;
use crate::domain::model::auth::{RegisterRequest, RegisterResponse};
use crate::error::ApiResult;

pub struct SignUpUseCase<A: VillaApi> {
    api: Arc<A>,
}

impl<A: VillaApi> SignUpUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, request: RegisterRequest) -> ApiResult<RegisterResponse> {
        let response = self.api.register(&request).await?;
        tracing::info!(role = %request.role, "Account registered");
        Ok(response)
    }
}
