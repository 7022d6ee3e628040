//! HTTP Gateway
//!
//! `reqwest` implementation of [`VillaApi`]. Each request reads the current
//! token from the [`TokenSource`] right before it is built, so a login or
//! logout applies to the very next call.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Request, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use kernel::id::{BookingId, PaymentId, UserId, VillaId};
use platform::client::{REQUEST_ID_HEADER, bearer_header_value};
use session::TokenSource;

use crate::application::config::GatewayConfig;
use crate::domain::api::VillaApi;
use crate::domain::model::{
    auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile},
    booking::{Booking, NewBooking},
    payment::{NewPayment, Payment},
    transaction::Transaction,
    villa::{NewVilla, Villa, VillaQuery, VillaStatus, VillaStatusChange, VillaUpdate},
};
use crate::error::{ApiError, ApiResult};

/// REST gateway over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpGateway<T> {
    client: Client,
    base_url: Url,
    tokens: T,
}

impl<T: TokenSource> HttpGateway<T> {
    pub fn new(config: &GatewayConfig, tokens: T) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended (each one percent-encoded)
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request carrying a fresh request id and, when logged in,
    /// the bearer header
    fn prepare(&self, method: Method, segments: &[&str]) -> ApiResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        let mut builder = self
            .client
            .request(method, url)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());

        if let Some(token) = self.tokens.current_token() {
            builder = builder.header(AUTHORIZATION, bearer_header_value(token.expose())?);
        }

        Ok(builder)
    }

    /// Send and return the body of a successful response
    async fn dispatch(&self, builder: RequestBuilder) -> ApiResult<Vec<u8>> {
        let request = builder.build()?;
        let endpoint = format!("{} {}", request.method(), request.url().path());

        tracing::debug!(
            endpoint = %endpoint,
            request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default(),
            authenticated = request.headers().contains_key(AUTHORIZATION),
            "Sending request"
        );

        let result = self.round_trip(request).await;
        if let Err(e) = &result {
            e.log(&endpoint);
        }
        result
    }

    async fn round_trip(&self, request: Request) -> ApiResult<Vec<u8>> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }

    async fn fetch<R: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<R> {
        let body = self.dispatch(builder).await?;
        decode(&body)
    }

    async fn send_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.dispatch(builder).await.map(|_| ())
    }
}

/// Decode a payload sent either bare or wrapped as `{"data": ...}`
fn decode<R: DeserializeOwned>(body: &[u8]) -> ApiResult<R> {
    let value: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(body)?
    };

    let payload = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    Ok(serde_json::from_value(payload)?)
}

impl<T: TokenSource> VillaApi for HttpGateway<T> {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let builder = self.prepare(Method::POST, &["auth", "login"])?.json(request);
        self.fetch(builder).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        let builder = self.prepare(Method::POST, &["auth", "register"])?.json(request);
        self.fetch(builder).await
    }

    async fn me(&self) -> ApiResult<UserProfile> {
        self.fetch(self.prepare(Method::GET, &["auth", "me"])?).await
    }

    async fn list_villas(&self, query: &VillaQuery) -> ApiResult<Vec<Villa>> {
        let builder = self.prepare(Method::GET, &["villas"])?.query(query);
        self.fetch(builder).await
    }

    async fn get_villa(&self, id: &VillaId) -> ApiResult<Villa> {
        self.fetch(self.prepare(Method::GET, &["villas", id.as_str()])?)
            .await
    }

    async fn create_villa(&self, villa: &NewVilla) -> ApiResult<Villa> {
        let builder = self.prepare(Method::POST, &["villas"])?.json(villa);
        self.fetch(builder).await
    }

    async fn update_villa(&self, id: &VillaId, update: &VillaUpdate) -> ApiResult<Villa> {
        let builder = self
            .prepare(Method::PUT, &["villas", id.as_str()])?
            .json(update);
        self.fetch(builder).await
    }

    async fn delete_villa(&self, id: &VillaId) -> ApiResult<()> {
        self.send_unit(self.prepare(Method::DELETE, &["villas", id.as_str()])?)
            .await
    }

    async fn owner_villas(&self) -> ApiResult<Vec<Villa>> {
        self.fetch(self.prepare(Method::GET, &["owner", "villas"])?)
            .await
    }

    async fn list_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.fetch(self.prepare(Method::GET, &["bookings"])?).await
    }

    async fn get_booking(&self, id: &BookingId) -> ApiResult<Booking> {
        self.fetch(self.prepare(Method::GET, &["bookings", id.as_str()])?)
            .await
    }

    async fn create_booking(&self, booking: &NewBooking) -> ApiResult<Booking> {
        let builder = self.prepare(Method::POST, &["bookings"])?.json(booking);
        self.fetch(builder).await
    }

    async fn cancel_booking(&self, id: &BookingId) -> ApiResult<Booking> {
        self.fetch(self.prepare(Method::POST, &["bookings", id.as_str(), "cancel"])?)
            .await
    }

    async fn owner_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.fetch(self.prepare(Method::GET, &["owner", "bookings"])?)
            .await
    }

    async fn create_payment(&self, payment: &NewPayment) -> ApiResult<Payment> {
        let builder = self.prepare(Method::POST, &["payments"])?.json(payment);
        self.fetch(builder).await
    }

    async fn get_payment(&self, id: &PaymentId) -> ApiResult<Payment> {
        self.fetch(self.prepare(Method::GET, &["payments", id.as_str()])?)
            .await
    }

    async fn wishlist(&self) -> ApiResult<Vec<Villa>> {
        self.fetch(self.prepare(Method::GET, &["wishlist"])?).await
    }

    async fn add_to_wishlist(&self, villa_id: &VillaId) -> ApiResult<()> {
        self.send_unit(self.prepare(Method::POST, &["wishlist", villa_id.as_str()])?)
            .await
    }

    async fn remove_from_wishlist(&self, villa_id: &VillaId) -> ApiResult<()> {
        self.send_unit(self.prepare(Method::DELETE, &["wishlist", villa_id.as_str()])?)
            .await
    }

    async fn transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.fetch(self.prepare(Method::GET, &["transactions"])?)
            .await
    }

    async fn admin_users(&self) -> ApiResult<Vec<UserProfile>> {
        self.fetch(self.prepare(Method::GET, &["admin", "users"])?)
            .await
    }

    async fn admin_delete_user(&self, id: &UserId) -> ApiResult<()> {
        self.send_unit(self.prepare(Method::DELETE, &["admin", "users", id.as_str()])?)
            .await
    }

    async fn admin_villas(&self) -> ApiResult<Vec<Villa>> {
        self.fetch(self.prepare(Method::GET, &["admin", "villas"])?)
            .await
    }

    async fn admin_set_villa_status(&self, id: &VillaId, status: VillaStatus) -> ApiResult<Villa> {
        let builder = self
            .prepare(Method::PATCH, &["admin", "villas", id.as_str(), "status"])?
            .json(&VillaStatusChange { status });
        self.fetch(builder).await
    }

    async fn admin_transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.fetch(self.prepare(Method::GET, &["admin", "transactions"])?)
            .await
    }
}
