//! Request identification utilities
//!
//! Header helpers shared by the API gateway (which writes them) and test
//! servers (which read them back).

use http::header::{self, InvalidHeaderValue};
use http::{HeaderMap, HeaderValue};

/// Header carrying a per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const BEARER_PREFIX: &str = "Bearer ";

/// Build an `Authorization: Bearer <token>` header value
///
/// The value is flagged sensitive so `http`'s `Debug` output hides it.
///
/// ## Returns
/// * `Err(InvalidHeaderValue)` - token contains characters not allowed in headers
pub fn bearer_header_value(token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(&format!("{BEARER_PREFIX}{token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Extract the bearer token from request headers
///
/// The scheme is matched case-insensitively; anything other than a
/// non-empty bearer credential yields `None`.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = raw.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// User-Agent string for this client
pub fn user_agent(app: &str, version: &str) -> String {
    format!("{app}/{version} ({})", std::env::consts::OS)
}
