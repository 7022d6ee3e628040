//! Auth DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use kernel::id::UserId;
use session::{BearerToken, Role};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: BearerToken,
    #[serde(deserialize_with = "lenient_role")]
    pub role: Role,
    #[serde(alias = "user_id", alias = "id", deserialize_with = "present_user_id")]
    pub user_id: UserId,
}

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Register response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default, alias = "user_id", alias = "id")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

/// A user as the API describes it (`/auth/me`, `/admin/users`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "lenient_role")]
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accept role codes in any case ("Owner", "ADMIN")
fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Role::from_code(&code).map_err(serde::de::Error::custom)
}

/// A login without a user id cannot be restored later
fn present_user_id<'de, D>(deserializer: D) -> Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    let id = UserId::deserialize(deserializer)?;
    if id.as_str().trim().is_empty() {
        return Err(serde::de::Error::custom("empty user id"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shapes() {
        let camel: LoginResponse =
            serde_json::from_str(r#"{"token":"abc123","role":"customer","userId":"42"}"#).unwrap();
        assert_eq!(camel.token.expose(), "abc123");
        assert_eq!(camel.role, Role::Customer);
        assert_eq!(camel.user_id.as_str(), "42");

        let snake: LoginResponse =
            serde_json::from_str(r#"{"token":"t","role":"Owner","user_id":7}"#).unwrap();
        assert_eq!(snake.role, Role::Owner);
        assert_eq!(snake.user_id.as_str(), "7");
    }

    #[test]
    fn test_login_response_rejects_unknown_role() {
        let result =
            serde_json::from_str::<LoginResponse>(r#"{"token":"t","role":"guest","userId":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_response_rejects_blank_credentials() {
        let no_token =
            serde_json::from_str::<LoginResponse>(r#"{"token":"","role":"customer","userId":"42"}"#);
        assert!(no_token.is_err());

        let no_user =
            serde_json::from_str::<LoginResponse>(r#"{"token":"t","role":"customer","userId":" "}"#);
        assert!(no_user.is_err());
    }

    #[test]
    fn test_register_request_skips_missing_phone() {
        let request = RegisterRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret".into(),
            role: Role::Owner,
            phone: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "owner");
        assert!(json.get("phone").is_none());
    }
}
