//! Application Configuration
//!
//! Where and under which keys the session is persisted.

/// Session store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Storage namespace (one file per namespace with `FileStorage`)
    pub namespace: String,
    /// Key holding the bearer token
    pub token_key: String,
    /// Key holding the role code
    pub role_key: String,
    /// Key holding the user id
    pub user_id_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            namespace: "villa_session".to_string(),
            token_key: "token".to_string(),
            role_key: "role".to_string(),
            user_id_key: "user_id".to_string(),
        }
    }
}

impl SessionConfig {
    /// Separate namespace so development logins never clobber real ones
    pub fn development() -> Self {
        Self {
            namespace: "villa_session_dev".to_string(),
            ..Default::default()
        }
    }

    /// The three persisted keys, in write order
    pub fn keys(&self) -> [&str; 3] {
        [
            self.token_key.as_str(),
            self.role_key.as_str(),
            self.user_id_key.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let config = SessionConfig::default();
        assert_eq!(config.namespace, "villa_session");
        assert_eq!(config.keys(), ["token", "role", "user_id"]);
    }

    #[test]
    fn test_development_namespace() {
        let config = SessionConfig::development();
        assert_eq!(config.namespace, "villa_session_dev");
        assert_eq!(config.token_key, "token");
    }
}
