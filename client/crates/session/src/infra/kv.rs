//! Key-Value Session Repository
//!
//! Stores the session as three string entries (token, role, user id) in a
//! [`KeyValueStorage`]. Missing or empty entries mean "no session".

use kernel::id::UserId;
use platform::KeyValueStorage;

use crate::application::config::SessionConfig;
use crate::domain::entity::session::Credentials;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{bearer_token::BearerToken, role::Role};
use crate::error::{SessionError, SessionResult};

/// Session repository over any key-value storage
#[derive(Debug)]
pub struct KvSessionRepository<S> {
    storage: S,
    config: SessionConfig,
}

impl<S: KeyValueStorage> KvSessionRepository<S> {
    pub fn new(storage: S, config: SessionConfig) -> Self {
        if storage.namespace() != config.namespace {
            tracing::debug!(
                storage_namespace = storage.namespace(),
                config_namespace = %config.namespace,
                "Session storage namespace differs from config"
            );
        }
        Self { storage, config }
    }

    /// Underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read_field(&self, key: &str, name: &'static str) -> SessionResult<Option<String>> {
        match self.storage.get(key)? {
            Some(value) if value.trim().is_empty() => Err(SessionError::EmptyField(name)),
            other => Ok(other),
        }
    }
}

impl<S: KeyValueStorage> SessionRepository for KvSessionRepository<S> {
    fn load(&self) -> SessionResult<Option<Credentials>> {
        let token = self.read_field(&self.config.token_key, "token")?;
        let role = self.read_field(&self.config.role_key, "role")?;
        let user_id = self.read_field(&self.config.user_id_key, "user_id")?;

        let (Some(token), Some(role), Some(user_id)) = (token, role, user_id) else {
            return Ok(None);
        };

        let role = Role::from_code(&role)?;

        Ok(Some(Credentials::new(
            role,
            UserId::new(user_id),
            BearerToken::new(token),
        )))
    }

    fn save(&self, credentials: &Credentials) -> SessionResult<()> {
        self.storage.set_many(&[
            (self.config.token_key.as_str(), credentials.token.expose()),
            (self.config.role_key.as_str(), credentials.role.code()),
            (self.config.user_id_key.as_str(), credentials.user_id.as_str()),
        ])?;
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        self.storage.clear()?;
        Ok(())
    }
}
