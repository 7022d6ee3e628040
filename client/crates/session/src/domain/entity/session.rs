//! Session Entity
//!
//! The current authentication state of the client. Either nobody is
//! logged in, or a complete set of credentials is present.

use kernel::id::UserId;

use crate::domain::value_object::{bearer_token::BearerToken, role::Role};

/// Credentials of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub role: Role,
    pub user_id: UserId,
    pub token: BearerToken,
}

impl Credentials {
    pub fn new(role: Role, user_id: UserId, token: BearerToken) -> Self {
        Self {
            role,
            user_id,
            token,
        }
    }

    /// Both the token and the user id carry text
    pub fn is_complete(&self) -> bool {
        !self.token.is_blank() && !self.user_id.as_str().trim().is_empty()
    }
}

/// Session snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Credentials),
}

impl Session {
    #[inline]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Session::LoggedIn(credentials) => Some(credentials),
            Session::LoggedOut => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.credentials().map(|c| c.role)
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.credentials().map(|c| &c.user_id)
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.credentials().map(|c| &c.token)
    }
}

impl From<Credentials> for Session {
    fn from(credentials: Credentials) -> Self {
        Session::LoggedIn(credentials)
    }
}
