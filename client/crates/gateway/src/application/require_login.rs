//! Login Gate
//!
//! For actions that need an account (booking, wishlist): let the user
//! through, or remember where they were going and ask them to log in.

use std::sync::Arc;

use session::domain::repository::SessionRepository;
use session::{Destination, SessionStore};

/// Gate outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    LoginRequired,
}

pub struct RequireLogin<R: SessionRepository> {
    session: Arc<SessionStore<R>>,
}

impl<R: SessionRepository> RequireLogin<R> {
    pub fn new(session: Arc<SessionStore<R>>) -> Self {
        Self { session }
    }

    /// Remembers `destination` only when login is required
    pub fn guard(&self, destination: Destination) -> Gate {
        if self.session.is_logged_in() {
            return Gate::Proceed;
        }
        self.session.set_after_login_destination(destination);
        Gate::LoginRequired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::MemoryStorage;
    use session::{BearerToken, Role, SessionConfig, UserId};

    #[test]
    fn test_guard() {
        let session = Arc::new(SessionStore::with_storage(
            MemoryStorage::new("villa_session"),
            SessionConfig::default(),
        ));
        let gate = RequireLogin::new(session.clone());

        assert_eq!(gate.guard(Destination::booking_flow("7")), Gate::LoginRequired);
        assert_eq!(
            session.peek_after_login_destination(),
            Some(Destination::booking_flow("7"))
        );

        session.login(Role::Customer, UserId::new("42"), BearerToken::new("abc123"));
        session.consume_after_login_destination();

        assert_eq!(gate.guard(Destination::new("wishlist")), Gate::Proceed);
        assert_eq!(session.peek_after_login_destination(), None);
    }
}
