//! Sign Out Use Case
//!
//! Local only: there is no server-side session to revoke.

use std::sync::Arc;

use session::SessionStore;
use session::domain::repository::SessionRepository;

pub struct SignOutUseCase<R: SessionRepository> {
    session: Arc<SessionStore<R>>,
}

impl<R: SessionRepository> SignOutUseCase<R> {
    pub fn new(session: Arc<SessionStore<R>>) -> Self {
        Self { session }
    }

    /// Forget credentials and any pending destination; returns whether a
    /// user was logged in
    pub fn execute(&self) -> bool {
        let was_logged_in = self.session.is_logged_in();
        self.session.logout();
        was_logged_in
    }
}
