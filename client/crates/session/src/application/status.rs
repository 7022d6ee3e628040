//! Login Status Subscription
//!
//! A subscriber handle over the published session. Late subscribers see
//! the latest value immediately; bursts of transitions coalesce to the
//! newest one.

use tokio::sync::watch;

use crate::domain::entity::session::Session;

/// Subscriber to login-state transitions
#[derive(Debug, Clone)]
pub struct LoginStatus {
    rx: watch::Receiver<Session>,
}

impl LoginStatus {
    pub(crate) fn new(rx: watch::Receiver<Session>) -> Self {
        Self { rx }
    }

    /// Current logged-in flag
    pub fn is_logged_in(&self) -> bool {
        self.rx.borrow().is_logged_in()
    }

    /// Current session snapshot
    pub fn session(&self) -> Session {
        self.rx.borrow().clone()
    }

    /// Wait for the next published transition
    ///
    /// Returns the new logged-in flag, or `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().is_logged_in())
    }

    /// Wait until the logged-in flag equals `logged_in`
    ///
    /// Resolves immediately when it already does. Returns `false` if the
    /// store is dropped first.
    pub async fn wait_until(&mut self, logged_in: bool) -> bool {
        self.rx
            .wait_for(|session| session.is_logged_in() == logged_in)
            .await
            .is_ok()
    }
}
