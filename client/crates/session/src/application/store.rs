//! Session Store Service
//!
//! Single source of truth for who is logged in. One instance is created by
//! the composition root and shared (`Arc`) with every component that needs
//! it.
//!
//! ## Consistency
//! - The session is published through a `watch` channel as one immutable
//!   value, so a reader sees either the old or the new session
//! - `login`/`logout`/`initialize` hold `write_lock` across the storage
//!   write and the publish, keeping storage and memory in step
//! - The publish comes after the storage write; a subscriber woken by a
//!   transition already reads the new token through `current_token`

use parking_lot::Mutex;
use tokio::sync::watch;

use kernel::id::UserId;
use platform::KeyValueStorage;

use crate::application::config::SessionConfig;
use crate::application::status::LoginStatus;
use crate::domain::entity::session::{Credentials, Session};
use crate::domain::repository::SessionRepository;
use crate::domain::token_source::TokenSource;
use crate::domain::value_object::{
    bearer_token::BearerToken, destination::Destination, role::Role,
};
use crate::infra::kv::KvSessionRepository;

/// Session store
pub struct SessionStore<R>
where
    R: SessionRepository,
{
    repo: R,
    state: watch::Sender<Session>,
    write_lock: Mutex<()>,
    after_login: Mutex<Option<Destination>>,
}

impl<S: KeyValueStorage> SessionStore<KvSessionRepository<S>> {
    /// Build a store over key-value storage and load any persisted session
    pub fn with_storage(storage: S, config: SessionConfig) -> Self {
        Self::open(KvSessionRepository::new(storage, config))
    }
}

impl<R> SessionStore<R>
where
    R: SessionRepository,
{
    /// Create a logged-out store without touching storage
    ///
    /// Call [`initialize`](Self::initialize) once before use to restore a
    /// persisted session.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: watch::Sender::new(Session::LoggedOut),
            write_lock: Mutex::new(()),
            after_login: Mutex::new(None),
        }
    }

    /// Create the store and restore the persisted session
    pub fn open(repo: R) -> Self {
        let store = Self::new(repo);
        store.initialize();
        store
    }

    /// Reload the session from storage
    ///
    /// Missing, partial or unreadable data all mean logged out. Returns the
    /// resulting logged-in flag.
    pub fn initialize(&self) -> bool {
        let _guard = self.write_lock.lock();

        let restored = match self.repo.load() {
            Ok(Some(credentials)) => {
                tracing::info!(
                    role = %credentials.role,
                    user_id = %credentials.user_id,
                    token_fp = %credentials.token.fingerprint(),
                    "Restored persisted session"
                );
                Session::LoggedIn(credentials)
            }
            Ok(None) => {
                tracing::debug!("No persisted session");
                Session::LoggedOut
            }
            Err(e) => {
                e.log("initialize");
                Session::LoggedOut
            }
        };

        let logged_in = restored.is_logged_in();
        self.publish(restored);
        logged_in
    }

    /// Record a successful authentication
    ///
    /// No network call happens here; the caller has already authenticated.
    /// Persistence is best effort. A blank token or user id is refused and
    /// leaves the session untouched, matching what a restart would restore.
    /// Returns whether the credentials were accepted.
    pub fn login(&self, role: Role, user_id: UserId, token: BearerToken) -> bool {
        self.login_with(Credentials::new(role, user_id, token))
    }

    /// Same as [`login`](Self::login) with prebuilt credentials
    pub fn login_with(&self, credentials: Credentials) -> bool {
        if !credentials.is_complete() {
            tracing::warn!(
                role = %credentials.role,
                user_id = %credentials.user_id,
                "Refused login with blank credentials"
            );
            return false;
        }

        let _guard = self.write_lock.lock();

        if let Err(e) = self.repo.save(&credentials) {
            e.log("login");
        }

        tracing::info!(
            role = %credentials.role,
            user_id = %credentials.user_id,
            token_fp = %credentials.token.fingerprint(),
            "User logged in"
        );

        self.publish(Session::LoggedIn(credentials));
        true
    }

    /// Forget the user, locally and in storage
    ///
    /// Also drops any pending after-login destination. Safe to call when
    /// already logged out.
    pub fn logout(&self) {
        let _guard = self.write_lock.lock();

        self.after_login.lock().take();

        if let Err(e) = self.repo.clear() {
            e.log("logout");
        }

        if self.publish(Session::LoggedOut) {
            tracing::info!("User logged out");
        }
    }

    /// Current bearer token; never blocks on I/O
    pub fn current_token(&self) -> Option<BearerToken> {
        self.state.borrow().token().cloned()
    }

    /// Current session snapshot
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.borrow().role()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.state.borrow().user_id().cloned()
    }

    /// Subscribe to login-state transitions
    pub fn subscribe(&self) -> LoginStatus {
        LoginStatus::new(self.state.subscribe())
    }

    /// Remember where to go once login completes (overwrites)
    pub fn set_after_login_destination(&self, destination: Destination) {
        let previous = self.after_login.lock().replace(destination.clone());
        if let Some(previous) = previous {
            tracing::debug!(%previous, next = %destination, "Replaced pending destination");
        } else {
            tracing::debug!(%destination, "Pending destination set");
        }
    }

    /// Take the pending destination; later calls return `None`
    pub fn consume_after_login_destination(&self) -> Option<Destination> {
        self.after_login.lock().take()
    }

    /// Read the pending destination without consuming it
    pub fn peek_after_login_destination(&self) -> Option<Destination> {
        self.after_login.lock().clone()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Replace the published session; `true` if it changed
    fn publish(&self, next: Session) -> bool {
        self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}

impl<R> TokenSource for SessionStore<R>
where
    R: SessionRepository,
{
    fn current_token(&self) -> Option<BearerToken> {
        SessionStore::current_token(self)
    }
}
