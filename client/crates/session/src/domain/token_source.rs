//! Token Source
//!
//! What the request-signing path needs from the session: the current
//! bearer token, read synchronously.

use std::sync::Arc;

use crate::domain::value_object::bearer_token::BearerToken;

pub trait TokenSource: Send + Sync {
    /// Current bearer token, or `None` when logged out
    fn current_token(&self) -> Option<BearerToken>;
}

impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    fn current_token(&self) -> Option<BearerToken> {
        (**self).current_token()
    }
}

/// Token source for requests that are always anonymous
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenSource for Anonymous {
    fn current_token(&self) -> Option<BearerToken> {
        None
    }
}
