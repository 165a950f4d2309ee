//! Driven port for the external session provider.
//!
//! Sign-in happens elsewhere; the data-access layer only asks for the current
//! bearer token and can drop the session. Holding this capability explicitly
//! keeps services free of ambient global state.

use async_trait::async_trait;

use crate::domain::AccessToken;

/// Capability exposing the signed-in operator's credential.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Current bearer token, or `None` when nobody is signed in.
    async fn access_token(&self) -> Option<AccessToken>;

    /// Forget the current session so later calls go out unauthenticated.
    async fn invalidate(&self);
}

/// Session that is never signed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousSession;

#[async_trait]
impl SessionProvider for AnonymousSession {
    async fn access_token(&self) -> Option<AccessToken> {
        None
    }

    async fn invalidate(&self) {}
}
