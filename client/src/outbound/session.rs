//! Session adapter backed by a token held in memory.
//!
//! Sign-in is owned by an external identity provider; the operator hands the
//! resulting token to this process through configuration.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::AccessToken;
use crate::domain::ports::SessionProvider;

/// Session whose token is supplied up front and dropped on sign-out.
#[derive(Debug, Default)]
pub struct StaticSession {
    token: RwLock<Option<AccessToken>>,
}

impl StaticSession {
    /// Session holding an optional token.
    pub fn new(token: Option<AccessToken>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    /// Session signed in with `token`.
    pub fn signed_in(token: AccessToken) -> Self {
        Self::new(Some(token))
    }

    /// Session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn access_token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    async fn invalidate(&self) {
        if let Some(token) = self.token.write().await.take() {
            info!(token = %token.fingerprint(), "session invalidated");
        }
    }
}
