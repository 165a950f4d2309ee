//! Bearer credentials used to authenticate admin API calls.
//!
//! Token material lives in zeroising memory and never appears in `Debug`
//! output. Logs refer to a token by its truncated SHA-256 fingerprint.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Validation failures for [`AccessToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessTokenValidationError {
    /// Token was blank once trimmed.
    Empty,
}

impl fmt::Display for AccessTokenValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "access token must not be empty"),
        }
    }
}

impl std::error::Error for AccessTokenValidationError {}

/// Opaque bearer token issued by the external session provider.
///
/// ## Invariants
/// - The token is non-empty and carries no surrounding whitespace.
///
/// # Examples
/// ```
/// use content_admin::domain::AccessToken;
///
/// let token = AccessToken::new(" abc.def ").expect("valid token");
/// assert_eq!(token.expose(), "abc.def");
/// assert_eq!(token.fingerprint().len(), 16);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Validate and wrap raw token text.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, AccessTokenValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccessTokenValidationError::Empty);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Raw token text for the `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// `Bearer <token>` header value.
    pub fn bearer_header(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("Bearer {}", self.expose()))
    }

    /// Truncated SHA-256 fingerprint, safe to log.
    ///
    /// Returns the first 8 bytes of the hash as 16 lowercase hex characters.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.expose().as_bytes());
        let digest = hasher.finalize();
        hex::encode(&digest[..FINGERPRINT_BYTES])
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken")
            .field(&self.fingerprint())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_tokens_are_rejected(#[case] raw: &str) {
        assert_eq!(AccessToken::new(raw), Err(AccessTokenValidationError::Empty));
    }

    #[rstest]
    fn bearer_header_prefixes_scheme() {
        let token = AccessToken::new("secret-token").expect("valid token");
        assert_eq!(token.bearer_header().as_str(), "Bearer secret-token");
    }

    #[rstest]
    fn fingerprint_is_stable_lowercase_hex() {
        let token = AccessToken::new("secret-token").expect("valid token");
        let first = token.fingerprint();

        assert_eq!(first, token.fingerprint(), "fingerprint should be deterministic");
        assert_eq!(first.len(), FINGERPRINT_BYTES * 2);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first, first.to_lowercase());
    }

    #[rstest]
    fn different_tokens_have_different_fingerprints() {
        let a = AccessToken::new("token-a").expect("valid token");
        let b = AccessToken::new("token-b").expect("valid token");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[rstest]
    fn debug_output_hides_token_material() {
        let token = AccessToken::new("secret-token").expect("valid token");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains(&token.fingerprint()));
    }
}
