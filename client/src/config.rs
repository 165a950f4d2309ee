//! Client configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::AccessToken;

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid content API URL '{value}': {source}")]
    InvalidApiUrl {
        /// Offending value.
        value: String,
        /// Parse failure.
        source: url::ParseError,
    },
}

/// Connection settings for the content admin API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTENT_ADMIN")]
pub struct AdminSettings {
    /// Base URL of the content API.
    pub api_url: Option<String>,
    /// Bearer token issued by the identity provider.
    pub access_token: Option<String>,
    /// Default page size for list commands.
    #[ortho_config(default = 20)]
    pub page_size: u32,
}

impl AdminSettings {
    /// Parse the configured base URL, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidApiUrl`] when the value does not parse.
    pub fn api_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        Url::parse(raw).map_err(|source| SettingsError::InvalidApiUrl {
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured token; blank values mean nobody is signed in.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.access_token
            .as_deref()
            .and_then(|raw| AccessToken::new(raw).ok())
    }

    /// Configured page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for client configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AdminSettings {
        AdminSettings::load_from_iter([OsString::from("content-admin")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("CONTENT_ADMIN_API_URL", None::<String>),
            ("CONTENT_ADMIN_ACCESS_TOKEN", None::<String>),
            ("CONTENT_ADMIN_PAGE_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_url().expect("default URL parses").as_str(),
            "http://localhost:3000/"
        );
        assert!(settings.access_token().is_none());
        assert_eq!(settings.page_size(), pagination::DEFAULT_PAGE_SIZE);
    }

    #[rstest]
    fn unconfigured_settings_accept_command_line_overrides() {
        let _guard = lock_env([
            ("CONTENT_ADMIN_API_URL", None::<String>),
            ("CONTENT_ADMIN_ACCESS_TOKEN", None::<String>),
            ("CONTENT_ADMIN_PAGE_SIZE", None::<String>),
        ]);

        let mut settings = load_from_empty_args();
        settings.api_url = Some("http://127.0.0.1:1".to_owned());
        settings.access_token = Some("tok".to_owned());

        assert_eq!(
            settings.api_url().expect("override parses").as_str(),
            "http://127.0.0.1:1/"
        );
        assert_eq!(
            settings.access_token().expect("token is present").expose(),
            "tok"
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CONTENT_ADMIN_API_URL", Some("https://cms.example/".to_owned())),
            ("CONTENT_ADMIN_ACCESS_TOKEN", Some(" abc.def ".to_owned())),
            ("CONTENT_ADMIN_PAGE_SIZE", Some("50".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_url().expect("URL parses").as_str(),
            "https://cms.example/"
        );
        let token = settings.access_token().expect("token is present");
        assert_eq!(token.expose(), "abc.def");
        assert_eq!(settings.page_size(), 50);
    }

    #[rstest]
    fn invalid_url_is_reported() {
        let settings = AdminSettings {
            api_url: Some("not a url".to_owned()),
            access_token: None,
            page_size: pagination::DEFAULT_PAGE_SIZE,
        };
        let error = settings.api_url().expect_err("URL must not parse");
        assert!(matches!(error, SettingsError::InvalidApiUrl { .. }));
    }

    #[rstest]
    fn blank_token_means_signed_out() {
        let settings = AdminSettings {
            api_url: None,
            access_token: Some("   ".to_owned()),
            page_size: pagination::DEFAULT_PAGE_SIZE,
        };
        assert!(settings.access_token().is_none());
    }
}
