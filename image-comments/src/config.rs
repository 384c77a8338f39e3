//! Image comments API configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::http::ReqwestHttpIdentity;

const DEFAULT_BASE_URL: &str = "https://api.image-comments.invalid";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Settings for reaching the image comments API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "IMAGE_COMMENTS_API")]
pub struct ImageCommentsApiSettings {
    /// Base address the `/image/{id}/comments` path is appended to.
    pub base_url: Option<String>,
    /// Request timeout in whole seconds.
    pub timeout_seconds: Option<u64>,
    /// User-agent header override.
    pub user_agent: Option<String>,
}

impl ImageCommentsApiSettings {
    /// Return the configured base URL, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not an absolute URL.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }

    /// Return the request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
                .max(1),
        )
    }

    /// Return the outbound identity, falling back to the adapter default.
    pub fn identity(&self) -> ReqwestHttpIdentity {
        match &self.user_agent {
            Some(user_agent) => ReqwestHttpIdentity {
                user_agent: user_agent.clone(),
            },
            None => ReqwestHttpIdentity::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for API settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ImageCommentsApiSettings {
        ImageCommentsApiSettings::load_from_iter([OsString::from("image-comments")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("IMAGE_COMMENTS_API_BASE_URL", None::<String>),
            ("IMAGE_COMMENTS_API_TIMEOUT_SECONDS", None::<String>),
            ("IMAGE_COMMENTS_API_USER_AGENT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("default URL parses").as_str(),
            "https://api.image-comments.invalid/"
        );
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(
            settings.identity().user_agent,
            ReqwestHttpIdentity::default().user_agent
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("IMAGE_COMMENTS_API_BASE_URL", Some("https://a.com/api".to_owned())),
            ("IMAGE_COMMENTS_API_TIMEOUT_SECONDS", Some("5".to_owned())),
            ("IMAGE_COMMENTS_API_USER_AGENT", Some("comments-cli/2.0".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("override parses").as_str(),
            "https://a.com/api"
        );
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert_eq!(settings.identity().user_agent, "comments-cli/2.0");
    }

    #[rstest]
    fn zero_timeout_is_clamped_to_one_second() {
        let settings = ImageCommentsApiSettings {
            base_url: None,
            timeout_seconds: Some(0),
            user_agent: None,
        };
        assert_eq!(settings.timeout(), Duration::from_secs(1));
    }

    #[rstest]
    fn relative_base_url_is_rejected() {
        let settings = ImageCommentsApiSettings {
            base_url: Some("comments/api".to_owned()),
            timeout_seconds: None,
            user_agent: None,
        };
        assert!(settings.base_url().is_err());
    }
}
