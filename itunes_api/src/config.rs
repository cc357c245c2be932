//! Immutable client configuration: base URL and identifying header.

use reqwest::header::HeaderValue;
use url::Url;

use crate::Error;

/// Production endpoint of the iTunes catalog API.
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com/";

/// Value sent as `User-Agent` unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("itunes-rs/", env!("CARGO_PKG_VERSION"));

/// Settings a [`Client`](crate::Client) reads on every request.
///
/// Built once and never mutated afterwards. The `Default` impl points at the
/// production API with the crate's own product/version header.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: Url,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Replaces the base URL. A missing trailing slash is added so that
    /// endpoint names resolve beneath the given path instead of replacing
    /// its last segment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        let mut url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::malformed(base_url, e)
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::malformed(base_url, "URL cannot be used as a base"));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    /// Replaces the `User-Agent` value. Rejects values that are not valid
    /// HTTP header text, such as strings containing control characters.
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, Error> {
        HeaderValue::from_str(user_agent).map_err(|e| Error::InvalidHeader {
            name: "User-Agent",
            value: user_agent.to_string(),
            reason: e.to_string(),
        })?;
        self.user_agent = user_agent.to_string();
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
