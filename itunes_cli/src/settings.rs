//! Environment-driven client settings.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file by `dotenvy` in `main`.

use std::time::Duration;

use anyhow::{Context, Result};
use itunes_api::{Client, ClientConfig};

pub const BASE_URL_VAR: &str = "ITUNES_BASE_URL";
pub const USER_AGENT_VAR: &str = "ITUNES_USER_AGENT";
pub const TIMEOUT_VAR: &str = "ITUNES_TIMEOUT_SECS";

/// Request timeout when `ITUNES_TIMEOUT_SECS` is unset.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, PartialEq)]
pub struct Settings {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let timeout = match non_empty(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().with_context(|| {
                    format!("{} must be a whole number of seconds", TIMEOUT_VAR)
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };
        Ok(Self {
            base_url: non_empty(BASE_URL_VAR),
            user_agent: non_empty(USER_AGENT_VAR),
            timeout,
        })
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent)?;
        }
        Ok(config)
    }

    /// Builds the API client with a transport that enforces the timeout.
    pub fn build_client(&self) -> Result<Client> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("failed to build HTTP client")?;
        let config = self.client_config()?;
        tracing::debug!(
            base_url = %config.base_url(),
            timeout_secs = self.timeout.as_secs(),
            "client configured"
        );
        Ok(Client::with_config(config, Some(http)))
    }
}
