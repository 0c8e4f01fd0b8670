//! Configuration for the 5sim client.

use super::errors::{FiveSimError, Result};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Default 5sim API URL.
pub const DEFAULT_API_URL: &str = "https://5sim.net/v1";

/// Environment variable holding the bearer token.
pub const API_TOKEN_ENV: &str = "FIVESIM_API_TOKEN";
/// Environment variable overriding the API URL.
pub const API_URL_ENV: &str = "FIVESIM_API_URL";
/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "FIVESIM_TIMEOUT_SECS";

/// Connection settings for [`FiveSim`](super::FiveSim).
///
/// Built once at startup and injected into the client; rotating the token
/// means building a new client.
///
/// ```rust
/// use sms_leases::five_sim::FiveSimConfig;
/// use std::time::Duration;
///
/// let config = FiveSimConfig::new("token")
///     .unwrap()
///     .with_timeout(Duration::from_secs(20));
/// assert_eq!(config.endpoint().as_str(), "https://5sim.net/v1");
/// ```
#[derive(Clone)]
pub struct FiveSimConfig {
    api_token: SecretString,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for FiveSimConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FiveSimConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FiveSimConfig {
    /// Config with the default endpoint and no request timeout.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        let endpoint = Url::parse(DEFAULT_API_URL).map_err(|_| FiveSimError::BuildRequestUrl {
            endpoint: DEFAULT_API_URL.to_string(),
        })?;

        Ok(Self {
            api_token: SecretString::from(api_token.into()),
            endpoint,
            timeout: None,
        })
    }

    /// Read the config from `FIVESIM_API_TOKEN`, `FIVESIM_API_URL` and
    /// `FIVESIM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let token = lookup(API_TOKEN_ENV)
            .filter(|t| !t.trim().is_empty())
            .ok_or(FiveSimError::MissingConfig { var: API_TOKEN_ENV })?;

        let mut config = Self::new(token.trim())?;

        if let Some(raw) = lookup(API_URL_ENV) {
            let endpoint = Url::parse(raw.trim()).map_err(|e| FiveSimError::InvalidConfig {
                var: API_URL_ENV,
                message: e.to_string(),
            })?;
            config = config.with_endpoint(endpoint);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| FiveSimError::InvalidConfig {
                    var: TIMEOUT_ENV,
                    message: e.to_string(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Use a custom API endpoint.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Apply a timeout to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// API endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn api_token(&self) -> &str {
        self.api_token.expose_secret()
    }
}
