//! Remote store configuration.
//!
//! # Responsibility
//! - Resolve the stories base URL and optional request timeout.
//! - Normalize the base URL so `/stories/` and `/stories/{id}` resolve correctly.
//!
//! # Invariants
//! - `StoreConfig::base_url` is always `http`/`https` and ends with `/`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use url::Url;

/// Stories endpoint the client talks to when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "https://usmanlive.com/wp-json/api/stories/";
/// Environment key overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "STORYBOARD_BASE_URL";
/// Environment key holding the request timeout in whole seconds (`0` = none).
pub const TIMEOUT_ENV: &str = "STORYBOARD_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl { value: String, message: String },
    InvalidTimeout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl { value, message } => {
                write!(f, "invalid base url `{value}`: {message}")
            }
            Self::InvalidTimeout(value) => {
                write!(f, "invalid timeout `{value}`; expected whole seconds")
            }
        }
    }
}

impl Error for ConfigError {}

/// Connection settings for the remote story store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: Url,
    /// `None` keeps requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl StoreConfig {
    /// Builds a config for an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            request_timeout: None,
        })
    }

    /// Reads overrides from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Config for [`DEFAULT_BASE_URL`] with no timeout.
    pub fn remote_default() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Reads overrides through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::remote_default()?;
        if let Some(value) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            config.base_url = normalize_base_url(&value)?;
        }
        if let Some(value) = lookup(TIMEOUT_ENV) {
            config.request_timeout = parse_timeout(&value)?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Parses and normalizes a stories base URL.
///
/// Appends a trailing `/` so joined ids land under the collection path.
pub fn normalize_base_url(value: &str) -> Result<Url, ConfigError> {
    let trimmed = value.trim();
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
        value: trimmed.to_string(),
        message,
    };

    let mut url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot carry a path".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_timeout(value: &str) -> Result<Option<Duration>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(secs) => Ok(Some(Duration::from_secs(secs))),
        Err(_) => Err(ConfigError::InvalidTimeout(trimmed.to_string())),
    }
}
