//! Handle to the hosted backend service.
//!
//! Only configuration lives here: building a [`ClientHandle`] validates the
//! endpoint and key and never touches the network. Nothing on the rendering
//! path depends on it; the dashboard carries it as an optional collaborator.
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::fmt;
use tracing::debug;
use url::Url;

use crate::config::BackendConfig;
use crate::error::ConfigurationError;

/// Environment variable holding the backend endpoint url
pub const URL_ENV_VAR: &str = "SPORTSTREAM_BACKEND_URL";

/// Environment variable holding the backend access key
pub const KEY_ENV_VAR: &str = "SPORTSTREAM_BACKEND_KEY";

/// Validated backend connection settings
pub struct ClientHandle {
    endpoint: Url,
    access_key: SecretString,
}

impl ClientHandle {
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn access_key(&self) -> &SecretString {
        &self.access_key
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("endpoint", &self.endpoint.as_str())
            .field("access_key", &"[REDACTED]")
            .finish()
    }
}

/// Build a client handle, failing fast on missing or malformed values
pub fn create_client(url: &str, key: &str) -> Result<ClientHandle, ConfigurationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigurationError::Missing("url"));
    }
    if key.trim().is_empty() {
        return Err(ConfigurationError::Missing("access_key"));
    }

    let endpoint = Url::parse(url).map_err(|e| ConfigurationError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(endpoint.scheme(), "http" | "https") || endpoint.host_str().is_none() {
        return Err(ConfigurationError::InvalidUrl {
            url: url.to_string(),
            reason: "expected an http(s) url with a host".to_string(),
        });
    }

    debug!("Backend client configured for {}", endpoint);
    Ok(ClientHandle {
        endpoint,
        access_key: SecretString::new(key.trim().to_string().into_boxed_str()),
    })
}

/// The two backend values, resolved from the environment and the config file
#[derive(Debug, Clone, Default)]
pub struct BackendSettings {
    pub url: Option<String>,
    pub access_key: Option<SecretString>,
}

impl BackendSettings {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            url: config.url.clone(),
            access_key: config.access_key.clone(),
        }
    }

    /// Config file values overridden by `SPORTSTREAM_BACKEND_*` (a `.env` file is honoured)
    pub fn from_env_and_config(config: &BackendConfig) -> Self {
        dotenv::dotenv().ok();
        Self::from_config(config).with_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from a variable lookup; unset or empty variables are ignored
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(URL_ENV_VAR).filter(|v| !v.is_empty()) {
            self.url = Some(url);
        }
        if let Some(key) = lookup(KEY_ENV_VAR).filter(|v| !v.is_empty()) {
            self.access_key = Some(SecretString::new(key.into_boxed_str()));
        }
        self
    }

    /// Whether either value was provided at all
    pub fn is_configured(&self) -> bool {
        self.url.is_some() || self.access_key.is_some()
    }

    /// One-line summary for `sportstream config`; never includes the key
    pub fn status(&self) -> String {
        if !self.is_configured() {
            return "not configured".to_string();
        }
        match self.connect() {
            Ok(handle) => format!("configured ({})", handle.endpoint()),
            Err(e) => format!("invalid ({})", e),
        }
    }

    pub fn connect(&self) -> Result<ClientHandle, ConfigurationError> {
        let url = self.url.as_deref().ok_or(ConfigurationError::Missing("url"))?;
        let key = self
            .access_key
            .as_ref()
            .ok_or(ConfigurationError::Missing("access_key"))?;
        create_client(url, key.expose_secret())
    }
}
