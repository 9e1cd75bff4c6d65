//! Client configuration.
//!
//! Each client is built from a [`ClientConfig`] (base URL + timeout). A
//! [`ServiceConfig`] bundles both clients' settings and can be loaded from a
//! TOML file:
//!
//! ```toml
//! [agent]
//! base_url = "http://localhost:5000"
//! timeout_secs = 30
//!
//! [crew]
//! base_url = "http://localhost:5001"
//! timeout_secs = 120
//! ```
//!
//! Every key is optional; missing keys fall back to the client defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default base URL of the general multi-agent service.
pub const DEFAULT_AGENT_URL: &str = "http://localhost:5000";

/// Default request timeout of the general multi-agent service.
pub const DEFAULT_AGENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default base URL of the CrewAI service.
pub const DEFAULT_CREW_URL: &str = "http://localhost:5001";

/// Default request timeout of the CrewAI service.
///
/// Crew operations run several agents in sequence and are much slower.
pub const DEFAULT_CREW_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config from a base URL and timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Defaults for the general multi-agent service.
    pub fn agent_defaults() -> Self {
        Self::new(DEFAULT_AGENT_URL, DEFAULT_AGENT_TIMEOUT)
    }

    /// Defaults for the CrewAI service.
    pub fn crew_defaults() -> Self {
        Self::new(DEFAULT_CREW_URL, DEFAULT_CREW_TIMEOUT)
    }
}

/// Optional overrides for one service, as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Timeout override in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl EndpointConfig {
    /// Apply these overrides on top of `defaults`.
    pub fn resolve(&self, defaults: ClientConfig) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Settings for both services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// General multi-agent service.
    #[serde(default)]
    pub agent: EndpointConfig,
    /// CrewAI service.
    #[serde(default)]
    pub crew: EndpointConfig,
}

impl ServiceConfig {
    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded service config");
        Ok(config)
    }

    /// Resolved settings for the general multi-agent client.
    pub fn agent(&self) -> ClientConfig {
        self.agent.resolve(ClientConfig::agent_defaults())
    }

    /// Resolved settings for the CrewAI client.
    pub fn crew(&self) -> ClientConfig {
        self.crew.resolve(ClientConfig::crew_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.agent(), ClientConfig::agent_defaults());
        assert_eq!(config.crew().base_url, "http://localhost:5001");
        assert_eq!(config.crew().timeout, Duration::from_secs(120));
        assert_eq!(config.agent().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file() {
        let config = ServiceConfig::from_toml(
            r#"
            [crew]
            base_url = "http://crew.internal:9000"
            "#,
        )
        .unwrap();

        let crew = config.crew();
        assert_eq!(crew.base_url, "http://crew.internal:9000");
        assert_eq!(crew.timeout, DEFAULT_CREW_TIMEOUT);
        assert_eq!(config.agent(), ClientConfig::agent_defaults());
    }

    #[test]
    fn test_timeout_override() {
        let config = ServiceConfig::from_toml("[agent]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.agent().timeout, Duration::from_secs(5));
        assert_eq!(config.agent().base_url, DEFAULT_AGENT_URL);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServiceConfig::from_toml("[agent\nbase_url = 1").unwrap_err();
        assert_eq!(err.phase(), "config");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[agent]\nbase_url = \"http://10.0.0.2:5000\"").unwrap();

        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config.agent().base_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ServiceConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigFile { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
