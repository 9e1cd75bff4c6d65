//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// Application-level failures (`success: false` in a well-formed body) are
/// not errors at this layer; they come back as a normal response value.
#[derive(Debug, Error)]
pub enum Error {
    /// Request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Base URL or endpoint path could not be turned into a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Config file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    ConfigFile {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Request could not be sent or no response arrived in time.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Response body is not JSON of the expected shape.
    #[error("failed to decode response (HTTP {status}): {source}; body: {body}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// The service reported `success: false`.
    #[error("service reported failure: {0}")]
    Application(String),
}

impl Error {
    /// Check if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(e) | Error::ReadBody(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if the service could not be reached.
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_connect())
    }

    /// Check if this is a response decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Name of the phase that failed.
    pub fn phase(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::InvalidUrl(_) | Error::Config(_) => "build",
            Error::ConfigFile { .. } | Error::ConfigParse(_) => "config",
            Error::Transport(_) => "send",
            Error::ReadBody(_) => "read",
            Error::Decode { .. } => "decode",
            Error::Application(_) => "application",
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
