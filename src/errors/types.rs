//! Error types for the Bark client
//!
//! Every failure the client can report maps onto one of these variants, grouped
//! by where it happens: configuration, input validation, request construction,
//! the network exchange, or the remote verdict.

use std::path::PathBuf;
use thiserror::Error;

/// Main library error type
#[derive(Error, Debug)]
pub enum BarkError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unknown configuration key: {key}. Valid keys are: {valid}")]
    UnknownConfigKey { key: String, valid: String },

    #[error("Invalid configuration value for '{key}': {value}")]
    InvalidConfigValue {
        key: String,
        value: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Validation errors
    #[error("Notification body is required")]
    EmptyBody,

    // Request construction errors
    #[error("Failed to create request for '{target}'")]
    InvalidTarget {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Network errors
    #[error("Failed to send request")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request timed out")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request cancelled")]
    Cancelled,

    // Remote rejection
    #[error("Unexpected status code: {status_code}")]
    UnexpectedStatus { status_code: u16 },

    // I/O and serialization errors
    #[error("File I/O error for '{path}': {operation}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("TOML parsing error: {context}")]
    TomlParsing {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using BarkError
pub type BarkResult<T> = Result<T, BarkError>;

impl BarkError {
    /// Create a new Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an InvalidConfigValue error for a dotted config key
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a request-construction error for a malformed target
    pub fn invalid_target(
        target: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            source: Box::new(source),
        }
    }

    /// Create a new I/O error with source
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Status code carried by a remote rejection
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status_code } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether the failure happened on the wire rather than at the remote end
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Cancelled
        )
    }

    /// Get the error category for logging at the call site
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } | Self::UnknownConfigKey { .. } | Self::InvalidConfigValue { .. } => {
                "config"
            }
            Self::EmptyBody => "validation",
            Self::InvalidTarget { .. } => "request",
            Self::Transport { .. } | Self::Timeout { .. } | Self::Cancelled => "transport",
            Self::UnexpectedStatus { .. } => "remote",
            Self::Io { .. } => "io",
            Self::TomlParsing { .. } => "serialization",
        }
    }
}

impl From<reqwest::Error> for BarkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            let target = err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            Self::InvalidTarget {
                target,
                source: Box::new(err),
            }
        } else if err.is_timeout() {
            Self::Timeout { source: err }
        } else {
            Self::Transport { source: err }
        }
    }
}

impl From<toml::de::Error> for BarkError {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlParsing {
            context: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<toml::ser::Error> for BarkError {
    fn from(err: toml::ser::Error) -> Self {
        Self::TomlParsing {
            context: "failed to serialize config".to_string(),
            source: Some(Box::new(err)),
        }
    }
}
