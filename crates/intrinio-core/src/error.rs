use thiserror::Error;

use crate::http_client::HttpError;

/// Failure of a single API operation.
///
/// Client-side variants (`MissingParameter`, `MissingApiKey`, `InvalidParameter`)
/// are raised before any network call is attempted.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{operation}: missing required parameter '{parameter}'")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("{operation}: no API key configured")]
    MissingApiKey { operation: &'static str },

    #[error("{operation}: invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        operation: &'static str,
        parameter: &'static str,
        reason: String,
    },

    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: HttpError,
    },

    #[error("{operation}: upstream returned status {status}")]
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("{operation}: failed to deserialize response (status {status}): {source}")]
    Deserialization {
        operation: &'static str,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ApiError {
    /// Builds the error the status hook returns for a non-success response.
    pub fn api(operation: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            operation,
            status,
            body: body.into(),
        }
    }

    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::MissingParameter { operation, .. }
            | Self::MissingApiKey { operation }
            | Self::InvalidParameter { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Api { operation, .. }
            | Self::Deserialization { operation, .. } => Some(operation),
            Self::Runtime(_) => None,
        }
    }

    /// HTTP status carried by the error, when a response was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Deserialization { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the failure happened before any request left the process.
    pub const fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::MissingApiKey { .. } | Self::InvalidParameter { .. }
        )
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => "client.missing_parameter",
            Self::MissingApiKey { .. } => "client.missing_api_key",
            Self::InvalidParameter { .. } => "client.invalid_parameter",
            Self::Transport { .. } => "transport",
            Self::Api { .. } => "api.status",
            Self::Deserialization { .. } => "api.deserialization",
            Self::Runtime(_) => "client.runtime",
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {name} is not valid: '{value}'")]
    InvalidVariable { name: &'static str, value: String },

    #[error("base path must start with http:// or https://: '{value}'")]
    InvalidBasePath { value: String },
}
