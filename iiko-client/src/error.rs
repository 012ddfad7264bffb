//! Client error types

use iiko_shared::EnvelopeError;
use std::fmt;
use thiserror::Error;

/// Kind of entity a by-id lookup was looking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Role,
    Other(String),
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee => f.write_str("Employee"),
            Self::Role => f.write_str("Role"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

fn server_message_suffix(server_message: &Option<String>) -> String {
    match server_message {
        Some(message) => format!(". Server message: {message}"),
        None => String::new(),
    }
}

fn envelope_errors_suffix(errors: &[EnvelopeError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(": {joined}")
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// By-id lookup answered HTTP 404
    #[error("{entity} with ID {id} not found{}", server_message_suffix(.server_message))]
    NotFound {
        entity: EntityKind,
        id: String,
        server_message: Option<String>,
    },

    /// HTTP 200 but the envelope reports a rejected operation
    #[error("{message}{}", envelope_errors_suffix(.errors))]
    Api {
        message: String,
        errors: Vec<EnvelopeError>,
    },

    /// Login rejected (401/403), or no token in the answer
    #[error("Authentication failed: {message}")]
    Auth { status: Option<u16>, message: String },

    /// Request timed out
    #[error("Timed out waiting for the resto API: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Could not connect
    #[error("Could not connect to the resto API: {0}")]
    Connection(#[source] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String, body: String },

    /// Any other transport failure
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Body could not be parsed or has an unexpected structure
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Arguments rejected before sending anything
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connection(err)
        } else {
            Self::Request(err)
        }
    }
}

impl ClientError {
    pub fn not_found(entity: EntityKind, id: impl Into<String>, server_body: &str) -> Self {
        let trimmed = server_body.trim();
        Self::NotFound {
            entity,
            id: id.into(),
            server_message: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn api(message: impl Into<String>, errors: Vec<EnvelopeError>) -> Self {
        Self::Api {
            message: message.into(),
            errors,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Unexpected body, with a preview of what the server sent
    pub fn invalid_response(reason: impl fmt::Display, body: &str) -> Self {
        Self::InvalidResponse(format!("{reason}. Response: {}", preview(body)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Timeout, connection or other transport failure
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::Request(_)
        )
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Auth { status, .. } => *status,
            _ => None,
        }
    }
}

/// Number of characters of a body quoted in error messages and logs
pub const PREVIEW_CHARS: usize = 200;

/// First [`PREVIEW_CHARS`] characters of a body
pub fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
