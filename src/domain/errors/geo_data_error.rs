//! Geographic data service error types.

use thiserror::Error;

/// Errors raised while fetching regions or localities.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum GeoDataError {
    #[error("network error while contacting geographic data service: {message}")]
    NetworkError { message: String },

    #[error("geographic data service answered {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("failed to parse geographic data response: {message}")]
    ParseError { message: String },

    #[error("unexpected geographic data error: {message}")]
    Unexpected { message: String },
}

impl GeoDataError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates unexpected status error.
    #[must_use]
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Creates parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }

    /// Short message suitable for the status bar.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkError { .. } => "Could not reach the IBGE service".to_string(),
            Self::UnexpectedStatus { status, .. } => format!("IBGE service answered HTTP {status}"),
            Self::ParseError { .. } => "IBGE service sent an unreadable response".to_string(),
            Self::Unexpected { message } => message.clone(),
        }
    }
}
