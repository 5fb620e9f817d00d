//! Navigation error types.

use thiserror::Error;

use crate::domain::entities::Route;

/// Navigation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum NavigationError {
    #[error("navigation to {route} unavailable: {reason}")]
    Unavailable { route: Route, reason: String },
}

impl NavigationError {
    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(route: Route, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            route,
            reason: reason.into(),
        }
    }
}
