//! Selection validation errors.

use thiserror::Error;

use crate::domain::notification::{Notification, NotificationLevel};

/// Title of the selection-required alert.
pub const SELECTION_REQUIRED_TITLE: &str = "Oooops....";
/// Message of the selection-required alert.
pub const SELECTION_REQUIRED_MESSAGE: &str = "Por favor, selecione sua região";

/// Selection validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum SelectionError {
    #[error("selection incomplete (region missing: {missing_region}, locality missing: {missing_locality})")]
    Incomplete {
        missing_region: bool,
        missing_locality: bool,
    },
}

impl SelectionError {
    /// Creates incomplete selection error.
    #[must_use]
    pub const fn incomplete(missing_region: bool, missing_locality: bool) -> Self {
        Self::Incomplete {
            missing_region,
            missing_locality,
        }
    }

    /// Builds the blocking notice shown to the user.
    #[must_use]
    pub fn notice(&self) -> Notification {
        match self {
            Self::Incomplete { .. } => Notification::new(
                NotificationLevel::Warn,
                SELECTION_REQUIRED_TITLE,
                SELECTION_REQUIRED_MESSAGE,
            ),
        }
    }
}
