//! Selection confirmation use case.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::entities::{Navigation, Route, SelectionState};
use crate::domain::errors::{NavigationError, SelectionError};
use crate::domain::ports::NavigationPort;

/// Reasons a confirmation did not navigate.
#[derive(Debug, Error)]
pub enum ConfirmError {
    /// Region or locality missing.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Navigator refused the transition.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Validates the selection and hands it off to the `Points` screen.
#[derive(Clone)]
pub struct ConfirmSelectionUseCase {
    navigator: Arc<dyn NavigationPort>,
}

impl ConfirmSelectionUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(navigator: Arc<dyn NavigationPort>) -> Self {
        Self { navigator }
    }

    /// Navigates to `Points` if both region and locality are chosen.
    ///
    /// # Errors
    /// Returns [`ConfirmError::Selection`] without navigating if either value is
    /// missing, or [`ConfirmError::Navigation`] if the navigator is gone.
    pub fn execute(&self, state: &SelectionState) -> Result<Navigation, ConfirmError> {
        let params = state.confirmation().map_err(|e| {
            debug!(error = %e, "Confirmation blocked");
            e
        })?;

        let route = Route::Points;
        self.navigator
            .navigate(route, params.clone())
            .map_err(|e| {
                error!(error = %e, "Navigation failed");
                e
            })?;

        info!(
            route = %route,
            region = %params.selected_uf,
            locality = %params.selected_city,
            "Navigated with selection"
        );

        Ok(Navigation::new(route, params))
    }
}
