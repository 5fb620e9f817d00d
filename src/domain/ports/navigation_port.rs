//! Navigation port definition.

use crate::domain::entities::{NavigationParams, Route};
use crate::domain::errors::NavigationError;

/// Port for moving to another screen.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationPort: Send + Sync {
    /// Transitions to `route` carrying `params`.
    ///
    /// # Errors
    /// Returns error if the navigator can no longer accept transitions.
    fn navigate(&self, route: Route, params: NavigationParams) -> Result<(), NavigationError>;
}
