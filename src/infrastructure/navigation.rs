//! Channel-backed navigator.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entities::{Navigation, NavigationParams, Route};
use crate::domain::errors::NavigationError;
use crate::domain::ports::NavigationPort;

/// Navigator that forwards transitions to the application loop.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Navigation>,
}

impl ChannelNavigator {
    /// Creates navigator and the receiver the application loop listens on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Navigation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NavigationPort for ChannelNavigator {
    fn navigate(&self, route: Route, params: NavigationParams) -> Result<(), NavigationError> {
        debug!(route = %route, "Forwarding navigation request");
        self.tx
            .send(Navigation::new(route, params))
            .map_err(|_| NavigationError::unavailable(route, "application loop has stopped"))
    }
}
