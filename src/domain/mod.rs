//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// User-facing notices.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{
    LocalityName, Navigation, NavigationParams, RegionCode, Route, SelectionEvent, SelectionState,
};
pub use errors::{GeoDataError, NavigationError, SelectionError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{GeoDataPort, NavigationPort};
