//! Domain error types.

mod geo_data_error;
mod navigation_error;
mod selection_error;

pub use geo_data_error::GeoDataError;
pub use navigation_error::NavigationError;
pub use selection_error::{SELECTION_REQUIRED_MESSAGE, SELECTION_REQUIRED_TITLE, SelectionError};
