//! Domain entity definitions.

mod navigation;
mod region;
mod selection;

pub use navigation::{Navigation, NavigationParams, Route};
pub use region::{LocalityName, RegionCode};
pub use selection::{
    FetchFailure, FetchTarget, RequestTicket, SelectionEffect, SelectionEvent, SelectionPhase,
    SelectionState,
};
