//! Navigation route and hand-off payload.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LocalityName, RegionCode};

/// Screens reachable from the region picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Collection points listing for the chosen locality.
    Points,
}

impl Route {
    /// Returns route name used by the navigation contract.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Points => "Points",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters carried to the `Points` screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationParams {
    /// Selected region code.
    pub selected_uf: RegionCode,
    /// Selected locality name.
    pub selected_city: LocalityName,
}

impl NavigationParams {
    /// Creates navigation parameters.
    #[must_use]
    pub const fn new(selected_uf: RegionCode, selected_city: LocalityName) -> Self {
        Self {
            selected_uf,
            selected_city,
        }
    }
}

/// A completed navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    /// Target route.
    pub route: Route,
    /// Route parameters.
    pub params: NavigationParams,
}

impl Navigation {
    /// Creates navigation payload.
    #[must_use]
    pub const fn new(route: Route, params: NavigationParams) -> Self {
        Self { route, params }
    }
}
