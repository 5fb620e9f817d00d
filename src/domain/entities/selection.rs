//! Region/locality selection state.
//!
//! All mutations go through [`SelectionState::apply`], which returns the side
//! effect the caller must run (if any). Fetch responses are matched against the
//! latest [`RequestTicket`] issued for their target, so a late response from a
//! superseded request never overwrites newer data.

use std::fmt;

use tracing::debug;

use super::{LocalityName, NavigationParams, RegionCode};
use crate::domain::errors::SelectionError;

/// Sequence number attached to an outgoing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Returns raw sequence number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which option list a fetch populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    /// Region codes.
    Regions,
    /// Localities of the selected region.
    Localities,
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regions => f.write_str("regions"),
            Self::Localities => f.write_str("localities"),
        }
    }
}

/// Last failed fetch that is still relevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Failed target.
    pub target: FetchTarget,
    /// User-facing description.
    pub message: String,
}

/// Inputs to the selection reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Screen was displayed for the first time.
    Initialize,
    /// Region list arrived.
    RegionsLoaded {
        /// Ticket of the originating request.
        ticket: RequestTicket,
        /// Region codes in service order.
        regions: Vec<RegionCode>,
    },
    /// User picked a region; `None` clears it.
    RegionSelected(Option<RegionCode>),
    /// Locality list arrived.
    LocalitiesLoaded {
        /// Ticket of the originating request.
        ticket: RequestTicket,
        /// Locality names in service order.
        localities: Vec<LocalityName>,
    },
    /// User picked a locality; `None` clears it.
    LocalitySelected(Option<LocalityName>),
    /// A fetch failed.
    FetchFailed {
        /// Failed target.
        target: FetchTarget,
        /// Ticket of the originating request.
        ticket: RequestTicket,
        /// User-facing description.
        message: String,
    },
}

impl SelectionEvent {
    /// Region selection from raw user input. Empty input clears the region.
    #[must_use]
    pub fn region(input: &str) -> Self {
        Self::RegionSelected(RegionCode::new(input))
    }

    /// Locality selection from raw user input. Empty input clears the locality.
    #[must_use]
    pub fn locality(input: &str) -> Self {
        Self::LocalitySelected(LocalityName::new(input))
    }
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Fetch all region codes.
    FetchRegions {
        /// Ticket to echo back with the result.
        ticket: RequestTicket,
    },
    /// Fetch localities of a region.
    FetchLocalities {
        /// Region to scope the fetch to.
        region: RegionCode,
        /// Ticket to echo back with the result.
        ticket: RequestTicket,
    },
}

/// Coarse progress of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing chosen yet.
    Unselected,
    /// Region chosen, locality pending.
    RegionSelected,
    /// Both chosen; confirmation may proceed.
    Ready,
}

/// State owned by the selection screen.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    regions: Vec<RegionCode>,
    localities: Vec<LocalityName>,
    selected_region: Option<RegionCode>,
    selected_locality: Option<LocalityName>,
    last_ticket: u64,
    regions_ticket: Option<RequestTicket>,
    localities_ticket: Option<RequestTicket>,
    loading_regions: bool,
    loading_localities: bool,
    failure: Option<FetchFailure>,
}

impl SelectionState {
    /// Creates empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Region options.
    #[must_use]
    pub fn regions(&self) -> &[RegionCode] {
        &self.regions
    }

    /// Locality options for the selected region.
    #[must_use]
    pub fn localities(&self) -> &[LocalityName] {
        &self.localities
    }

    /// Selected region.
    #[must_use]
    pub const fn selected_region(&self) -> Option<&RegionCode> {
        self.selected_region.as_ref()
    }

    /// Selected locality.
    #[must_use]
    pub const fn selected_locality(&self) -> Option<&LocalityName> {
        self.selected_locality.as_ref()
    }

    /// Whether a fetch for the target is in flight.
    #[must_use]
    pub const fn is_loading(&self, target: FetchTarget) -> bool {
        match target {
            FetchTarget::Regions => self.loading_regions,
            FetchTarget::Localities => self.loading_localities,
        }
    }

    /// Most recent relevant fetch failure.
    #[must_use]
    pub const fn failure(&self) -> Option<&FetchFailure> {
        self.failure.as_ref()
    }

    /// Derived phase.
    #[must_use]
    pub const fn phase(&self) -> SelectionPhase {
        match (&self.selected_region, &self.selected_locality) {
            (Some(_), Some(_)) => SelectionPhase::Ready,
            (Some(_), None) => SelectionPhase::RegionSelected,
            (None, _) => SelectionPhase::Unselected,
        }
    }

    /// Validates the selection for navigation.
    ///
    /// # Errors
    /// Returns [`SelectionError::Incomplete`] if either value is missing.
    pub fn confirmation(&self) -> Result<NavigationParams, SelectionError> {
        match (&self.selected_region, &self.selected_locality) {
            (Some(region), Some(locality)) => {
                Ok(NavigationParams::new(region.clone(), locality.clone()))
            }
            (region, locality) => Err(SelectionError::incomplete(
                region.is_none(),
                locality.is_none(),
            )),
        }
    }

    /// Applies an event and returns the effect to run, if any.
    pub fn apply(&mut self, event: SelectionEvent) -> Option<SelectionEffect> {
        match event {
            SelectionEvent::Initialize => {
                let ticket = self.issue_ticket();
                self.regions_ticket = Some(ticket);
                self.loading_regions = true;
                Some(SelectionEffect::FetchRegions { ticket })
            }
            SelectionEvent::RegionsLoaded { ticket, regions } => {
                if !self.is_current(FetchTarget::Regions, ticket) {
                    debug!(%ticket, "Discarding stale regions response");
                    return None;
                }
                self.regions = regions;
                self.loading_regions = false;
                self.clear_failure(FetchTarget::Regions);
                None
            }
            SelectionEvent::RegionSelected(region) => self.select_region(region),
            SelectionEvent::LocalitiesLoaded { ticket, localities } => {
                if !self.is_current(FetchTarget::Localities, ticket) {
                    debug!(%ticket, "Discarding stale localities response");
                    return None;
                }
                self.localities = localities;
                self.loading_localities = false;
                self.clear_failure(FetchTarget::Localities);
                None
            }
            SelectionEvent::LocalitySelected(locality) => {
                self.selected_locality = locality;
                None
            }
            SelectionEvent::FetchFailed {
                target,
                ticket,
                message,
            } => {
                if !self.is_current(target, ticket) {
                    debug!(%target, %ticket, "Ignoring failure of superseded request");
                    return None;
                }
                match target {
                    FetchTarget::Regions => self.loading_regions = false,
                    FetchTarget::Localities => self.loading_localities = false,
                }
                self.failure = Some(FetchFailure { target, message });
                None
            }
        }
    }

    fn select_region(&mut self, region: Option<RegionCode>) -> Option<SelectionEffect> {
        if region == self.selected_region {
            return None;
        }

        self.selected_region = region;
        self.selected_locality = None;
        self.localities.clear();
        self.clear_failure(FetchTarget::Localities);

        if let Some(region) = self.selected_region.clone() {
            let ticket = self.issue_ticket();
            self.localities_ticket = Some(ticket);
            self.loading_localities = true;
            Some(SelectionEffect::FetchLocalities { region, ticket })
        } else {
            self.localities_ticket = None;
            self.loading_localities = false;
            None
        }
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.last_ticket += 1;
        RequestTicket(self.last_ticket)
    }

    fn is_current(&self, target: FetchTarget, ticket: RequestTicket) -> bool {
        let latest = match target {
            FetchTarget::Regions => self.regions_ticket,
            FetchTarget::Localities => self.localities_ticket,
        };
        latest == Some(ticket)
    }

    fn clear_failure(&mut self, target: FetchTarget) {
        if self.failure.as_ref().is_some_and(|f| f.target == target) {
            self.failure = None;
        }
    }
}
