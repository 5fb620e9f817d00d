//! Runs selection effects as background fetches.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::use_cases::{LoadLocalitiesUseCase, LoadRegionsUseCase};
use crate::domain::entities::{FetchTarget, SelectionEffect, SelectionEvent};
use crate::domain::ports::GeoDataPort;

/// Spawns fetches for [`SelectionEffect`]s and reports results as events.
///
/// Every reported event carries the ticket of the effect that produced it, so
/// the reducer can discard results of superseded requests.
#[derive(Clone)]
pub struct FetchDispatcher {
    load_regions: LoadRegionsUseCase,
    load_localities: LoadLocalitiesUseCase,
    event_tx: mpsc::UnboundedSender<SelectionEvent>,
}

impl FetchDispatcher {
    /// Creates dispatcher sending results to `event_tx`.
    #[must_use]
    pub fn new(
        geo_port: Arc<dyn GeoDataPort>,
        event_tx: mpsc::UnboundedSender<SelectionEvent>,
    ) -> Self {
        Self {
            load_regions: LoadRegionsUseCase::new(geo_port.clone()),
            load_localities: LoadLocalitiesUseCase::new(geo_port),
            event_tx,
        }
    }

    /// Starts the fetch described by `effect`.
    pub fn dispatch(&self, effect: SelectionEffect) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            let event = this.run(effect).await;
            if this.event_tx.send(event).is_err() {
                debug!("Selection event receiver dropped, discarding fetch result");
            }
        })
    }

    async fn run(&self, effect: SelectionEffect) -> SelectionEvent {
        match effect {
            SelectionEffect::FetchRegions { ticket } => match self.load_regions.execute().await {
                Ok(regions) => SelectionEvent::RegionsLoaded { ticket, regions },
                Err(e) => SelectionEvent::FetchFailed {
                    target: FetchTarget::Regions,
                    ticket,
                    message: e.user_message(),
                },
            },
            SelectionEffect::FetchLocalities { region, ticket } => {
                match self.load_localities.execute(&region).await {
                    Ok(localities) => SelectionEvent::LocalitiesLoaded { ticket, localities },
                    Err(e) => SelectionEvent::FetchFailed {
                        target: FetchTarget::Localities,
                        ticket,
                        message: e.user_message(),
                    },
                }
            }
        }
    }
}
