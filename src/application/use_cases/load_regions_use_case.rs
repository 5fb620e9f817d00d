//! Region list loading use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::RegionCode;
use crate::domain::errors::GeoDataError;
use crate::domain::ports::GeoDataPort;

/// Loads the region options for the first selector.
#[derive(Clone)]
pub struct LoadRegionsUseCase {
    geo_port: Arc<dyn GeoDataPort>,
}

impl LoadRegionsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(geo_port: Arc<dyn GeoDataPort>) -> Self {
        Self { geo_port }
    }

    /// Fetches region codes in service order.
    ///
    /// # Errors
    /// Returns error if the service is unreachable or answers garbage.
    pub async fn execute(&self) -> Result<Vec<RegionCode>, GeoDataError> {
        debug!("Fetching region codes");

        let regions = self.geo_port.fetch_regions().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch region codes");
            e
        })?;

        info!(count = regions.len(), "Region codes loaded");
        Ok(regions)
    }
}
