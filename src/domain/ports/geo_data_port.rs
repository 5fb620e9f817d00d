//! Geographic data port definition.

use async_trait::async_trait;

use crate::domain::entities::{LocalityName, RegionCode};
use crate::domain::errors::GeoDataError;

/// Port for the external geographic data service.
#[async_trait]
pub trait GeoDataPort: Send + Sync {
    /// Fetches all first-level region codes, in service order.
    async fn fetch_regions(&self) -> Result<Vec<RegionCode>, GeoDataError>;

    /// Fetches locality names of a region, in service order.
    async fn fetch_localities(&self, region: &RegionCode)
    -> Result<Vec<LocalityName>, GeoDataError>;
}
