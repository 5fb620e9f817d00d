//! Locality list loading use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{LocalityName, RegionCode};
use crate::domain::errors::GeoDataError;
use crate::domain::ports::GeoDataPort;

/// Loads the locality options of a region.
#[derive(Clone)]
pub struct LoadLocalitiesUseCase {
    geo_port: Arc<dyn GeoDataPort>,
}

impl LoadLocalitiesUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(geo_port: Arc<dyn GeoDataPort>) -> Self {
        Self { geo_port }
    }

    /// Fetches locality names scoped to `region`.
    ///
    /// # Errors
    /// Returns error if the service is unreachable or answers garbage.
    pub async fn execute(&self, region: &RegionCode) -> Result<Vec<LocalityName>, GeoDataError> {
        debug!(region = %region, "Fetching localities");

        let localities = self.geo_port.fetch_localities(region).await.map_err(|e| {
            warn!(region = %region, error = %e, "Failed to fetch localities");
            e
        })?;

        info!(region = %region, count = localities.len(), "Localities loaded");
        Ok(localities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{GeoCall, MockGeoData};

    #[tokio::test]
    async fn test_fetch_is_scoped_to_region() {
        let port = Arc::new(
            MockGeoData::new(&["SP", "RJ"])
                .with_localities("SP", &["São Paulo", "Campinas"])
                .with_localities("RJ", &["Niterói"]),
        );
        let use_case = LoadLocalitiesUseCase::new(port.clone());

        let localities = use_case
            .execute(&RegionCode::new("SP").unwrap())
            .await
            .unwrap();

        let names: Vec<&str> = localities.iter().map(LocalityName::as_str).collect();
        assert_eq!(names, vec!["São Paulo", "Campinas"]);
        assert_eq!(port.calls(), vec![GeoCall::Localities("SP".to_string())]);
    }

    #[tokio::test]
    async fn test_unknown_region_yields_empty_list() {
        let port = Arc::new(MockGeoData::new(&[]));
        let use_case = LoadLocalitiesUseCase::new(port);

        let localities = use_case
            .execute(&RegionCode::new("ZZ").unwrap())
            .await
            .unwrap();

        assert!(localities.is_empty());
    }
}
