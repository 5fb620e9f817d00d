//! IBGE localities API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{CityResponse, UfResponse};
use crate::domain::entities::{LocalityName, RegionCode};
use crate::domain::errors::GeoDataError;
use crate::domain::ports::GeoDataPort;

/// Default base URL of the IBGE localities API.
pub const IBGE_API_BASE: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";
const USER_AGENT: &str = concat!("ecoleta/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// IBGE geographic data client.
pub struct IbgeClient {
    client: Client,
    base_url: Url,
}

impl IbgeClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, GeoDataError> {
        Self::with_base_url(IBGE_API_BASE, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, GeoDataError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GeoDataError::unexpected(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(GeoDataError::unexpected(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GeoDataError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GeoDataError> {
        debug!(url = %url, "Requesting geographic data");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(error = %e, "Failed to connect to geographic data service");
            if e.is_timeout() {
                GeoDataError::network("request timed out")
            } else if e.is_connect() {
                GeoDataError::network("failed to connect to IBGE")
            } else {
                GeoDataError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, &url));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, url = %url, "Failed to parse geographic data response");
            GeoDataError::parse(e.to_string())
        })
    }

    fn status_error(status: StatusCode, url: &Url) -> GeoDataError {
        match status {
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                GeoDataError::network("IBGE API is temporarily unavailable")
            }
            _ => GeoDataError::status(status.as_u16(), url.as_str()),
        }
    }
}

#[async_trait]
impl GeoDataPort for IbgeClient {
    async fn fetch_regions(&self) -> Result<Vec<RegionCode>, GeoDataError> {
        let ufs: Vec<UfResponse> = self.get_json(self.endpoint(&["estados"])).await?;
        Ok(ufs
            .into_iter()
            .filter_map(|uf| RegionCode::new(uf.sigla))
            .collect())
    }

    async fn fetch_localities(
        &self,
        region: &RegionCode,
    ) -> Result<Vec<LocalityName>, GeoDataError> {
        let url = self.endpoint(&["estados", region.as_str(), "municipios"]);
        let cities: Vec<CityResponse> = self.get_json(url).await?;
        Ok(cities
            .into_iter()
            .filter_map(|city| LocalityName::new(city.nome))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP response and returns the raw request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).into_owned();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{addr}/api/v1/localidades"), handle)
    }

    fn client(base: &str) -> IbgeClient {
        IbgeClient::with_base_url(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(IbgeClient::new().is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(IbgeClient::with_base_url("not a url", DEFAULT_TIMEOUT).is_err());
        assert!(IbgeClient::with_base_url("mailto:someone", DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn test_region_is_encoded_as_single_segment() {
        let client = client("https://example.test/api/v1/localidades/");
        let region = RegionCode::new("S/P").unwrap();

        let url = client.endpoint(&["estados", region.as_str(), "municipios"]);

        assert_eq!(
            url.as_str(),
            "https://example.test/api/v1/localidades/estados/S%2FP/municipios"
        );
    }

    #[tokio::test]
    async fn test_fetch_regions_extracts_codes() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":35,"sigla":"SP","nome":"São Paulo"},{"id":33,"sigla":"RJ","nome":"Rio de Janeiro"}]"#,
        )
        .await;

        let regions = client(&base).fetch_regions().await.unwrap();

        let codes: Vec<&str> = regions.iter().map(RegionCode::as_str).collect();
        assert_eq!(codes, vec!["SP", "RJ"]);
        assert_eq!(
            server.await.unwrap(),
            "GET /api/v1/localidades/estados HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_fetch_localities_is_scoped_to_region() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":3550308,"nome":"São Paulo"},{"id":3509502,"nome":"Campinas"}]"#,
        )
        .await;

        let localities = client(&base)
            .fetch_localities(&RegionCode::new("SP").unwrap())
            .await
            .unwrap();

        let names: Vec<&str> = localities.iter().map(LocalityName::as_str).collect();
        assert_eq!(names, vec!["São Paulo", "Campinas"]);
        assert_eq!(
            server.await.unwrap(),
            "GET /api/v1/localidades/estados/SP/municipios HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_error_status_is_mapped() {
        let (base, _server) = serve_once("404 Not Found", "[]").await;

        let result = client(&base).fetch_regions().await;

        assert!(matches!(
            result,
            Err(GeoDataError::UnexpectedStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_unavailable_service_is_network_error() {
        let (base, _server) = serve_once("503 Service Unavailable", "").await;

        let result = client(&base).fetch_regions().await;

        assert!(result.unwrap_err().is_network_error());
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (base, _server) = serve_once("200 OK", r#"{"unexpected":true}"#).await;

        let result = client(&base).fetch_regions().await;

        assert!(matches!(result, Err(GeoDataError::ParseError { .. })));
    }
}
