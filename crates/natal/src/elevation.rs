//! Elevation lookup used while assembling birth requests.

use async_trait::async_trait;
use natal_config::ElevationSettings;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("Elevation request failed: {0}")]
    Http(String),
    #[error("Elevation request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Elevation service returned no results for ({lat}, {lon})")]
    EmptyResponse { lat: f64, lon: f64 },
}

#[async_trait]
pub trait ElevationService: Send + Sync {
    /// Meters above sea level at the given coordinates.
    async fn elevation(&self, lat: f64, lon: f64) -> Result<f64, ElevationError>;
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: f64,
}

/// Client for Open-Elevation compatible `lookup?locations=lat,lon` endpoints.
#[derive(Debug, Clone)]
pub struct OpenElevationClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl OpenElevationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn from_settings(settings: &ElevationSettings) -> anyhow::Result<Self> {
        Self::new(
            settings.endpoint.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_err(&self, e: reqwest::Error) -> ElevationError {
        if e.is_timeout() {
            ElevationError::Timeout(self.timeout)
        } else {
            ElevationError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl ElevationService for OpenElevationClient {
    async fn elevation(&self, lat: f64, lon: f64) -> Result<f64, ElevationError> {
        let locations = format!("{lat},{lon}");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("locations", locations.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.map_err(e))?;

        let body: LookupResponse = response.json().await.map_err(|e| self.map_err(e))?;
        parse_first_elevation(body, lat, lon)
    }
}

fn parse_first_elevation(body: LookupResponse, lat: f64, lon: f64) -> Result<f64, ElevationError> {
    body.results
        .first()
        .map(|r| r.elevation)
        .ok_or(ElevationError::EmptyResponse { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup_response() {
        let body: LookupResponse = serde_json::from_str(
            r#"{"results":[{"latitude":27.98,"longitude":86.92,"elevation":8729.0}]}"#,
        )
        .unwrap();
        assert_eq!(parse_first_elevation(body, 27.98, 86.92).unwrap(), 8729.0);
    }

    #[test]
    fn test_empty_results() {
        let body: LookupResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(matches!(
            parse_first_elevation(body, 1.0, 2.0),
            Err(ElevationError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_client_from_settings() {
        let settings = ElevationSettings {
            endpoint: "http://localhost:9/lookup".to_string(),
            timeout_secs: 3,
        };
        let client = OpenElevationClient::from_settings(&settings).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9/lookup");
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_lookup() {
        let client = OpenElevationClient::new(
            natal_config::DEFAULT_ELEVATION_ENDPOINT,
            Duration::from_secs(10),
        )
        .unwrap();
        let elev = client.elevation(27.9881, 86.9250).await.unwrap();
        assert!(elev > 8000.0);
    }
}
