//! Underground model HTTP client.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::UndergroundApi;
use super::error::UndergroundError;
use super::types::{ErrorReply, RouteSegment, StationInfo};

/// Default base URL for the underground model service.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration for the underground client.
#[derive(Debug, Clone)]
pub struct UndergroundConfig {
    /// Base URL for the service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl UndergroundConfig {
    /// Create a config pointing at the default local service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for UndergroundConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the underground model service.
///
/// Station and line names are interpolated into the request path as-is;
/// only URL-level percent-encoding is applied, and name validation is
/// left to the backend.
#[derive(Debug, Clone)]
pub struct UndergroundClient {
    http: reqwest::Client,
    base_url: String,
}

impl UndergroundClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UndergroundConfig) -> Result<Self, UndergroundError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Issue one GET request and decode the reply.
    ///
    /// The backend reports failures in-band as an `{"error": ...}` body
    /// with a 400 status, so the error shape is checked before the status
    /// code is consulted.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, UndergroundError> {
        debug!(%url, "requesting");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%url, status = status.as_u16(), "reply received");

        if let Ok(reply) = serde_json::from_str::<ErrorReply>(&body) {
            return Err(UndergroundError::Service {
                message: reply.error,
            });
        }

        if !status.is_success() {
            return Err(UndergroundError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| UndergroundError::Json {
            message: e.to_string(),
        })
    }

    /// Get details for a station.
    pub async fn station_info(&self, station: &str) -> Result<StationInfo, UndergroundError> {
        self.get_json(format!("{}/station/{}", self.base_url, station))
            .await
    }

    /// Get the stations on a line.
    pub async fn line_stations(&self, line: &str) -> Result<Vec<String>, UndergroundError> {
        self.get_json(format!("{}/line/{}/list-stations", self.base_url, line))
            .await
    }
}

impl UndergroundApi for UndergroundClient {
    async fn route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteSegment>, UndergroundError> {
        self.get_json(format!(
            "{}/route/{}/{}",
            self.base_url, origin, destination
        ))
        .await
    }

    async fn interchanges(&self, station: &str) -> Result<Vec<String>, UndergroundError> {
        self.get_json(format!(
            "{}/station/{}/interchanges",
            self.base_url, station
        ))
        .await
    }
}
