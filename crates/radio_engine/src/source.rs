use async_trait::async_trait;
use radio_core::Program;
use reqwest::{Client, Url};

use crate::FetchError;

/// Upstream programs API used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://v8pwp7d7bd.execute-api.ap-northeast-1.amazonaws.com/prod/programs";

/// Anything able to produce the schedule of a station.
#[async_trait]
pub trait ProgramSource: Send + Sync {
    async fn fetch_programs(&self, station_id: &str) -> Result<Vec<Program>, FetchError>;
}

/// Programs API reached over HTTP: `GET <endpoint>?stationId=<id>`.
#[derive(Debug, Clone)]
pub struct HttpProgramSource {
    http: Client,
    endpoint: Url,
}

impl HttpProgramSource {
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(concat!("radioproglist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(http, endpoint)
    }

    pub fn with_client(http: Client, endpoint: &str) -> Result<Self, FetchError> {
        let invalid = |reason: String| FetchError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };
        let endpoint_url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(endpoint_url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme {}",
                endpoint_url.scheme()
            )));
        }

        Ok(HttpProgramSource {
            http,
            endpoint: endpoint_url,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL for a station.
    pub fn request_url(&self, station_id: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("stationId", station_id);
        url
    }

    /// Fetch the raw JSON body for a station without interpreting it.
    pub async fn fetch_json(&self, station_id: &str) -> Result<serde_json::Value, FetchError> {
        let body = self.fetch_body(station_id).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_body(&self, station_id: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.request_url(station_id);
        tracing::info!("Fetching programs from {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ProgramSource for HttpProgramSource {
    async fn fetch_programs(&self, station_id: &str) -> Result<Vec<Program>, FetchError> {
        let body = self.fetch_body(station_id).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
