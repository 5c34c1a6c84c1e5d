use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    domain::Flow,
    error::{application_error, RemoteError},
    protocol::{AccommodationResult, ExtractionResult, FlowResponse, FullGuideResult, TravelQuery},
};
use tracing::{debug, warn};
use url::Url;

pub mod error;

pub use error::ClientError;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Origin of the travel service when none is supplied at launch.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[async_trait]
pub trait TravelGuideApi: Send + Sync {
    async fn extract_location_date(&self, message: &str) -> Result<ExtractionResult>;
    async fn accommodation_guide(&self, message: &str) -> Result<AccommodationResult>;
    async fn full_travel_guide(&self, message: &str) -> Result<FullGuideResult>;

    async fn submit(&self, flow: Flow, message: &str) -> Result<FlowResponse> {
        Ok(match flow {
            Flow::Extraction => FlowResponse::Extraction(self.extract_location_date(message).await?),
            Flow::Accommodation => {
                FlowResponse::Accommodation(self.accommodation_guide(message).await?)
            }
            Flow::FullGuide => FlowResponse::FullGuide(self.full_travel_guide(message).await?),
        })
    }
}

/// Checks that `raw` is an absolute http(s) origin and strips trailing slashes
/// so endpoint paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|err| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme `{}`", parsed.scheme()),
        });
    }
    Ok(trimmed.to_string())
}

/// Applies the service's error convention to a raw body: a truthy `error`
/// field wins over everything else, otherwise the body must decode as `T`.
pub fn decode_flow_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let body: Value = serde_json::from_slice(bytes)?;
    if let Some(message) = application_error(&body) {
        return Err(RemoteError::new(message).into());
    }
    // `Value` maps are sorted; decode the typed result from the bytes so
    // itinerary days keep their wire order.
    Ok(serde_json::from_slice(bytes)?)
}

#[derive(Debug, Clone)]
pub struct HttpTravelClient {
    http: Client,
    base_url: String,
}

impl HttpTravelClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    async fn post_query<T: DeserializeOwned>(&self, flow: Flow, message: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, flow.endpoint());
        debug!(flow = flow.as_str(), %url, "posting travel query");

        let response = self
            .http
            .post(&url)
            .json(&TravelQuery::new(message))
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            warn!(flow = flow.as_str(), %status, "travel service returned non-success status");
        }

        decode_flow_body(&bytes)
    }
}

#[async_trait]
impl TravelGuideApi for HttpTravelClient {
    async fn extract_location_date(&self, message: &str) -> Result<ExtractionResult> {
        self.post_query(Flow::Extraction, message).await
    }

    async fn accommodation_guide(&self, message: &str) -> Result<AccommodationResult> {
        self.post_query(Flow::Accommodation, message).await
    }

    async fn full_travel_guide(&self, message: &str) -> Result<FullGuideResult> {
        self.post_query(Flow::FullGuide, message).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
