use reqwest::{Client, StatusCode, Url};
use shared_types::{Coordinate, MotelResult, MotelsResponse};

use crate::error::FetchError;

/// Read-only source of motels around a coordinate.
#[allow(async_fn_in_trait)]
pub trait MotelBackend {
    async fn fetch_nearby(&self, at: Coordinate) -> Result<Vec<MotelResult>, FetchError>;
}

/// Client for `GET {base}/api/motels?lat=..&lon=..`.
#[derive(Debug, Clone)]
pub struct HttpMotelBackend {
    client: Client,
    base_url: String,
}

impl HttpMotelBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, at: Coordinate) -> Result<Url, FetchError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/api/motels"))
            .map_err(|e| FetchError::Transport(format!("invalid backend URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lon", &at.longitude.to_string());
        Ok(url)
    }
}

impl MotelBackend for HttpMotelBackend {
    async fn fetch_nearby(&self, at: Coordinate) -> Result<Vec<MotelResult>, FetchError> {
        let url = self.endpoint(at)?;
        leptos::logging::log!("Fetching motels from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_response(status, &body)
    }
}

/// Validates a backend reply.
///
/// Anything other than a 2xx carrying `{ "results": [...] }` with in-range
/// coordinates is an error.
pub fn parse_response(status: StatusCode, body: &str) -> Result<Vec<MotelResult>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let MotelsResponse { results } =
        MotelsResponse::from_json(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    if let Some(bad) = results.iter().find(|r| !r.location.is_valid()) {
        return Err(FetchError::Malformed(format!(
            "result {} has an invalid location ({}, {})",
            bad.id, bad.location.latitude, bad.location.longitude
        )));
    }

    Ok(results)
}
