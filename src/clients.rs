use std::time::Duration;

use tracing::{debug, instrument};

use crate::{error::Result, query::SERVER_TIMEOUT_SECS, types::overpass::OverpassResponse};

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Client-side limit, kept above the server-side timeout in the query
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(SERVER_TIMEOUT_SECS + 5);

pub fn build_reqwest_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(CLIENT_TIMEOUT)
        .user_agent(concat!("osm-search/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    url: String,
}

impl OverpassClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Run one query against the interpreter. Never retried.
    #[instrument(skip(self, query), fields(url = %self.url))]
    pub async fn fetch(&self, query: &str) -> Result<OverpassResponse> {
        debug!(query, "sending overpass query");
        let response = self
            .http
            .post(&self.url)
            .form(&[("data", query)])
            .send()
            .await?
            .error_for_status()?
            .json::<OverpassResponse>()
            .await?;
        debug!(elements = response.elements.len(), "overpass responded");
        Ok(response)
    }
}
