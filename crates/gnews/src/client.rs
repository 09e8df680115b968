use std::error::Error as _;

use async_trait::async_trait;
use gnews_core::{upstream_error_message, RawResponse, ToolError, UpstreamQuery};

use crate::config::GnewsConfig;
use crate::prelude::Error;

/// Something that can run an [`UpstreamQuery`] against GNews.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Issue exactly one request for `query`. No retries, no caching.
    async fn fetch(&self, query: &UpstreamQuery) -> Result<RawResponse, ToolError>;
}

/// HTTP client for the GNews v4 API.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    config: GnewsConfig,
}

impl NewsClient {
    pub fn new(config: GnewsConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gnews/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url)
    }
}

#[async_trait]
impl NewsApi for NewsClient {
    async fn fetch(&self, query: &UpstreamQuery) -> Result<RawResponse, ToolError> {
        let url = self.url(query.endpoint);
        log::debug!("GET {url} {:?}", query.params);

        let response = self
            .http
            .get(&url)
            .query(&query.params)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ToolError::network(describe(e)))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            ToolError::network(format!("Failed to read response body: {}", describe(e)))
        })?;

        if !(200..300).contains(&status) {
            let message = upstream_error_message(status, &text);
            log::warn!("GNews answered HTTP {status}: {message}");
            return Err(ToolError::upstream(status, message));
        }

        let body = serde_json::from_str(&text)
            .map_err(|e| ToolError::upstream(status, format!("malformed response: {e}")))?;

        Ok(RawResponse { status, body })
    }
}

/// Error text with its causes, minus the request URL (it carries the API key).
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}
