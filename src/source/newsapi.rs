//! NewsAPI `top-headlines` client.
//!
//! One GET per call, no retries, no caching, and the HTTP stack's default
//! timeout.  Status handling and body parsing are split into pure functions
//! ([`check_status`], [`NewsApiClient::parse_body`]) so tests can exercise
//! them without a server.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use super::error::{ApiError, ErrorEnvelope};
use super::{HeadlineSource, NewsResult};

/// Path of the endpoint, relative to the configured base URL.
pub const TOP_HEADLINES_PATH: &str = "/v2/top-headlines";

/// HTTP client for the headlines API.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    endpoint: Url,
}

impl NewsApiClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `https://newsapi.org`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let endpoint = Url::parse(base_url)?.join(TOP_HEADLINES_PATH)?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// The fully-resolved endpoint URL, without query parameters.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch top headlines for `country` and parse them.
    pub async fn top_headlines(
        &self,
        country: &str,
        api_key: &str,
    ) -> Result<NewsResult, ApiError> {
        let body = self.top_headlines_raw(country, api_key).await?;
        let result = Self::parse_body(&body).inspect_err(|e| {
            warn!(country, error = %e, "headline response did not parse");
        })?;
        debug!(
            country,
            articles = result.articles.len(),
            total = result.total_results,
            "parsed headlines"
        );
        Ok(result)
    }

    /// Fetch top headlines for `country` and return the body unparsed.
    ///
    /// Non-2xx statuses are still reported as [`ApiError::Status`].
    pub async fn top_headlines_raw(
        &self,
        country: &str,
        api_key: &str,
    ) -> Result<String, ApiError> {
        info!(country, endpoint = %self.endpoint, "fetching top headlines");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("country", country), ("apiKey", api_key)])
            .send()
            .await
            .inspect_err(|e| warn!(country, error = %e, "headline request failed"))?;

        let status = response.status();
        let body = response.text().await?;
        check_status(status, &body)
            .inspect_err(|e| warn!(country, error = %e, "headline request rejected"))?;
        Ok(body)
    }

    /// Parse a 2xx response body.
    ///
    /// A well-formed envelope whose `status` is `"error"` is turned into
    /// [`ApiError::Rejected`] rather than an empty result.
    pub fn parse_body(body: &str) -> Result<NewsResult, ApiError> {
        let result: NewsResult = serde_json::from_str(body)?;
        if result.status == "error" {
            let envelope = ErrorEnvelope::parse(body);
            let (code, message) = envelope
                .map(|e| (e.code, e.message))
                .unwrap_or_default();
            return Err(ApiError::Rejected {
                code: code.unwrap_or_else(|| "unknown".into()),
                message: message.unwrap_or_else(|| "no message".into()),
            });
        }
        Ok(result)
    }
}

/// Map a non-success status to [`ApiError::Status`].
fn check_status(status: StatusCode, body: &str) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_status(status, body))
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn top_headlines(&self, country: &str, api_key: &str) -> Result<NewsResult, ApiError> {
        NewsApiClient::top_headlines(self, country, api_key).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
