//! HTTP client for the Epic Games Store GraphQL proxy.

use std::time::Duration;

use freegame_core::{AppConfig, ScrapeOutcome};
use reqwest::{Client, Url};
use tokio_util::sync::CancellationToken;

use crate::error::ScraperError;
use crate::query::SearchStoreRequest;

/// Header the storefront expects on XHR-style calls. The name is spelled as
/// the web client sends it, without the `ed`.
const REQUEST_WITH_HEADER: &str = "X-Request-With";

/// Fetches the raw free-games catalog from the storefront.
///
/// Holds one `reqwest::Client` with a cookie store, so cookies set by the
/// storefront's bot mitigation are replayed when the same `EpicClient` is
/// reused. No retries are performed; callers decide what to do on failure.
pub struct EpicClient {
    client: Client,
    endpoint: Url,
}

impl EpicClient {
    /// Creates an `EpicClient` from application configuration.
    ///
    /// The request timeout is only set when configured; otherwise the
    /// transport's defaults apply.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    /// - [`ScraperError::InvalidEndpoint`] if the configured endpoint is not a URL.
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(&config.scraper_user_agent);

        if let Some(timeout_secs) = config.scraper_request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        Self::with_client(builder.build()?, &config.epic_graphql_url)
    }

    /// Creates an `EpicClient` around an existing transport client (for
    /// sharing a client or pointing at a mock server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidEndpoint`] if `endpoint` is not a valid
    /// absolute URL.
    pub fn with_client(client: Client, endpoint: &str) -> Result<Self, ScraperError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ScraperError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Posts the free-games `searchStoreQuery` and returns the response body.
    ///
    /// `cancel` is checked before the request, raced against the request
    /// while it is in flight, and checked again once the body has arrived.
    /// In every case a raised token yields [`ScrapeOutcome::Cancelled`] and
    /// any received body is dropped.
    ///
    /// The body is returned unparsed; decoding is [`crate::parse_catalog`]'s job.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS or timeout failure.
    pub async fn fetch(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ScrapeOutcome<String>, ScraperError> {
        if cancel.is_cancelled() {
            tracing::debug!("cancelled before requesting catalog");
            return Ok(ScrapeOutcome::Cancelled);
        }

        let body = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("cancelled while requesting catalog");
                return Ok(ScrapeOutcome::Cancelled);
            }
            result = self.send_request() => result?,
        };

        Ok(discard_if_cancelled(body, cancel))
    }

    async fn send_request(&self) -> Result<String, ScraperError> {
        tracing::debug!(endpoint = %self.endpoint, "requesting free games catalog");

        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(REQUEST_WITH_HEADER, "XMLHttpRequest")
            .json(&SearchStoreRequest::free_games())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "received catalog response");
        Ok(body)
    }
}

/// Drops a body that arrived after `cancel` was raised.
fn discard_if_cancelled(body: String, cancel: &CancellationToken) -> ScrapeOutcome<String> {
    if cancel.is_cancelled() {
        tracing::debug!("cancelled after receiving catalog; discarding body");
        return ScrapeOutcome::Cancelled;
    }
    ScrapeOutcome::Completed(body)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
