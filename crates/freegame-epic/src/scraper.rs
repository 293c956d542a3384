//! The Epic Games Store deal source.

use freegame_core::{Deal, ScrapeOutcome, Scraper};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Span};

use crate::client::EpicClient;
use crate::error::ScraperError;
use crate::extract::extract_deals;
use crate::parse::parse_catalog;

/// Runs one fetch, parse and extract cycle against the Epic Games Store.
///
/// Log output goes to the span handed to [`EpicGamesScraper::new`]; pass
/// [`Span::none()`] to leave it untagged.
pub struct EpicGamesScraper {
    client: EpicClient,
    span: Span,
}

impl EpicGamesScraper {
    #[must_use]
    pub fn new(client: EpicClient, span: Span) -> Self {
        Self { client, span }
    }

    /// Runs a scrape. See [`Scraper::scrape`].
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] / [`ScraperError::UnexpectedStatus`] when the
    ///   request fails.
    /// - [`ScraperError::Deserialize`] when the response cannot be parsed.
    pub async fn scrape_deals(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ScrapeOutcome<Vec<Deal>>, ScraperError> {
        self.run(cancel).instrument(self.span.clone()).await
    }

    async fn run(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ScrapeOutcome<Vec<Deal>>, ScraperError> {
        let ScrapeOutcome::Completed(body) = self.client.fetch(cancel).await? else {
            tracing::info!(source = Self::IDENTIFIER, "scrape cancelled");
            return Ok(ScrapeOutcome::Cancelled);
        };

        Self::finish(&body, cancel)
    }

    /// Parses and extracts a fetched body, discarding the result if `cancel`
    /// was raised meanwhile.
    fn finish(
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<ScrapeOutcome<Vec<Deal>>, ScraperError> {
        let response = parse_catalog(body)?;
        let deals = extract_deals(&response);

        if cancel.is_cancelled() {
            tracing::info!(
                source = Self::IDENTIFIER,
                "scrape cancelled after extraction; discarding deals"
            );
            return Ok(ScrapeOutcome::Cancelled);
        }

        tracing::info!(
            source = Self::IDENTIFIER,
            count = deals.len(),
            "scrape completed"
        );
        Ok(ScrapeOutcome::Completed(deals))
    }
}

impl Scraper for EpicGamesScraper {
    const IDENTIFIER: &'static str = "EpicGames";

    type Error = ScraperError;

    async fn scrape(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ScrapeOutcome<Vec<Deal>>, ScraperError> {
        self.scrape_deals(cancel).await
    }
}
