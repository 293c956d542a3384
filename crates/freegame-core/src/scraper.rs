//! The contract every deal source implements for the aggregation layer.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::deal::Deal;

/// Result of an operation that honours a cancellation signal.
///
/// Cancellation is a normal outcome, not an error: it means "no result is
/// available", which is different from an empty list of deals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> ScrapeOutcome<T> {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScrapeOutcome::Cancelled)
    }

    /// Returns the completed value, or `None` if the operation was cancelled.
    #[must_use]
    pub fn into_completed(self) -> Option<T> {
        match self {
            ScrapeOutcome::Completed(value) => Some(value),
            ScrapeOutcome::Cancelled => None,
        }
    }

    #[must_use]
    pub fn map<U, F>(self, f: F) -> ScrapeOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ScrapeOutcome::Completed(value) => ScrapeOutcome::Completed(f(value)),
            ScrapeOutcome::Cancelled => ScrapeOutcome::Cancelled,
        }
    }
}

/// A single source of free-game deals.
///
/// Implementations perform one fetch/parse/extract cycle per call and keep no
/// state between calls other than what their transport client holds.
pub trait Scraper {
    /// Stable name of the source, used in logs and by the aggregator.
    const IDENTIFIER: &'static str;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Produces the current free deals, or [`ScrapeOutcome::Cancelled`] if
    /// `cancel` was raised before the result was ready.
    fn scrape(
        &self,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<ScrapeOutcome<Vec<Deal>>, Self::Error>> + Send;
}
