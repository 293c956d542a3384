//! Command handlers for `scrape` and `extract`.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use freegame_core::{AppConfig, ScrapeOutcome, Scraper};
use freegame_epic::{extract_deals, parse_catalog, EpicClient, EpicGamesScraper};
use tokio_util::sync::CancellationToken;

use crate::output::print_deals;

/// Run one Epic Games Store scrape and print the free deals.
///
/// Ctrl-C cancels the in-flight scrape; a cancelled run is reported and is
/// not an error.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the request fails, or
/// the response cannot be parsed.
pub(crate) async fn run_scrape(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let client = EpicClient::new(config)?;
    let scraper = EpicGamesScraper::new(
        client,
        tracing::info_span!("scrape", source = EpicGamesScraper::IDENTIFIER),
    );

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received; cancelling scrape");
            on_interrupt.cancel();
        }
    });

    let outcome = scraper.scrape(&cancel).await;
    interrupt.abort();

    match outcome.context("Epic Games Store scrape failed")? {
        ScrapeOutcome::Completed(deals) => print_deals(&deals, json, Utc::now())?,
        ScrapeOutcome::Cancelled => println!("scrape cancelled"),
    }

    Ok(())
}

/// Extract free deals from a previously saved catalog response.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub(crate) fn run_extract(path: &Path, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let response =
        parse_catalog(&raw).with_context(|| format!("failed to parse {}", path.display()))?;

    print_deals(&extract_deals(&response), json, Utc::now())
}
