//! Decoding the raw GraphQL response body into [`CatalogResponse`].

use crate::error::ScraperError;
use crate::types::CatalogResponse;

/// Parses a `searchStoreQuery` response body.
///
/// Unknown fields are ignored. Timestamps are normalized to UTC.
///
/// # Errors
///
/// Returns [`ScraperError::Deserialize`] if the body is not valid JSON, lacks
/// the `data.Catalog.searchStore.elements` chain, carries a malformed date,
/// or contains a cache hint path segment that is neither integer nor string.
pub fn parse_catalog(raw: &str) -> Result<CatalogResponse, ScraperError> {
    serde_json::from_str::<CatalogResponse>(raw).map_err(|e| ScraperError::Deserialize {
        context: "searchStore catalog response".to_owned(),
        source: e,
    })
}

impl CatalogResponse {
    /// Serializes the response back to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Serialize`] if `serde_json` rejects the value.
    pub fn to_json(&self) -> Result<String, ScraperError> {
        serde_json::to_string(self).map_err(|e| ScraperError::Serialize {
            context: "serializing searchStore catalog response".to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
