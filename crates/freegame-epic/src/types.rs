//! Response types for the Epic Games Store `searchStoreQuery` GraphQL query.
//!
//! ## Observed shape from the storefront's GraphQL proxy
//!
//! ### Envelope
//! `data.Catalog.searchStore` holds the `elements` list and `paging`. Note the
//! capitalised `Catalog` key; every other key is camelCase. A missing `data`,
//! `Catalog`, `searchStore` or `elements` is a hard parse failure.
//!
//! ### `promotions`
//! `null` for games that are not part of a promotion. When present, both
//! `promotionalOffers` (running now) and `upcomingPromotionalOffers` (scheduled)
//! are lists of groups, and each group wraps another `promotionalOffers` list
//! of entries. Either list may be empty; we also accept `null` as empty.
//!
//! ### Nullable leaves
//! Apart from `title`, the promotion dates and `discountPercentage`, every
//! string and number leaf is nullable in the schema. `null` decodes to the
//! type's default (`""` or `0`) instead of failing the whole page.
//!
//! ### `discountPercentage`
//! The *remaining* price in percent, not the discount: `0` means the game is
//! free, `100` means no discount.
//!
//! ### Dates
//! ISO-8601 with millisecond precision and a `Z` suffix, e.g.
//! `"2021-08-19T15:00:00.000Z"`. Parsed into [`DateTime<Utc>`]; offsets other
//! than UTC are converted.
//!
//! ### `extensions.cacheControl.hints[].path`
//! A GraphQL response path mixing field names and list indices, e.g.
//! `["Catalog", "searchStore", "elements", 0, "keyImages"]`. See [`HintPath`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::hint_path::HintPath;

/// Root of the GraphQL response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub data: Data,
    #[serde(default)]
    pub extensions: Option<Extensions>,
}

impl CatalogResponse {
    /// Catalog elements in the order the storefront returned them.
    #[must_use]
    pub fn elements(&self) -> &[CatalogElement] {
        &self.data.catalog.search_store.elements
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    #[serde(rename = "Catalog")]
    pub catalog: Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub search_store: SearchResult,
}

/// The `searchStore` result: one page of catalog elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub elements: Vec<CatalogElement>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paging: Paging,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
}

/// A single product or bundle listed in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogElement {
    /// Display name, e.g. `"Celeste"`.
    pub title: String,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub effective_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_images: Vec<KeyImage>,

    #[serde(default)]
    pub seller: Option<Seller>,

    /// Slug of the product detail page, e.g. `"celeste"`. `null` for some
    /// bundles and add-ons.
    #[serde(default)]
    pub product_slug: Option<String>,

    #[serde(default)]
    pub url_slug: Option<String>,

    /// Untyped in the schema; observed as `null` or a string.
    #[serde(default)]
    pub url: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_attributes: Vec<CustomAttribute>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub price: Option<Price>,

    #[serde(default)]
    pub promotions: Option<PromotionInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyImage {
    /// Image category, e.g. `"DieselStoreFrontTall"`, `"OfferImageWide"`,
    /// `"Thumbnail"`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub image_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seller {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAttribute {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
}

// ---------------------------------------------------------------------------
// price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    #[serde(deserialize_with = "null_as_default")]
    pub total_price: TotalPrice,
    #[serde(deserialize_with = "null_as_empty")]
    pub line_offers: Vec<LineOffer>,
}

/// Prices in minor currency units (cents for EUR).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TotalPrice {
    #[serde(deserialize_with = "null_as_default")]
    pub discount_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub original_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub voucher_discount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub discount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_info: CurrencyInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub fmt_price: FmtPrice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub decimals: i64,
}

/// Locale-formatted prices, e.g. `"€19.99"` or `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FmtPrice {
    #[serde(deserialize_with = "null_as_default")]
    pub original_price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub discount_price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub intermediate_price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOffer {
    #[serde(deserialize_with = "null_as_empty")]
    pub applied_rules: Vec<AppliedRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppliedRule {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub discount_setting: AppliedRuleDiscountSetting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppliedRuleDiscountSetting {
    #[serde(deserialize_with = "null_as_default")]
    pub discount_type: String,
}

// ---------------------------------------------------------------------------
// promotions
// ---------------------------------------------------------------------------

/// Current and upcoming promotional offers for an element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromotionInfo {
    #[serde(deserialize_with = "null_as_empty")]
    pub promotional_offers: Vec<PromotionGroup>,
    #[serde(deserialize_with = "null_as_empty")]
    pub upcoming_promotional_offers: Vec<PromotionGroup>,
}

/// A batch of simultaneous offers. Only the first entry is ever consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromotionGroup {
    #[serde(deserialize_with = "null_as_empty")]
    pub promotional_offers: Vec<PromotionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionEntry {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub discount_setting: DiscountSetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountSetting {
    /// Observed as `"PERCENTAGE"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_type: String,
    /// Remaining price in percent; `0` means free.
    pub discount_percentage: i64,
}

impl DiscountSetting {
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.discount_percentage == 0
    }
}

// ---------------------------------------------------------------------------
// extensions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extensions {
    pub cache_control: Option<CacheControl>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheControl {
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub hints: Vec<Hint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hint {
    #[serde(deserialize_with = "null_as_empty")]
    pub path: Vec<HintPath>,
    #[serde(deserialize_with = "null_as_default")]
    pub max_age: i64,
}

/// Treats an explicit JSON `null` leaf the same as an absent one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Treats an explicit JSON `null` list the same as an absent one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
