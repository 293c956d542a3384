//! Turning a parsed catalog into [`Deal`]s.
//!
//! An element becomes a deal when its selected promotion entry has a
//! `discountPercentage` of exactly `0`. Elements without any promotion, or
//! whose promotion is merely a discount, are skipped and logged; they are not
//! errors.

use freegame_core::Deal;

use crate::types::{CatalogElement, CatalogResponse, KeyImage, PromotionEntry, PromotionGroup};

/// Key image category used as cover art.
pub const PREFERRED_IMAGE_TYPE: &str = "DieselStoreFrontTall";

const PRODUCT_URL_PREFIX: &str = "https://www.epicgames.com/store/en-US/product/";

/// Extracts every free deal from `response`, preserving element order.
#[must_use]
pub fn extract_deals(response: &CatalogResponse) -> Vec<Deal> {
    let deals: Vec<Deal> = response
        .elements()
        .iter()
        .filter_map(extract_deal)
        .collect();

    tracing::debug!(
        elements = response.elements().len(),
        deals = deals.len(),
        "extracted free deals"
    );
    deals
}

/// Builds a [`Deal`] for a single element, or `None` if it is not free.
#[must_use]
pub fn extract_deal(element: &CatalogElement) -> Option<Deal> {
    let Some(promotion) = select_promotion(element) else {
        tracing::info!(title = %element.title, "has no promotion available");
        return None;
    };

    if !promotion.discount_setting.is_free() {
        tracing::info!(
            title = %element.title,
            discount_percentage = promotion.discount_setting.discount_percentage,
            "is not free"
        );
        return None;
    }

    tracing::info!(title = %element.title, "adding deal");
    Some(Deal {
        discount: Deal::FULL_DISCOUNT,
        title: element.title.clone(),
        link: product_link(element.product_slug.as_deref()),
        image: select_image(&element.key_images).to_owned(),
        start: promotion.start_date,
        end: promotion.end_date,
    })
}

/// Picks the promotion entry that decides whether an element is free and
/// supplies the deal window.
///
/// The first entry of the first running group wins; otherwise the first
/// entry of the first upcoming group. Only the first group of each list is
/// considered, even when it is empty.
#[must_use]
pub fn select_promotion(element: &CatalogElement) -> Option<&PromotionEntry> {
    let promotions = element.promotions.as_ref()?;
    first_entry(&promotions.promotional_offers)
        .or_else(|| first_entry(&promotions.upcoming_promotional_offers))
}

fn first_entry(groups: &[PromotionGroup]) -> Option<&PromotionEntry> {
    groups.first()?.promotional_offers.first()
}

/// Picks the cover image URL for an element.
///
/// - An image tagged [`PREFERRED_IMAGE_TYPE`] wins regardless of position.
/// - With zero or one images and no preferred one, the result is empty: a
///   lone image of another type is not used.
/// - With several images and no preferred one, the first image is used.
#[must_use]
pub fn select_image(images: &[KeyImage]) -> &str {
    if let Some(image) = images
        .iter()
        .find(|image| image.image_type == PREFERRED_IMAGE_TYPE)
    {
        return &image.url;
    }

    if images.len() <= 1 {
        return "";
    }

    images
        .iter()
        .find(|image| image.image_type != PREFERRED_IMAGE_TYPE)
        .map_or("", |image| image.url.as_str())
}

/// Builds the storefront product page URL for a slug. A missing slug yields
/// the bare product prefix.
#[must_use]
pub fn product_link(product_slug: Option<&str>) -> String {
    format!("{PRODUCT_URL_PREFIX}{}", product_slug.unwrap_or_default())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
