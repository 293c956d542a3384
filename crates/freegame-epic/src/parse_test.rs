use chrono::{TimeZone, Utc};

use super::*;
use crate::hint_path::HintPath;

/// Trimmed capture of a real `searchStoreQuery` response: one free game with a
/// running promotion, one with only an upcoming promotion, one without any.
const SEARCH_STORE_BODY: &str = r#"{
  "data": {
    "Catalog": {
      "searchStore": {
        "elements": [
          {
            "title": "Celeste",
            "id": "0ebbd4a2b5f44b1c8c1d0b2c4d3f1e5a",
            "namespace": "ad43401abc7b4d8a8b9e1bd62c4a0f0f",
            "description": "Help Madeline survive her inner demons.",
            "effectiveDate": "2021-08-19T15:00:00.000Z",
            "keyImages": [
              { "type": "OfferImageWide", "url": "https://cdn1.epicgames.com/celeste-wide.jpg" },
              { "type": "DieselStoreFrontTall", "url": "https://cdn1.epicgames.com/celeste-tall.jpg" }
            ],
            "seller": { "id": "o-x5j8mznzx6k5r8y2m3gykx8ugp4uf3", "name": "Maddy Makes Games" },
            "productSlug": "celeste/home",
            "urlSlug": "celeste",
            "url": null,
            "items": [{ "id": "a1b2", "namespace": "ad43401abc7b4d8a8b9e1bd62c4a0f0f" }],
            "customAttributes": [{ "key": "com.epicgames.app.blacklist", "value": "[]" }],
            "categories": [{ "path": "freegames" }, { "path": "games" }],
            "price": {
              "totalPrice": {
                "discountPrice": 0,
                "originalPrice": 1999,
                "voucherDiscount": 0,
                "discount": 1999,
                "currencyCode": "EUR",
                "currencyInfo": { "decimals": 2 },
                "fmtPrice": {
                  "originalPrice": "€19.99",
                  "discountPrice": "0",
                  "intermediatePrice": "0"
                }
              },
              "lineOffers": [
                {
                  "appliedRules": [
                    {
                      "id": "8f1ae1c8b8a44d72b6a8b1d1f2e3c4d5",
                      "endDate": "2021-08-26T15:00:00.000Z",
                      "discountSetting": { "discountType": "PERCENTAGE" }
                    }
                  ]
                }
              ]
            },
            "promotions": {
              "promotionalOffers": [
                {
                  "promotionalOffers": [
                    {
                      "startDate": "2021-08-19T15:00:00.000Z",
                      "endDate": "2021-08-26T15:00:00.000Z",
                      "discountSetting": { "discountType": "PERCENTAGE", "discountPercentage": 0 }
                    }
                  ]
                }
              ],
              "upcomingPromotionalOffers": []
            }
          },
          {
            "title": "Hell Let Loose",
            "productSlug": "hell-let-loose",
            "keyImages": [],
            "promotions": {
              "promotionalOffers": [],
              "upcomingPromotionalOffers": [
                {
                  "promotionalOffers": [
                    {
                      "startDate": "2021-08-26T17:00:00+02:00",
                      "endDate": "2021-09-02T15:00:00.000Z",
                      "discountSetting": { "discountType": "PERCENTAGE", "discountPercentage": 0 }
                    }
                  ]
                }
              ]
            }
          },
          {
            "title": "Mystery Game",
            "productSlug": null,
            "keyImages": null,
            "promotions": null
          }
        ],
        "paging": { "count": 1000, "total": 3 }
      }
    }
  },
  "extensions": {
    "cacheControl": {
      "version": 1,
      "hints": [
        { "path": ["Catalog"], "maxAge": 0 },
        { "path": ["Catalog", "searchStore", "elements", 0, "promotions"], "maxAge": 0 }
      ]
    }
  }
}"#;

#[test]
fn parse_catalog_reads_elements_in_order() {
    let response = parse_catalog(SEARCH_STORE_BODY).unwrap();
    let titles: Vec<&str> = response
        .elements()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Celeste", "Hell Let Loose", "Mystery Game"]);
    assert_eq!(response.data.catalog.search_store.paging.total, 3);
}

#[test]
fn parse_catalog_reads_promotion_entry() {
    let response = parse_catalog(SEARCH_STORE_BODY).unwrap();
    let promotions = response.elements()[0].promotions.as_ref().unwrap();
    let entry = &promotions.promotional_offers[0].promotional_offers[0];

    assert_eq!(
        entry.start_date,
        Utc.with_ymd_and_hms(2021, 8, 19, 15, 0, 0).unwrap()
    );
    assert_eq!(
        entry.end_date,
        Utc.with_ymd_and_hms(2021, 8, 26, 15, 0, 0).unwrap()
    );
    assert_eq!(entry.discount_setting.discount_type, "PERCENTAGE");
    assert_eq!(entry.discount_setting.discount_percentage, 0);
    assert!(promotions.upcoming_promotional_offers.is_empty());
}

#[test]
fn parse_catalog_normalizes_offsets_to_utc() {
    let response = parse_catalog(SEARCH_STORE_BODY).unwrap();
    let promotions = response.elements()[1].promotions.as_ref().unwrap();
    let entry = &promotions.upcoming_promotional_offers[0].promotional_offers[0];

    // 17:00 at +02:00 is 15:00 UTC.
    assert_eq!(
        entry.start_date,
        Utc.with_ymd_and_hms(2021, 8, 26, 15, 0, 0).unwrap()
    );
}

#[test]
fn parse_catalog_reads_price_and_metadata() {
    let response = parse_catalog(SEARCH_STORE_BODY).unwrap();
    let celeste = &response.elements()[0];

    assert_eq!(celeste.product_slug.as_deref(), Some("celeste/home"));
    assert_eq!(celeste.key_images.len(), 2);
    assert_eq!(celeste.key_images[1].image_type, "DieselStoreFrontTall");
    assert_eq!(celeste.seller.as_ref().unwrap().name, "Maddy Makes Games");
    assert_eq!(celeste.categories.len(), 2);

    let price = celeste.price.as_ref().unwrap();
    assert_eq!(price.total_price.original_price, 1999);
    assert_eq!(price.total_price.currency_info.decimals, 2);
    assert_eq!(price.total_price.fmt_price.original_price, "€19.99");
    assert_eq!(
        price.line_offers[0].applied_rules[0].end_date,
        Some(Utc.with_ymd_and_hms(2021, 8, 26, 15, 0, 0).unwrap())
    );
}

#[test]
fn parse_catalog_treats_null_lists_and_promotions_as_absent() {
    let response = parse_catalog(SEARCH_STORE_BODY).unwrap();
    let mystery = &response.elements()[2];

    assert!(mystery.product_slug.is_none());
    assert!(mystery.key_images.is_empty());
    assert!(mystery.promotions.is_none());
    assert!(mystery.price.is_none());
}

#[test]
fn parse_catalog_keeps_hint_path_variants() {
    let response = parse_catalog(SEARCH_STORE_BODY).unwrap();
    let cache_control = response
        .extensions
        .as_ref()
        .and_then(|e| e.cache_control.as_ref())
        .unwrap();

    assert_eq!(cache_control.version, 1);
    assert_eq!(
        cache_control.hints[1].path,
        vec![
            HintPath::from("Catalog"),
            HintPath::from("searchStore"),
            HintPath::from("elements"),
            HintPath::from(0),
            HintPath::from("promotions"),
        ]
    );
}

#[test]
fn parse_catalog_ignores_unknown_fields() {
    let raw = r#"{
        "data": { "Catalog": { "searchStore": {
            "elements": [{ "title": "Game", "isCodeRedemptionOnly": false, "tags": [{ "id": "1" }] }],
            "paging": { "count": 1, "total": 1 },
            "cursor": "abc"
        } } },
        "errors": null
    }"#;
    let response = parse_catalog(raw).unwrap();
    assert_eq!(response.elements().len(), 1);
    assert!(response.extensions.is_none());
}

#[test]
fn parse_catalog_rejects_invalid_json() {
    let err = parse_catalog("<html>Access denied</html>").unwrap_err();
    assert!(err.is_parse(), "expected parse error, got: {err:?}");
}

#[test]
fn parse_catalog_rejects_missing_catalog() {
    let err = parse_catalog(r#"{ "data": {} }"#).unwrap_err();
    assert!(
        matches!(err, ScraperError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[test]
fn parse_catalog_rejects_missing_search_store() {
    let err = parse_catalog(r#"{ "data": { "Catalog": {} } }"#).unwrap_err();
    assert!(err.is_parse(), "expected parse error, got: {err:?}");
}

#[test]
fn parse_catalog_rejects_malformed_promotion_date() {
    let raw = r#"{ "data": { "Catalog": { "searchStore": { "elements": [{
        "title": "Broken",
        "promotions": { "promotionalOffers": [{ "promotionalOffers": [{
            "startDate": "next thursday",
            "endDate": "2021-08-26T15:00:00.000Z",
            "discountSetting": { "discountType": "PERCENTAGE", "discountPercentage": 0 }
        }] }] }
    }] } } } }"#;
    let err = parse_catalog(raw).unwrap_err();
    assert!(err.is_parse(), "expected parse error, got: {err:?}");
}

#[test]
fn parse_catalog_rejects_boolean_hint_path() {
    let raw = r#"{
        "data": { "Catalog": { "searchStore": { "elements": [] } } },
        "extensions": { "cacheControl": { "version": 1, "hints": [{ "path": [true], "maxAge": 0 }] } }
    }"#;
    let err = parse_catalog(raw).unwrap_err();
    assert!(
        err.to_string().contains("cannot unmarshal type HintPath"),
        "unexpected error: {err}"
    );
}

#[test]
fn to_json_round_trips_fields_used_for_extraction() {
    let original = parse_catalog(SEARCH_STORE_BODY).unwrap();
    let reparsed = parse_catalog(&original.to_json().unwrap()).unwrap();

    assert_eq!(reparsed, original);

    let json: serde_json::Value = serde_json::from_str(&original.to_json().unwrap()).unwrap();
    let hint_path = &json["extensions"]["cacheControl"]["hints"][1]["path"];
    assert_eq!(hint_path[3], 0);
    assert_eq!(hint_path[4], "promotions");
    assert!(json["data"]["Catalog"]["searchStore"]["elements"].is_array());
}

#[test]
fn parse_catalog_accepts_null_leaves_and_still_yields_deal() {
    let raw = r#"{ "data": { "Catalog": { "searchStore": {
        "elements": [{
            "title": "Sparse Game",
            "productSlug": "sparse-game",
            "seller": { "id": null, "name": null },
            "items": [{ "id": "item-1", "namespace": null }],
            "customAttributes": [{ "key": "com.epicgames.app.productSlug", "value": null }],
            "categories": [{ "path": null }],
            "keyImages": [
                { "type": "DieselStoreFrontTall", "url": null },
                { "type": null, "url": "https://cdn.example/sparse.jpg" }
            ],
            "price": {
                "totalPrice": {
                    "discountPrice": null,
                    "originalPrice": 1999,
                    "currencyCode": null,
                    "currencyInfo": null,
                    "fmtPrice": { "originalPrice": null, "discountPrice": "0", "intermediatePrice": null }
                },
                "lineOffers": [{ "appliedRules": [{
                    "id": null,
                    "endDate": null,
                    "discountSetting": { "discountType": null }
                }] }]
            },
            "promotions": {
                "promotionalOffers": [{ "promotionalOffers": [{
                    "startDate": "2021-08-19T15:00:00.000Z",
                    "endDate": "2021-08-26T15:00:00.000Z",
                    "discountSetting": { "discountType": null, "discountPercentage": 0 }
                }] }],
                "upcomingPromotionalOffers": null
            }
        }],
        "paging": { "count": null, "total": 1 }
    } } } }"#;

    let response = parse_catalog(raw).unwrap();
    let element = &response.elements()[0];
    assert_eq!(element.seller.as_ref().unwrap().name, "");
    assert_eq!(element.custom_attributes[0].value, "");
    assert_eq!(element.key_images[0].url, "");
    assert_eq!(element.key_images[1].image_type, "");

    let total = &element.price.as_ref().unwrap().total_price;
    assert_eq!(total.currency_code, "");
    assert_eq!(total.discount_price, 0);
    assert_eq!(total.original_price, 1999);
    assert_eq!(response.data.catalog.search_store.paging.count, 0);

    let deals = crate::extract::extract_deals(&response);
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].title, "Sparse Game");
}
