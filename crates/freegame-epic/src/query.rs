//! The fixed `searchStoreQuery` request sent to the storefront.

use serde::Serialize;

/// GraphQL document selecting everything [`crate::types::CatalogResponse`]
/// models. Price and promotion sub-selections are gated on the `withPrice`
/// and `withPromotions` variables.
pub const SEARCH_STORE_QUERY: &str = r"query searchStoreQuery($allowCountries: String, $category: String, $count: Int, $country: String!, $keywords: String, $locale: String, $namespace: String, $sortBy: String, $sortDir: String, $start: Int, $tag: String, $withPrice: Boolean = false, $withPromotions: Boolean = false) {
  Catalog {
    searchStore(allowCountries: $allowCountries, category: $category, count: $count, country: $country, keywords: $keywords, locale: $locale, namespace: $namespace, sortBy: $sortBy, sortDir: $sortDir, start: $start, tag: $tag) {
      elements {
        title
        id
        namespace
        description
        effectiveDate
        keyImages {
          type
          url
        }
        seller {
          id
          name
        }
        productSlug
        urlSlug
        url
        items {
          id
          namespace
        }
        customAttributes {
          key
          value
        }
        categories {
          path
        }
        price(country: $country) @include(if: $withPrice) {
          totalPrice {
            discountPrice
            originalPrice
            voucherDiscount
            discount
            currencyCode
            currencyInfo {
              decimals
            }
            fmtPrice(locale: $locale) {
              originalPrice
              discountPrice
              intermediatePrice
            }
          }
          lineOffers {
            appliedRules {
              id
              endDate
              discountSetting {
                discountType
              }
            }
          }
        }
        promotions(category: $category) @include(if: $withPromotions) {
          promotionalOffers {
            promotionalOffers {
              startDate
              endDate
              discountSetting {
                discountType
                discountPercentage
              }
            }
          }
          upcomingPromotionalOffers {
            promotionalOffers {
              startDate
              endDate
              discountSetting {
                discountType
                discountPercentage
              }
            }
          }
        }
      }
      paging {
        count
        total
      }
    }
  }
}
";

/// JSON body of the GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct SearchStoreRequest {
    pub query: &'static str,
    pub variables: SearchStoreVariables,
}

impl SearchStoreRequest {
    #[must_use]
    pub fn free_games() -> Self {
        Self {
            query: SEARCH_STORE_QUERY,
            variables: SearchStoreVariables::free_games(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStoreVariables {
    pub category: &'static str,
    pub sort_by: &'static str,
    pub sort_dir: &'static str,
    /// Large enough that every running and upcoming free game fits in one page.
    pub count: u32,
    pub country: &'static str,
    pub allow_countries: &'static str,
    pub locale: &'static str,
    pub with_price: bool,
    pub with_promotions: bool,
}

impl SearchStoreVariables {
    /// The free-games category, oldest effective date first, Dutch storefront
    /// with English copy.
    #[must_use]
    pub fn free_games() -> Self {
        Self {
            category: "freegames",
            sort_by: "effectiveDate",
            sort_dir: "asc",
            count: 1000,
            country: "NL",
            allow_countries: "NL",
            locale: "en-US",
            with_price: true,
            with_promotions: true,
        }
    }
}
