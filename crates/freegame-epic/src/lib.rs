pub mod client;
pub mod error;
pub mod extract;
pub mod hint_path;
pub mod parse;
pub mod query;
pub mod scraper;
pub mod types;

pub use client::EpicClient;
pub use error::ScraperError;
pub use extract::{extract_deals, select_image, select_promotion};
pub use hint_path::HintPath;
pub use parse::parse_catalog;
pub use scraper::EpicGamesScraper;
pub use types::{CatalogElement, CatalogResponse, KeyImage, PromotionEntry, PromotionInfo};
