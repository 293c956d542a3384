pub mod app_config;
pub mod config;
pub mod deal;
pub mod scraper;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use deal::Deal;
pub use scraper::{ScrapeOutcome, Scraper};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
