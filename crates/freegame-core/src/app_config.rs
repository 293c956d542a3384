#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub epic_graphql_url: String,
    pub scraper_user_agent: String,
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub scraper_request_timeout_secs: Option<u64>,
}
