use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_LISTING_URL: &str = "https://www.che168.com/china/list/";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Parameters shared by the che168 scrapers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeParams {
    /// Listing page to scrape
    pub url: String,
    /// Request timeout, also the page-load budget for the browser
    pub timeout: Duration,
    /// Pause between image downloads
    pub delay: Duration,
}
