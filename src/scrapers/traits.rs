use crate::models::RawListing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for the listing scrapers.
/// The service only depends on this, so a fixed source can stand in for tests.
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Scrape raw car cards from the source
    async fn scrape(&self) -> Result<Vec<RawListing>>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
