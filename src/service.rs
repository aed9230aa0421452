use crate::cache::ListingCache;
use crate::catalog::{self, ListingPage, ListingQuery};
use crate::extract::structure;
use crate::models::{RawListing, StructuredListing};
use crate::scrapers::{ImageDownloader, ScraperTrait};
use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// Where a batch of raw listings came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Cache,
    Live,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScrapedCars {
    pub source: DataOrigin,
    pub count: usize,
    pub data: Vec<RawListing>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Glues the scraper, image store and cache to the catalog
pub struct CarService {
    scraper: Box<dyn ScraperTrait>,
    cache: ListingCache,
    images: Option<ImageDownloader>,
    delay: Duration,
}

impl CarService {
    pub fn new(scraper: Box<dyn ScraperTrait>, cache: ListingCache) -> Self {
        Self {
            scraper,
            cache,
            images: None,
            delay: Duration::ZERO,
        }
    }

    /// Download listing photos after each scrape, pausing `delay` between them
    pub fn with_images(mut self, images: ImageDownloader, delay: Duration) -> Self {
        self.images = Some(images);
        self.delay = delay;
        self
    }

    /// Scrape, fetch images and replace the cache
    pub async fn scrape_and_cache(&self) -> Result<Vec<RawListing>> {
        info!("Scraping with {}", self.scraper.source_name());
        let mut listings = self.scraper.scrape().await?;

        if let Some(images) = &self.images {
            for listing in listings.iter_mut() {
                if listing.image_url.is_empty() {
                    continue;
                }
                info!("📸 Downloading image for {}", listing.car_id);
                listing.local_image_url =
                    images.download(&listing.image_url, &listing.car_id).await;
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
            }
        }

        self.cache.replace(&listings).await?;
        Ok(listings)
    }

    /// Raw listings from the cache, scraping first when it is empty
    pub async fn scraped_cars(&self) -> Result<ScrapedCars> {
        let cached = self.cache.load().await?;
        if !cached.is_empty() {
            return Ok(ScrapedCars {
                source: DataOrigin::Cache,
                count: cached.len(),
                data: cached,
            });
        }

        let live = self.scrape_and_cache().await?;
        Ok(ScrapedCars {
            source: DataOrigin::Live,
            count: live.len(),
            data: live,
        })
    }

    /// Force a fresh scrape. Failure is reported in the outcome.
    pub async fn refresh_cache(&self) -> RefreshOutcome {
        match self.scrape_and_cache().await {
            Ok(listings) => RefreshOutcome {
                success: true,
                message: format!("Cache refreshed with {} cars", listings.len()),
                count: Some(listings.len()),
            },
            Err(err) => {
                warn!("Cache refresh failed: {:#}", err);
                RefreshOutcome {
                    success: false,
                    message: format!("Failed to refresh cache: {err:#}"),
                    count: None,
                }
            }
        }
    }

    /// Structured, filtered and paginated listings
    pub async fn cars(&self, query: &ListingQuery) -> Result<ListingPage> {
        info!(?query, "Listing cars");

        let mut raw = self.cache.load().await?;
        info!("📋 {} cars in cache", raw.len());
        if raw.is_empty() {
            warn!("⚠️ Cache is empty, scraping...");
            self.scrape_and_cache().await?;
            raw = self.cache.load().await?;
        }

        let structured: Vec<StructuredListing> = raw.iter().map(structure).collect();
        let page = catalog::apply(structured, query);
        info!("✅ Returning {} of {} cars", page.data.len(), page.total);
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedScraper {
        listings: Vec<RawListing>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ScraperTrait for FixedScraper {
        async fn scrape(&self) -> Result<Vec<RawListing>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.listings.clone())
        }

        fn source_name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingScraper;

    #[async_trait]
    impl ScraperTrait for FailingScraper {
        async fn scrape(&self) -> Result<Vec<RawListing>> {
            anyhow::bail!("site unreachable")
        }

        fn source_name(&self) -> &'static str {
            "failing"
        }
    }

    fn raw(id: &str, title: &str, price: &str) -> RawListing {
        RawListing {
            title: title.to_string(),
            price: price.to_string(),
            car_id: id.to_string(),
            ..Default::default()
        }
    }

    fn service(dir: &tempfile::TempDir, calls: Arc<AtomicUsize>) -> CarService {
        let scraper = FixedScraper {
            listings: vec![
                raw("a", "2019年 丰田 凯美瑞 2.5L 自动", "22.5万"),
                raw("b", "2021 BMW X5 四驱", "55.8万"),
            ],
            calls,
        };
        CarService::new(
            Box::new(scraper),
            ListingCache::new(dir.path().join("cache.json")),
        )
    }

    #[tokio::test]
    async fn scrapes_once_then_serves_cache() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let service = service(&dir, calls.clone());

        let first = service.scraped_cars().await.unwrap();
        assert_eq!(first.source, DataOrigin::Live);
        assert_eq!(first.count, 2);

        let second = service.scraped_cars().await.unwrap();
        assert_eq!(second.source, DataOrigin::Cache);
        assert_eq!(second.data, first.data);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cars_structures_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir, Arc::new(AtomicUsize::new(0)));

        let query = ListingQuery {
            title: Some("丰田".to_string()),
            ..Default::default()
        };
        let page = service.cars(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id, "a");
        assert_eq!(page.data[0].year, Some(2019));
    }

    #[tokio::test]
    async fn refresh_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir, Arc::new(AtomicUsize::new(0)));

        let outcome = service.refresh_cache().await;
        assert!(outcome.success);
        assert_eq!(outcome.count, Some(2));
        assert_eq!(outcome.message, "Cache refreshed with 2 cars");
    }

    #[tokio::test]
    async fn refresh_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ListingCache::new(dir.path().join("cache.json"));
        cache.replace(&[raw("old", "奔驰 GLC 2020", "35万")]).await.unwrap();
        let service = CarService::new(Box::new(FailingScraper), cache.clone());

        let outcome = service.refresh_cache().await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("site unreachable"));
        assert_eq!(cache.load().await.unwrap().len(), 1);
    }
}
