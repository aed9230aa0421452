use crate::scrapers::types::{ScrapeParams, DEFAULT_LISTING_URL};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scraping_url: String,
    pub scraping_timeout: Duration,
    /// Pause between image downloads
    pub scraping_delay: Duration,
    pub cache_path: PathBuf,
    pub static_images_dir: PathBuf,
    pub log_level: String,
}

fn seconds(name: &str, default: u64) -> Result<Duration> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .with_context(|| format!("{name} must be a whole number of seconds, got '{value}'")),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            scraping_url: env::var("SCRAPING_URL")
                .unwrap_or_else(|_| DEFAULT_LISTING_URL.to_string()),
            scraping_timeout: seconds("SCRAPING_TIMEOUT", 30)?,
            scraping_delay: seconds("SCRAPING_DELAY", 1)?,
            cache_path: env::var("CACHE_PATH")
                .unwrap_or_else(|_| "data/scrape_cache.json".to_string())
                .into(),
            static_images_dir: env::var("STATIC_IMAGES_DIR")
                .unwrap_or_else(|_| "static/images".to_string())
                .into(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn scrape_params(&self) -> ScrapeParams {
        ScrapeParams {
            url: self.scraping_url.clone(),
            timeout: self.scraping_timeout,
            delay: self.scraping_delay,
        }
    }
}
