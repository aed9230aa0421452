use crate::models::RawListing;
use crate::scrapers::mock::placeholder_listings;
use crate::scrapers::parse::parse_listings;
use crate::scrapers::traits::ScraperTrait;
use crate::scrapers::types::{ScrapeParams, USER_AGENT};
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use std::ffi::OsStr;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

const DEBUG_DIR: &str = "debug";

/// Browser-based che168 scraper using headless Chrome.
/// The listing page renders its cards client-side, so this is the scraper
/// that normally finds real data.
pub struct Che168BrowserScraper {
    browser: Browser,
    params: ScrapeParams,
}

impl Che168BrowserScraper {
    /// Launch headless Chrome
    pub fn new(params: ScrapeParams) -> Result<Self> {
        info!("Launching headless Chrome...");

        let user_agent = format!("--user-agent={USER_AGENT}");
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .idle_browser_timeout(params.timeout * 4)
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-blink-features=AutomationControlled"),
                OsStr::new(&user_agent),
            ])
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        Ok(Self { browser, params })
    }

    /// Load the listing page and return its rendered HTML
    fn fetch_rendered_html(&self) -> Result<String> {
        info!("Opening che168 listing page {}", self.params.url);
        let tab = self.browser.new_tab()?;
        tab.set_default_timeout(self.params.timeout);

        tab.navigate_to(&self.params.url)?;
        tab.wait_until_navigated()?;

        info!("Waiting for page to fully load...");
        thread::sleep(Duration::from_secs(5));

        if let Err(err) = tab.evaluate(
            "Object.defineProperty(navigator, 'webdriver', {get: () => undefined})",
            false,
        ) {
            warn!("Could not hide navigator.webdriver: {:#}", err);
        }

        // Lazy-loaded cards only appear after scrolling
        if let Err(err) = tab.evaluate("window.scrollTo(0, document.body.scrollHeight);", false) {
            warn!("Scroll failed, lazy-loaded cards may be missing: {:#}", err);
        }
        thread::sleep(Duration::from_secs(3));

        let html_result = tab.evaluate("document.documentElement.outerHTML", false)?;
        let html = match html_result.value {
            Some(value) => value.as_str().unwrap_or("").to_string(),
            None => {
                warn!("Could not get HTML from page");
                String::new()
            }
        };

        std::fs::create_dir_all(DEBUG_DIR)?;
        std::fs::write(format!("{DEBUG_DIR}/che168_page.html"), &html)?;
        info!("Saved page HTML to {}/che168_page.html ({} bytes)", DEBUG_DIR, html.len());

        Ok(html)
    }
}

#[async_trait]
impl ScraperTrait for Che168BrowserScraper {
    async fn scrape(&self) -> Result<Vec<RawListing>> {
        let html = tokio::task::block_in_place(|| self.fetch_rendered_html())?;

        if html.is_empty() {
            warn!("HTML is empty");
            return Ok(placeholder_listings());
        }

        let page = parse_listings(&html);
        if page.listings.is_empty() {
            warn!("🚨 Parsing found no cars - using placeholder listings");
            return Ok(placeholder_listings());
        }

        info!(
            "Successfully scraped {} listings (selector: {})",
            page.listings.len(),
            page.selector.unwrap_or("none")
        );
        Ok(page.listings)
    }

    fn source_name(&self) -> &'static str {
        "che168-browser"
    }
}
