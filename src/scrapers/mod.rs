pub mod browser;
pub mod http;
pub mod images;
pub mod mock;
pub mod parse;
pub mod traits;
pub mod types;

pub use browser::Che168BrowserScraper;
pub use http::Che168Scraper;
pub use images::ImageDownloader;
pub use traits::ScraperTrait;
pub use types::ScrapeParams;
