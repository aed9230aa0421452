mod cli;

use anyhow::Result;
use che168_scout::cache::ListingCache;
use che168_scout::config::AppConfig;
use che168_scout::scrapers::{Che168BrowserScraper, Che168Scraper, ImageDownloader, ScraperTrait};
use che168_scout::service::CarService;
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🚗 che168 scout");

    let params = config.scrape_params();
    let cache = ListingCache::new(&config.cache_path);

    match cli.command {
        Command::Scrape { browser, no_images } => {
            let scraper: Box<dyn ScraperTrait> = if browser {
                Box::new(Che168BrowserScraper::new(params.clone())?)
            } else {
                Box::new(Che168Scraper::with_params(params.clone())?)
            };
            let mut service = CarService::new(scraper, cache);
            if !no_images {
                let images = ImageDownloader::new(&config.static_images_dir, params.timeout)?;
                service = service.with_images(images, params.delay);
            }

            let outcome = service.refresh_cache().await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.success {
                anyhow::bail!(outcome.message);
            }
        }
        Command::Cached => {
            let service = CarService::new(Box::new(Che168Scraper::with_params(params)?), cache);
            let cars = service.scraped_cars().await?;
            println!("{}", serde_json::to_string_pretty(&cars)?);
        }
        Command::List(args) => {
            let service = CarService::new(Box::new(Che168Scraper::with_params(params)?), cache);
            let page = service.cars(&args.query()).await?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            println!(
                "Page {} ({} per page), {} matching cars\n",
                page.page, page.page_size, page.total
            );
            let offset = (page.page.max(1) - 1) * page.page_size;
            for (i, car) in page.data.iter().enumerate() {
                println!("{}. {} ({})", offset + i + 1, car.title, car.price_formatted);
                println!("   Brand: {}  Model: {}", car.brand, car.model);
                match car.year {
                    Some(year) => println!("   Year: {}  Country: {}", year, car.country),
                    None => println!("   Year: -  Country: {}", car.country),
                }
                println!("   Price: {}万", car.price_value);
                println!("   ID: {}", car.id);
                println!();
            }
        }
    }

    Ok(())
}
