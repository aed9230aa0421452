use che168_scout::catalog::{CountryFilter, ListingQuery, SortField, SortOrder, DEFAULT_PAGE_SIZE};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "che168-scout", about = "Scrape and browse che168 car listings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the listing page and replace the cache
    Scrape {
        /// Render the page in headless Chrome instead of a plain HTTP fetch
        #[arg(long)]
        browser: bool,
        /// Skip downloading listing photos
        #[arg(long)]
        no_images: bool,
    },
    /// Print the raw cached listings, scraping if the cache is empty
    Cached,
    /// Filter, sort and page structured listings
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    /// title, price, year or brand
    #[arg(long)]
    pub sort_by: Option<SortField>,
    /// asc or desc
    #[arg(long, default_value = "asc")]
    pub sort_order: SortOrder,
    /// Substring of the title or brand
    #[arg(long)]
    pub title: Option<String>,
    /// Minimum price in 万
    #[arg(long)]
    pub price_from: Option<f64>,
    /// Maximum price in 万
    #[arg(long)]
    pub price_to: Option<f64>,
    #[arg(long)]
    pub year_from: Option<i32>,
    #[arg(long)]
    pub year_to: Option<i32>,
    /// Country of origin, or `all`
    #[arg(long)]
    pub country: Option<CountryFilter>,
    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn query(&self) -> ListingQuery {
        ListingQuery {
            page: self.page,
            page_size: self.page_size,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            title: self.title.clone(),
            price_from: self.price_from,
            price_to: self.price_to,
            year_from: self.year_from,
            year_to: self.year_to,
            country: self.country,
        }
    }
}
