use crate::models::RawListing;
use scraper::{ElementRef, Html, Selector};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

pub const SITE_ORIGIN: &str = "https://www.che168.com";

/// Label reported when cards were located through their images
pub const IMAGE_SEARCH: &str = "image-based-search";

/// Card containers, most specific first
const CARD_SELECTORS: &[&str] = &[
    "div[class*='viewlist_li']",
    "li[class*='list-item']",
    "div[class*='list-item']",
    ".list-item",
    "div[class*='car-card']",
    "div[class*='item-pic']",
    "div[class*='pic-box']",
    "div[class*='search-result']",
    "article",
    "[data-testid*='car']",
    ".used-car-item",
    ".sale-car",
    "li[class*='car']",
];

const TITLE_SELECTORS: &[&str] = &[
    "h3",
    "h4",
    "h5",
    ".title",
    ".car-name",
    ".name",
    "[class*='title']",
    "[class*='name']",
    "a[title]",
    ".series-name",
    ".model-name",
    ".car-title",
];

const PRICE_SELECTORS: &[&str] = &[
    ".price",
    "[class*='price']",
    ".money",
    "[class*='money']",
    "span[style*='color: rgb(255']",
    ".sale-price",
    ".current-price",
];

const IMAGE_ATTRS: &[&str] = &["src", "data-src", "data-original", "data-lazy", "data-img"];

/// Words that mark a container as a car card
const CARD_KEYWORDS: &[&str] = &["万", "车", "汽车", "bmw", "audi", "toyota"];

/// Words in an image alt/title that mark it as a car photo
const IMAGE_KEYWORDS: &[&str] = &[
    "车", "car", "汽车", "奔驰", "宝马", "奥迪", "丰田", "本田", "大众", "比亚迪", "bmw", "audi",
    "toyota", "honda",
];

/// A selector is trusted outright once it finds more than this many cards
const MIN_CONFIDENT_MATCHES: usize = 2;
const MAX_IMAGE_CARDS: usize = 20;
const MIN_TITLE_CHARS: usize = 3;

fn compile(selectors: &[&'static str]) -> Vec<(&'static str, Selector)> {
    selectors
        .iter()
        .map(|s| (*s, Selector::parse(s).unwrap()))
        .collect()
}

static CARDS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| compile(CARD_SELECTORS));
static TITLES: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| compile(TITLE_SELECTORS));
static PRICES: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| compile(PRICE_SELECTORS));
static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Listings found on a page together with the strategy that located them
#[derive(Debug, Default)]
pub struct ParsedPage {
    pub selector: Option<&'static str>,
    pub listings: Vec<RawListing>,
}

fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn looks_like_car_card(element: &ElementRef<'_>) -> bool {
    let text = text_of(element).to_lowercase();
    CARD_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// First card selector that yields something car-like
fn find_cards(document: &Html) -> (Option<&'static str>, Vec<ElementRef<'_>>) {
    for (name, selector) in CARDS.iter() {
        let cards: Vec<ElementRef<'_>> = document.select(selector).collect();
        debug!(selector = name, count = cards.len(), "tried card selector");

        if cards.len() > MIN_CONFIDENT_MATCHES {
            return (Some(*name), cards);
        }
        if !cards.is_empty() && cards.iter().take(3).any(looks_like_car_card) {
            return (Some(*name), cards);
        }
    }

    let mut parents: Vec<ElementRef<'_>> = Vec::new();
    for img in document.select(&IMG) {
        let alt = img.value().attr("alt").unwrap_or("").to_lowercase();
        let title = img.value().attr("title").unwrap_or("").to_lowercase();
        let label = format!("{alt}{title}");
        if !IMAGE_KEYWORDS.iter().any(|keyword| label.contains(keyword)) {
            continue;
        }

        let Some(parent) = img.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        if !parents.iter().any(|p| p.id() == parent.id()) {
            debug!(alt = %alt, "car image found");
            parents.push(parent);
        }
    }

    if parents.is_empty() {
        (None, parents)
    } else {
        parents.truncate(MAX_IMAGE_CARDS);
        (Some(IMAGE_SEARCH), parents)
    }
}

fn card_title(card: &ElementRef<'_>) -> Option<String> {
    for (_, selector) in TITLES.iter() {
        let Some(element) = card.select(selector).next() else {
            continue;
        };
        let title = match element.value().attr("title") {
            Some(attr) if !attr.is_empty() => attr.to_string(),
            _ => text_of(&element).trim().to_string(),
        };
        if title.chars().count() >= MIN_TITLE_CHARS {
            return Some(title);
        }
    }
    None
}

fn card_price(card: &ElementRef<'_>) -> Option<String> {
    for (_, selector) in PRICES.iter() {
        let Some(element) = card.select(selector).next() else {
            continue;
        };
        let price = text_of(&element).trim().to_string();
        if price.contains('万') || price.chars().any(|c| c.is_ascii_digit()) {
            return Some(price);
        }
    }
    None
}

/// Turn a protocol-relative or site-relative image path into an https URL
pub fn absolute_image_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else if url.starts_with('/') {
        format!("{SITE_ORIGIN}{url}")
    } else if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https:{url}")
    }
}

fn card_image(card: &ElementRef<'_>) -> String {
    let Some(img) = card.select(&IMG).next() else {
        return String::new();
    };

    IMAGE_ATTRS
        .iter()
        .filter_map(|attr| img.value().attr(attr))
        .find(|url| {
            !url.is_empty() && *url != "data:image" && !url.to_lowercase().contains("placeholder")
        })
        .map(absolute_image_url)
        .unwrap_or_default()
}

fn car_id(index: usize, title: &str, price: &str) -> String {
    let mut hasher = DefaultHasher::new();
    format!("{title}{price}").hash(&mut hasher);
    format!("che168_{}_{}", index, hasher.finish() % 10_000)
}

/// Extract raw listings from a che168 listing page.
///
/// Cards without a usable title are skipped. A card without a price keeps an
/// empty price string.
pub fn parse_listings(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    let (selector, cards) = find_cards(&document);

    let Some(selector) = selector else {
        warn!("No car cards found on page");
        return ParsedPage::default();
    };
    info!(selector, count = cards.len(), "Selected car cards");

    for (i, card) in cards.iter().take(3).enumerate() {
        let preview: String = text_of(card)
            .replace('\n', " ")
            .trim()
            .chars()
            .take(100)
            .collect();
        debug!(index = i + 1, tag = card.value().name(), %preview, "card sample");
    }

    let mut listings = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        let Some(title) = card_title(card) else {
            debug!(index = i, "skipping card without title");
            continue;
        };
        let price = card_price(card).unwrap_or_default();
        let image_url = card_image(card);

        let listing = RawListing {
            car_id: car_id(listings.len(), &title, &price),
            title,
            price,
            image_url,
            local_image_url: None,
        };
        debug!(car_id = %listing.car_id, title = %listing.title, price = %listing.price, "parsed card");
        listings.push(listing);
    }

    info!(count = listings.len(), selector, "Parsed listings");
    ParsedPage {
        selector: Some(selector),
        listings,
    }
}
