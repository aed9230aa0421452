//! Field extraction from scraped che168 titles.
//!
//! Every function here is total: text that matches no rule yields a default
//! (`None` year, `"Unknown"` brand, `"Unknown Model"`, `0.0` price,
//! [`Country::Unknown`]) instead of an error.

pub mod brand;
pub mod country;
pub mod model;
pub mod price;
pub mod specs;
pub mod year;

pub use brand::{extract_brand, UNKNOWN_BRAND};
pub use country::get_country_by_brand;
pub use model::{extract_model, UNKNOWN_MODEL};
pub use price::parse_price;
pub use specs::extract_specs;
pub use year::extract_year;

use crate::models::{RawListing, Source, StructuredListing};
use chrono::Utc;
use tracing::debug;

/// Derive a structured listing from a cached raw one.
///
/// Only `scraped_at` differs between two calls on the same input.
pub fn structure(raw: &RawListing) -> StructuredListing {
    let title = raw.title.as_str();

    let year = extract_year(title);
    let brand = extract_brand(title);
    let model = extract_model(title, &brand);
    let price_value = parse_price(&raw.price);
    let country = get_country_by_brand(&brand);

    debug!(
        car_id = %raw.car_id,
        %brand,
        %model,
        ?year,
        price_value,
        %country,
        "structured listing"
    );

    let local_image_url = raw
        .local_image_url
        .clone()
        .filter(|url| !url.is_empty());

    StructuredListing {
        id: raw.car_id.clone(),
        title: raw.title.clone(),
        brand,
        model,
        year,
        country,
        price_value,
        price_formatted: raw.price.clone(),
        image_url: raw.image_url.clone(),
        images: local_image_url.iter().cloned().collect(),
        local_image_url,
        specs: extract_specs(title),
        source: Source::Che168,
        scraped_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Country;

    fn raw(title: &str, price: &str) -> RawListing {
        RawListing {
            title: title.to_string(),
            price: price.to_string(),
            image_url: "https://img.che168.com/1.jpg".to_string(),
            car_id: "che168_0_42".to_string(),
            local_image_url: None,
        }
    }

    #[test]
    fn structures_camry_listing() {
        let listing = structure(&raw("2019年 丰田 凯美瑞 2.5L 自动", "22.5万"));

        assert_eq!(listing.id, "che168_0_42");
        assert_eq!(listing.year, Some(2019));
        assert_eq!(listing.brand, "丰田");
        assert_eq!(listing.price_value, 22.5);
        assert_eq!(listing.price_formatted, "22.5万");
        assert_eq!(listing.country, Country::Japan);
        assert_eq!(listing.source, Source::Che168);
        assert_eq!(listing.specs.engine_volume.as_deref(), Some("2.5L"));
        assert!(listing.images.is_empty());
    }

    #[test]
    fn empty_record_degrades_to_defaults() {
        let listing = structure(&RawListing::default());

        assert_eq!(listing.brand, UNKNOWN_BRAND);
        assert_eq!(listing.model, UNKNOWN_MODEL);
        assert_eq!(listing.year, None);
        assert_eq!(listing.price_value, 0.0);
        assert_eq!(listing.country, Country::Unknown);
    }

    #[test]
    fn local_image_populates_gallery() {
        let mut record = raw("宝马 X3 2020", "30万");
        record.local_image_url = Some("/static/images/che168_0_42.jpg".to_string());

        let listing = structure(&record);
        assert_eq!(listing.images, vec!["/static/images/che168_0_42.jpg"]);
    }

    #[test]
    fn blank_local_image_is_ignored() {
        let mut record = raw("宝马 X3 2020", "30万");
        record.local_image_url = Some(String::new());

        let listing = structure(&record);
        assert_eq!(listing.local_image_url, None);
        assert!(listing.images.is_empty());
    }
}
