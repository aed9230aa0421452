use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of the car listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Che168,
}

/// Country of origin of a marque
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Germany,
    Japan,
    Korea,
    Usa,
    China,
    Uk,
    Italy,
    France,
    Sweden,
    Unknown,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Germany => "germany",
            Country::Japan => "japan",
            Country::Korea => "korea",
            Country::Usa => "usa",
            Country::China => "china",
            Country::Uk => "uk",
            Country::Italy => "italy",
            Country::France => "france",
            Country::Sweden => "sweden",
            Country::Unknown => "unknown",
        }
    }

    /// Parse a lowercase country code; anything unrecognised is `None`
    pub fn parse(value: &str) -> Option<Self> {
        let country = match value.trim().to_ascii_lowercase().as_str() {
            "germany" => Country::Germany,
            "japan" => Country::Japan,
            "korea" => Country::Korea,
            "usa" => Country::Usa,
            "china" => Country::China,
            "uk" => Country::Uk,
            "italy" => Country::Italy,
            "france" => Country::France,
            "sweden" => Country::Sweden,
            "unknown" => Country::Unknown,
            _ => return None,
        };
        Some(country)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A car card as scraped from the listing page, before any field extraction
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawListing {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub car_id: String,
    #[serde(default)]
    pub local_image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Transmission {
    Automatic,
    Manual,
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FuelType {
    Hybrid,
    Electric,
    Diesel,
    Petrol,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriveType {
    #[serde(rename = "AWD")]
    Awd,
    #[serde(rename = "FWD")]
    Fwd,
    #[serde(rename = "RWD")]
    Rwd,
}

/// Technical details guessed from title keywords
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specs {
    pub engine_volume: Option<String>,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub drive_type: DriveType,
}

/// Car listing with fields extracted from the scraped title and price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredListing {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub country: Country,
    /// Price in units of 万 (10 000 CNY)
    pub price_value: f64,
    pub price_formatted: String,
    pub image_url: String,
    pub local_image_url: Option<String>,
    pub images: Vec<String>,
    pub specs: Specs,
    pub source: Source,
    pub scraped_at: DateTime<Utc>,
}
