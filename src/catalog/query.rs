use crate::models::Country;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Price,
    Year,
    Brand,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "price" => Ok(Self::Price),
            "year" => Ok(Self::Year),
            "brand" => Ok(Self::Brand),
            other => Err(format!("unknown sort field '{other}' (title, price, year, brand)")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    /// Anything other than `desc` sorts ascending
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Ok(Self::Asc)
        }
    }
}

/// Country filter; `all` disables it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryFilter {
    All,
    Only(Country),
}

impl FromStr for CountryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Country::parse(s)
            .map(Self::Only)
            .ok_or_else(|| format!("unknown country '{s}'"))
    }
}

/// Filter, sort and paging options for a listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
    /// Case-insensitive substring of title or brand
    pub title: Option<String>,
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub country: Option<CountryFilter>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: SortOrder::Asc,
            title: None,
            price_from: None,
            price_to: None,
            year_from: None,
            year_to: None,
            country: None,
        }
    }
}
