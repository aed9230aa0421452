//! Filtering, sorting and paging over structured listings.

pub mod query;

pub use query::{CountryFilter, ListingQuery, SortField, SortOrder, DEFAULT_PAGE_SIZE};

use crate::models::StructuredListing;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// One page of listings plus the size of the whole filtered set
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub data: Vec<StructuredListing>,
}

/// Whether a listing passes every filter set on the query
fn matches(listing: &StructuredListing, query: &ListingQuery) -> bool {
    if let Some(needle) = query.title.as_deref().filter(|t| !t.is_empty()) {
        let needle = needle.to_lowercase();
        if !listing.title.to_lowercase().contains(&needle)
            && !listing.brand.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if query.price_from.is_some_and(|min| listing.price_value < min) {
        return false;
    }
    if query.price_to.is_some_and(|max| listing.price_value > max) {
        return false;
    }

    // Any year bound excludes listings without a year
    if query.year_from.is_some() || query.year_to.is_some() {
        let Some(year) = listing.year else {
            return false;
        };
        if query.year_from.is_some_and(|from| year < from) {
            return false;
        }
        if query.year_to.is_some_and(|to| year > to) {
            return false;
        }
    }

    match query.country {
        Some(CountryFilter::Only(country)) => listing.country == country,
        Some(CountryFilter::All) | None => true,
    }
}

fn compare(a: &StructuredListing, b: &StructuredListing, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Price => a.price_value.total_cmp(&b.price_value),
        SortField::Year => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
        SortField::Brand => a.brand.cmp(&b.brand),
    }
}

/// Filter, sort and paginate `listings`.
///
/// `total` counts every listing that passed the filters; a page past the
/// end comes back with empty `data`.
pub fn apply(listings: Vec<StructuredListing>, query: &ListingQuery) -> ListingPage {
    let before = listings.len();
    let mut filtered: Vec<StructuredListing> = listings
        .into_iter()
        .filter(|listing| matches(listing, query))
        .collect();
    debug!(before, after = filtered.len(), "filtered listings");

    if let Some(field) = query.sort_by {
        match query.sort_order {
            SortOrder::Asc => filtered.sort_by(|a, b| compare(a, b, field)),
            SortOrder::Desc => filtered.sort_by(|a, b| compare(b, a, field)),
        }
    }

    let total = filtered.len();
    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(query.page_size);
    let data = filtered
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .collect();

    ListingPage {
        total,
        page,
        page_size: query.page_size,
        data,
    }
}
