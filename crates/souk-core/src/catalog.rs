//! In-memory mock listing catalog.
//!
//! Stands in for the live marketplace until the scraping pipeline lands.
//! Filtering happens entirely in memory over a seeded set of listings;
//! nothing persists beyond the process.

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Listing, SearchFilters};
use crate::traits::ListingSource;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

/// A [`ListingSource`] backed by a fixed in-memory set of listings.
#[derive(Clone)]
pub struct MockCatalog {
    listings: Arc<Vec<Listing>>,
}

impl MockCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(listings),
        }
    }

    /// Catalog seeded with a representative spread of mock listings.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let listing = |title: &str,
                       description: &str,
                       price_cents: i64,
                       category: &str,
                       location: &str,
                       days_ago: i64| Listing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            price_cents,
            currency: "EUR".to_string(),
            category: category.to_string(),
            location: location.to_string(),
            image_url: format!(
                "https://img.souk.test/{}.jpg",
                title.to_lowercase().replace(' ', "-")
            ),
            url: format!(
                "https://souk.test/listings/{}",
                title.to_lowercase().replace(' ', "-")
            ),
            posted_at: now - ChronoDuration::days(days_ago),
        };

        Self::new(vec![
            listing(
                "Trek mountain bike",
                "Hardtail 29er, recently serviced, new brake pads",
                42_000,
                "sports",
                "Berlin",
                1,
            ),
            listing(
                "iPhone 13 128GB",
                "Battery health 89%, minor scratches on the frame",
                38_500,
                "electronics",
                "Hamburg",
                2,
            ),
            listing(
                "IKEA Kivik sofa",
                "Three-seater, dark grey cover, pet-free household",
                15_000,
                "furniture",
                "Berlin",
                3,
            ),
            listing(
                "Thinkpad X1 Carbon Gen 9",
                "16GB RAM, 512GB SSD, German keyboard layout",
                72_000,
                "electronics",
                "Munich",
                4,
            ),
            listing(
                "VW Golf 6 1.4 TSI",
                "160k km, new TUV, second owner, full service history",
                520_000,
                "vehicles",
                "Cologne",
                5,
            ),
            listing(
                "Oak dining table",
                "Solid oak, seats six, some wear on the surface",
                22_000,
                "furniture",
                "Munich",
                6,
            ),
            listing(
                "PlayStation 5 disc edition",
                "Boxed with two controllers and three games",
                41_000,
                "electronics",
                "Berlin",
                7,
            ),
            listing(
                "Cargo bike Babboe Big",
                "Three-wheel family cargo bike with rain tent",
                95_000,
                "sports",
                "Hamburg",
                9,
            ),
            listing(
                "Vintage record player",
                "Dual 1219 turntable, serviced, sounds great",
                18_500,
                "electronics",
                "Leipzig",
                12,
            ),
            listing(
                "Kids bunk bed",
                "White wood bunk bed with ladder, disassembled for pickup",
                9_000,
                "furniture",
                "Cologne",
                14,
            ),
        ])
    }

    /// Number of listings in the catalog.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn matches(listing: &Listing, filters: &SearchFilters) -> bool {
        if let Some(q) = &filters.q {
            let q = q.to_lowercase();
            let in_title = listing.title.to_lowercase().contains(&q);
            let in_description = listing.description.to_lowercase().contains(&q);
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(category) = &filters.category {
            if !listing.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(min) = filters.min_price_cents {
            if listing.price_cents < min {
                return false;
            }
        }

        if let Some(max) = filters.max_price_cents {
            if listing.price_cents > max {
                return false;
            }
        }

        if let Some(location) = &filters.location {
            if !listing
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

impl ListingSource for MockCatalog {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Listing>, AppError> {
        let limit = filters.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let results: Vec<Listing> = self
            .listings
            .iter()
            .filter(|l| Self::matches(l, filters))
            .take(limit)
            .cloned()
            .collect();
        Ok(results)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Listing>, AppError> {
        Ok(self.listings.iter().find(|l| l.id == id).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>, AppError> {
        let mut categories: Vec<String> = self
            .listings
            .iter()
            .map(|l| l.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
