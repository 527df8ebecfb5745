use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_core::models::{Listing, SearchFilters};

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchListingsQuery {
    /// Case-insensitive text match on title and description.
    pub q: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    /// Case-insensitive substring match on location.
    pub location: Option<String>,
    /// Result cap (default 20, max 100).
    pub limit: Option<usize>,
}

impl From<SearchListingsQuery> for SearchFilters {
    fn from(query: SearchListingsQuery) -> Self {
        Self {
            q: query.q,
            category: query.category,
            min_price_cents: query.min_price_cents,
            max_price_cents: query.max_price_cents,
            location: query.location,
            limit: query.limit,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ListingResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub currency: String,
    pub category: String,
    pub location: String,
    pub image_url: String,
    pub url: String,
    pub posted_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            price_cents: listing.price_cents,
            currency: listing.currency,
            category: listing.category,
            location: listing.location,
            image_url: listing.image_url,
            url: listing.url,
            posted_at: listing.posted_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub listings: Vec<ListingResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of listings currently served by the mock catalog.
    pub listings: usize,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
