use std::future::Future;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{FetchRequest, Listing, Payload, SearchFilters};

/// Issues a single outbound HTTP request and returns the raw response.
///
/// Implementations own the transport details: fixed request headers,
/// per-attempt timeout, and bounded redirect following. A response with
/// any status code is `Ok`; only transport failures are `Err`.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, request: &FetchRequest)
    -> impl Future<Output = Result<Payload, AppError>> + Send;
}

/// Serves marketplace listings to the inbound API.
///
/// Today the only implementation is the in-memory mock catalog; a live
/// scraping source would slot in behind the same seam.
pub trait ListingSource: Send + Sync + Clone {
    fn search(
        &self,
        filters: &SearchFilters,
    ) -> impl Future<Output = Result<Vec<Listing>, AppError>> + Send;

    fn get(&self, id: Uuid) -> impl Future<Output = Result<Option<Listing>, AppError>> + Send;

    /// Distinct categories present in the source, sorted.
    fn categories(&self) -> impl Future<Output = Result<Vec<String>, AppError>> + Send;
}
