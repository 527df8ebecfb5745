pub mod catalog;
pub mod error;
pub mod models;
pub mod retry;
pub mod testutil;
pub mod traits;

pub use catalog::MockCatalog;
pub use error::AppError;
pub use models::{FetchRequest, Listing, Payload, SearchFilters};
pub use retry::{RetryConfig, RetryingFetcher};
pub use traits::{Fetcher, ListingSource};
