//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! Mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{FetchRequest, Payload};
use crate::traits::Fetcher;

/// Mock fetcher that returns a configurable queue of responses.
///
/// Each call pops the first element; when the queue is empty a default
/// 200 payload is returned. Calls are counted so retry tests can assert
/// on the exact number of attempts.
#[derive(Clone)]
pub struct MockFetcher {
    responses: Arc<Mutex<Vec<Result<Payload, AppError>>>>,
    calls: Arc<Mutex<u32>>,
}

impl MockFetcher {
    /// Fetcher that returns a single 200 payload with the given body.
    pub fn ok(body: &str) -> Self {
        Self::with_responses(vec![Ok(Payload {
            status: 200,
            body: body.to_string(),
        })])
    }

    /// Fetcher that returns a single error.
    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<Payload, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of fetch calls made so far.
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, _request: &FetchRequest) -> Result<Payload, AppError> {
        *self.calls.lock().unwrap() += 1;
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Payload {
                status: 200,
                body: "default".to_string(),
            })
        } else {
            responses.remove(0)
        }
    }
}
