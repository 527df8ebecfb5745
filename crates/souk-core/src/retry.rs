//! Bounded-retry fetching with linear backoff.
//!
//! Wraps any [`Fetcher`] with a retry loop: transport failures (timeout,
//! connection refused/reset, DNS) are retried up to the request's attempt
//! budget, with a delay of `base_delay * attempt_index` between attempts.
//! A response with any status code ends the loop immediately; non-2xx is
//! the caller's business, not a reason to retry. Only the final attempt's
//! error is surfaced; earlier failures are logged at `warn`.
//!
//! No circuit breaking, no jitter. The backoff timer is non-blocking, so
//! concurrent fetches never stall each other.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use souk_core::models::FetchRequest;
//! use souk_core::retry::RetryingFetcher;
//!
//! # async fn run() -> Result<(), souk_core::error::AppError> {
//! # use souk_core::traits::Fetcher;
//! # #[derive(Clone)] struct MyFetcher;
//! # impl Fetcher for MyFetcher {
//! #     async fn fetch(&self, _: &FetchRequest) -> Result<souk_core::models::Payload, souk_core::error::AppError> { todo!() }
//! # }
//! let fetcher = RetryingFetcher::new(MyFetcher);
//! let request = FetchRequest::new("https://example.test/ok", 3, Duration::from_secs(10))?;
//! let payload = fetcher.fetch(&request).await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::AppError;
use crate::models::{FetchRequest, Payload};
use crate::traits::Fetcher;

/// Configuration for the retry loop.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Backoff unit: the delay before attempt `i + 1` is `base_delay * i`.
    pub base_delay: Duration,
}

impl RetryConfig {
    pub fn new(base_delay: Duration) -> Self {
        Self { base_delay }
    }
}

impl Default for RetryConfig {
    /// 1 second backoff unit.
    fn default() -> Self {
        Self {
            base_delay: Duration::from_secs(1),
        }
    }
}

/// A [`Fetcher`] wrapper that retries transport failures with linear backoff.
///
/// Stateless and reentrant: concurrent calls share nothing, and each call's
/// retry loop is sequential (attempt `i + 1` never starts before attempt
/// `i`'s delay has elapsed).
#[derive(Clone)]
pub struct RetryingFetcher<F> {
    inner: F,
    config: RetryConfig,
}

impl<F: Fetcher> RetryingFetcher<F> {
    /// Wrap an existing fetcher with the default 1-second backoff unit.
    pub fn new(inner: F) -> Self {
        Self::with_config(inner, RetryConfig::default())
    }

    pub fn with_config(inner: F, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Fetch with caller-driven cancellation.
    ///
    /// Cancelling the token aborts promptly, whether before an attempt,
    /// mid-flight, or during backoff, returning [`AppError::Cancelled`].
    /// The in-flight request future is dropped on cancellation, which
    /// releases the underlying connection.
    pub async fn fetch_with_cancellation(
        &self,
        request: &FetchRequest,
        cancel: &CancellationToken,
    ) -> Result<Payload, AppError> {
        let max_attempts = request.max_attempts();
        let mut attempt = 1u32;

        loop {
            let result = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(AppError::Cancelled),
                res = self.inner.fetch(request) => res,
            };

            match result {
                Ok(payload) => {
                    tracing::debug!(
                        url = %request.url(),
                        attempt,
                        status = payload.status,
                        "Fetch succeeded"
                    );
                    return Ok(payload);
                }
                // Non-transport errors don't consume the retry budget.
                Err(e) if !e.is_transport() => return Err(e),
                Err(e) => {
                    if attempt == max_attempts {
                        return Err(AppError::RetriesExhausted {
                            attempts: max_attempts,
                            last: Box::new(e),
                        });
                    }

                    let delay = self.config.base_delay * attempt;
                    tracing::warn!(
                        url = %request.url(),
                        attempt,
                        max_attempts,
                        error = %e,
                        delay_ms = %delay.as_millis(),
                        "Fetch attempt failed, backing off"
                    );

                    tokio::select! {
                        biased;
                        () = cancel.cancelled() => return Err(AppError::Cancelled),
                        () = tokio::time::sleep(delay) => {}
                    }

                    attempt += 1;
                }
            }
        }
    }
}

impl<F: Fetcher> Fetcher for RetryingFetcher<F> {
    async fn fetch(&self, request: &FetchRequest) -> Result<Payload, AppError> {
        self.fetch_with_cancellation(request, &CancellationToken::new())
            .await
    }
}
