use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;

use souk_core::error::AppError;
use souk_core::models::{FetchRequest, Payload};
use souk_core::traits::Fetcher;

/// Maximum redirects followed transparently within a single attempt.
/// Redirects never consume a retry.
const MAX_REDIRECTS: usize = 5;

/// HTTP fetcher using reqwest.
///
/// Sends a fixed, non-identifying header set with every request and honors
/// the per-attempt timeout carried by the [`FetchRequest`]. Any HTTP
/// response, whatever its status code, is returned as a [`Payload`];
/// only transport failures (timeout, connection error, DNS failure) map
/// to retryable errors.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.7"));

        let client = Client::builder()
            .user_agent("souk/0.1 (marketplace fetcher)")
            .default_headers(headers)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<Payload, AppError> {
        let timeout = request.per_attempt_timeout();
        // Rounded up so sub-second timeouts never report "0 seconds".
        let timeout_secs = timeout.as_millis().div_ceil(1000) as u64;

        let response = self
            .client
            .get(request.url().as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(timeout_secs)
                } else if e.is_connect() {
                    AppError::NetworkError(format!("Connection failed: {e}"))
                } else {
                    AppError::HttpError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(timeout_secs)
            } else {
                AppError::HttpError(format!("Failed to read response body: {e}"))
            }
        })?;

        tracing::debug!(url = %request.url(), status, bytes = body.len(), "Fetched");

        Ok(Payload { status, body })
    }
}
