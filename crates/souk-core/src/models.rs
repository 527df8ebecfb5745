use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use crate::error::AppError;

/// Parameters for a single resilient fetch. Immutable once constructed.
///
/// Construction validates everything up front so a bad request never
/// reaches the network: the target must be an absolute http(s) URL,
/// `max_attempts` must be at least 1, and the per-attempt timeout must
/// be positive. Violations are [`AppError::ConfigError`].
#[derive(Debug, Clone)]
pub struct FetchRequest {
    url: Url,
    max_attempts: u32,
    per_attempt_timeout: Duration,
}

impl FetchRequest {
    pub fn new(
        target: &str,
        max_attempts: u32,
        per_attempt_timeout: Duration,
    ) -> Result<Self, AppError> {
        let url = Url::parse(target)
            .map_err(|e| AppError::ConfigError(format!("Invalid target URL '{target}': {e}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::ConfigError(format!(
                    "URL scheme '{scheme}' is not allowed (only http/https)"
                )));
            }
        }

        if url.host_str().is_none() {
            return Err(AppError::ConfigError(format!("URL has no host: {target}")));
        }

        if max_attempts == 0 {
            return Err(AppError::ConfigError(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        if per_attempt_timeout.is_zero() {
            return Err(AppError::ConfigError(
                "per-attempt timeout must be positive".to_string(),
            ));
        }

        Ok(Self {
            url,
            max_attempts,
            per_attempt_timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn per_attempt_timeout(&self) -> Duration {
        self.per_attempt_timeout
    }
}

/// The outcome of a successful fetch attempt.
///
/// Any HTTP response counts as a success at the fetch layer; status
/// interpretation belongs to the caller. The body is kept opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub status: u16,
    pub body: String,
}

impl Payload {
    /// True for 2xx responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A classifieds listing as served by the search API.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Price in minor currency units to avoid float comparison headaches.
    pub price_cents: i64,
    pub currency: String,
    pub category: String,
    pub location: String,
    pub image_url: String,
    pub url: String,
    pub posted_at: DateTime<Utc>,
}

/// In-memory search filters. All fields optional; empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Case-insensitive substring match on title and description.
    pub q: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    /// Case-insensitive substring match on location.
    pub location: Option<String>,
    /// Result cap; defaults to 20, clamped to 100.
    pub limit: Option<usize>,
}
