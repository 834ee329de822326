//! Network utilities for HTTP requests, rate limiting, and retries.
//!
//! This module provides the networking infrastructure for kinema:
//!
//! - **HTTP Client**: A global, configured HTTP client with connection pooling
//! - **Rate Limiting**: Per-client pacing to respect catalog API quotas
//! - **Retry Logic**: Automatic retries with exponential backoff
//!
//! # Examples
//!
//! ```rust
//! use kinema::net::HttpClient;
//!
//! # async fn example() -> kinema::Result<()> {
//! let client = HttpClient::new("tmdb")
//!     .with_rate_limit(250)  // 250ms between requests
//!     .with_max_retries(3);
//!
//! let body: serde_json::Value = client.get_json("https://api.example.com").await?;
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Global HTTP client instance with optimized configuration.
///
/// Configured with a 30-second timeout, connection pooling, compression
/// support, and a crate User-Agent. Created lazily on first use and reused
/// across all HTTP operations.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("kinema/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// Per-key rate limiter to stay inside catalog API quotas.
///
/// Tracks the last request time for each key and enforces a minimum delay
/// between requests. Safe to use across tasks.
#[derive(Debug)]
pub struct RateLimiter {
    last_request: Mutex<HashMap<String, Instant>>,
    default_delay: Duration,
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            last_request: Mutex::new(HashMap::new()),
            default_delay: self.default_delay,
        }
    }
}

impl RateLimiter {
    /// Creates a new rate limiter with the specified default delay.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinema::net::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(250);
    /// ```
    pub fn new(delay_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(HashMap::new()),
            default_delay: Duration::from_millis(delay_ms),
        }
    }

    /// Waits if necessary before allowing a request for the specified key.
    pub async fn wait(&self, key: &str) {
        let now = Instant::now();
        let wait_duration = {
            let last_map = self.last_request.lock();
            if let Some(&last) = last_map.get(key) {
                let elapsed = now.duration_since(last);
                if elapsed < self.default_delay {
                    Some(self.default_delay - elapsed)
                } else {
                    None
                }
            } else {
                None
            }
        };

        if let Some(duration) = wait_duration {
            tokio::time::sleep(duration).await;
        }

        self.last_request
            .lock()
            .insert(key.to_string(), Instant::now());
    }
}

/// HTTP client wrapper with built-in rate limiting and retry logic.
///
/// `HttpClient` provides a high-level interface for making HTTP requests
/// with automatic pacing, retries, and error handling. Each client is
/// keyed by the upstream service it talks to.
#[derive(Clone, Debug)]
pub struct HttpClient {
    key: String,
    rate_limiter: RateLimiter,
    max_retries: u32,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified upstream key.
    ///
    /// Defaults: 250ms pacing, 3 retries.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rate_limiter: RateLimiter::new(250),
            max_retries: 3,
        }
    }

    /// Sets the pacing delay for this client in milliseconds.
    pub fn with_rate_limit(mut self, delay_ms: u64) -> Self {
        self.rate_limiter = RateLimiter::new(delay_ms);
        self
    }

    /// Sets the maximum number of retries for failed requests.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Performs a GET request with automatic retry logic and rate limiting.
    ///
    /// Transport errors retry with a flat delay, HTTP 429 with exponential
    /// backoff; a 429 that survives all retries surfaces as
    /// [`Error::RateLimit`](crate::Error::RateLimit) carrying the
    /// `Retry-After` header value. A 404 maps to
    /// [`Error::NotFound`](crate::Error::NotFound), other non-success
    /// statuses to [`Error::Api`](crate::Error::Api).
    pub async fn get(&self, url: &str) -> crate::Result<Bytes> {
        let mut attempts = 0;

        loop {
            self.rate_limiter.wait(&self.key).await;
            tracing::debug!(key = %self.key, url = %strip_query(url), "GET");

            match CLIENT.get(url).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return Ok(response.bytes().await?);
                    }

                    if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(crate::Error::not_found(strip_query(url)));
                    }

                    if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        if attempts < self.max_retries {
                            attempts += 1;
                            let delay = Duration::from_secs(2_u64.pow(attempts));
                            tokio::time::sleep(delay).await;
                            continue;
                        }

                        let retry_after = response
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|v| v.parse::<u64>().ok());

                        return Err(crate::Error::rate_limit(retry_after));
                    }

                    return Err(crate::Error::api(
                        response.status().as_u16(),
                        format!("GET {}", strip_query(url)),
                    ));
                }
                Err(e) => {
                    if attempts < self.max_retries {
                        attempts += 1;
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Performs a GET request and deserializes the response as JSON.
    ///
    /// # Errors
    ///
    /// * All errors from [`get()`](HttpClient::get)
    /// * [`Error::Json`](crate::Error::Json) - If JSON parsing fails
    pub async fn get_json<T>(&self, url: &str) -> crate::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = self.get(url).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Drops the query string so credentials never land in errors or logs.
fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
