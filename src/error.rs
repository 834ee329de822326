//! Error types and result handling for kinema operations.
//!
//! This module defines the error handling system used throughout kinema.
//! All operations return a [`Result<T>`] which is a type alias for
//! `std::result::Result<T, Error>`.
//!
//! # Error Categories
//!
//! - **Network Errors**: Connection issues, timeouts, HTTP transport errors
//! - **Parse Errors**: Unexpected response shapes or invalid data
//! - **Api Errors**: Non-success HTTP statuses from the catalog service
//! - **Not Found**: Missing movies, shows, or people
//! - **Rate Limiting**: When the catalog service throttles requests
//! - **JSON Errors**: Serialization/deserialization failures
//!
//! # Examples
//!
//! ```rust
//! use kinema::{Error, Result};
//!
//! fn lookup(id: u64) -> Result<String> {
//!     if id == 0 {
//!         return Err(Error::not_found(format!("movie {}", id)));
//!     }
//!     Ok("Alien".to_string())
//! }
//!
//! match lookup(0) {
//!     Ok(title) => println!("{}", title),
//!     Err(Error::NotFound(msg)) => println!("missing: {}", msg),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Type alias for Results with kinema errors.
///
/// All public APIs in kinema return this Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering all catalog operations.
///
/// # Variants
///
/// * [`Network`](Error::Network) - HTTP client and connection errors
/// * [`Parse`](Error::Parse) - Data parsing and format errors
/// * [`Api`](Error::Api) - Non-success statuses from the catalog service
/// * [`NotFound`](Error::NotFound) - Missing resources
/// * [`RateLimit`](Error::RateLimit) - Rate limiting responses
/// * [`Json`](Error::Json) - JSON serialization errors
/// * [`Other`](Error::Other) - Generic error messages
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest), including
    /// connection timeouts, DNS resolution failures, and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response parsing and data format errors.
    ///
    /// Used when a response cannot be interpreted as expected, such as a
    /// missing required field or an unexpected structure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-success HTTP status from the catalog service.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code returned upstream
    /// * `message` - Descriptive context for the failing request
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Resource not found errors.
    ///
    /// Used when a requested movie, show, person, or listing cannot be
    /// found upstream.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limiting errors from the catalog service.
    ///
    /// Optionally carries the number of seconds to wait before retrying,
    /// as provided by the service's `Retry-After` header.
    #[error("Rate limited, retry after {retry_after:?} seconds")]
    RateLimit { retry_after: Option<u64> },

    /// JSON serialization and deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error messages.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a parse error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinema::Error;
    ///
    /// let error = Error::parse("missing `results` array");
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates an API error with status code and message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinema::Error;
    ///
    /// let error = Error::api(503, "GET /movie/popular");
    /// ```
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: msg.into(),
        }
    }

    /// Creates a not found error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinema::Error;
    ///
    /// let error = Error::not_found("person 42");
    /// ```
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Creates a rate limit error with optional retry-after time.
    ///
    /// The retry-after parameter typically comes from the `Retry-After`
    /// HTTP header.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinema::Error;
    ///
    /// let error = Error::rate_limit(Some(10));
    /// ```
    pub fn rate_limit(retry_after: Option<u64>) -> Self {
        Error::RateLimit { retry_after }
    }
}
