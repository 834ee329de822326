//! The catalog service trait consumed by the control loops.
//!
//! [`CatalogSource`] is the seam between the search/pager state machines
//! and the upstream metadata service. The shipped implementation is
//! [`Tmdb`](crate::tmdb::Tmdb); tests substitute a scripted fake.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use kinema::catalog::CatalogSource;
//! use kinema::types::{MediaItem, Page, Section};
//! use kinema::Result;
//!
//! struct EmptyCatalog;
//!
//! #[async_trait]
//! impl CatalogSource for EmptyCatalog {
//!     fn id(&self) -> &'static str { "empty" }
//!     fn name(&self) -> &'static str { "Empty Catalog" }
//!
//!     async fn search_multi(&self, _query: &str) -> Result<Page<MediaItem>> {
//!         Ok(Page::default())
//!     }
//!
//!     async fn section(&self, _section: Section, page: u32) -> Result<Page<MediaItem>> {
//!         Ok(Page { page, ..Page::default() })
//!     }
//! }
//!
//! let catalog: Arc<dyn CatalogSource> = Arc::new(EmptyCatalog);
//! assert_eq!(catalog.id(), "empty");
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{MediaItem, Page, Section},
};

/// Trait a catalog metadata service must implement.
///
/// The two operations the control loops depend on: free-text search across
/// all record kinds, and paginated section listings. Implementations set
/// the `media_type` discriminator at ingestion, so every returned
/// [`MediaItem`] is already tagged.
///
/// # Implementation Guidelines
///
/// - Use the [`net::HttpClient`](crate::net::HttpClient) for HTTP requests
/// - Return detailed errors using the [`Error`](crate::Error) types
/// - Preserve upstream result order; callers rely on it for ranking
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the unique identifier for this catalog service.
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of this catalog service.
    fn name(&self) -> &'static str;

    /// Searches movies, TV shows, and people in one call.
    ///
    /// Returns the first page of matches in upstream ranking order.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`](crate::Error::Network) - For network/connection issues
    /// * [`Error::Api`](crate::Error::Api) - For upstream HTTP errors
    /// * [`Error::Json`](crate::Error::Json) - For malformed responses
    async fn search_multi(&self, query: &str) -> Result<Page<MediaItem>>;

    /// Fetches one page of a catalog section listing.
    ///
    /// `page` is 1-based. The returned page carries the upstream
    /// `total_pages` figure the pager terminates on.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`search_multi`](CatalogSource::search_multi).
    async fn section(&self, section: Section, page: u32) -> Result<Page<MediaItem>>;
}
