//! # Kinema - Async media-catalog client library
//!
//! Kinema is an async client library for browsing a media-metadata catalog
//! (movies, TV shows, anime, people). It provides typed access to the
//! catalog API together with the two stateful pieces a browsing front end
//! needs: a debounced autocomplete search controller with stale-result
//! suppression, and an incremental "load more" pager per catalog section.
//!
//! ## Features
//!
//! - **Typed Catalog API**: Search, section listings, discover, trending,
//!   and detail lookups with typed records
//! - **Debounced Search**: One call per settled typing pause; superseded
//!   responses are mechanically discarded
//! - **Incremental Pagination**: Strictly sequential per-section page
//!   accumulation with a derived has-more flag
//! - **Async/Await Support**: Built on tokio and reqwest
//! - **Rate Limiting**: Request pacing inside the catalog API's quota
//! - **Robust Error Handling**: Comprehensive error types with context
//!
//! ## Quick Start
//!
//! ### Searching the catalog
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kinema::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> kinema::Result<()> {
//!     let catalog = Arc::new(Tmdb::new("api-key"));
//!
//!     let mut search = SearchController::new(catalog);
//!     search.input("one");
//!     search.pump().await;
//!
//!     println!("{} results", search.results().len());
//!     if let Some(target) = search.select(0) {
//!         println!("navigate to {}", target.path());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Browsing a section
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kinema::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> kinema::Result<()> {
//!     let catalog = Arc::new(Tmdb::new("api-key"));
//!     let mut pager = Pager::new(catalog, Section::Movies(MovieCategory::TopRated));
//!
//!     pager.load_more().await?;
//!     if pager.has_more() {
//!         pager.load_more().await?;
//!     }
//!
//!     for item in pager.items() {
//!         println!("{}", item.title());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`catalog`]: The [`CatalogSource`] trait the control loops consume
//! - [`tmdb`]: The TMDB implementation of the catalog service
//! - [`search`]: The debounced search controller
//! - [`pager`]: The incremental section pager
//! - [`types`]: Core data structures for media items, pages, and sections
//! - [`net`]: HTTP client, rate limiting, and retry logic
//! - [`error`]: Comprehensive error handling

pub mod catalog;
pub mod error;
pub mod net;
pub mod pager;
pub mod search;
pub mod tmdb;
pub mod types;

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and traits, allowing you to
/// import everything you need with a single `use kinema::prelude::*;`
/// statement.
pub mod prelude {
    pub use crate::{
        catalog::CatalogSource,
        pager::Pager,
        search::SearchController,
        tmdb::Tmdb,
        types::{
            ImageSize, MediaItem, MediaKind, MovieCategory, NavigationTarget, Page, Section,
            TimeWindow, TvCategory,
        },
    };
}

// Re-export main types at crate root for direct access
pub use catalog::CatalogSource;
pub use error::{Error, Result};
pub use pager::Pager;
pub use search::{SearchController, SearchEvent};
pub use tmdb::Tmdb;
pub use types::{MediaItem, MediaKind, NavigationTarget, Page, Section};
