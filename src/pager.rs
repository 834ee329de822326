//! Incremental "load more" pagination per catalog section.
//!
//! [`Pager`] accumulates listing pages for one [`Section`] at a time. Page
//! fetches are strictly sequential: `load_more` takes `&mut self`, so a
//! second fetch for the same pager cannot start while one is in flight,
//! and the cursor only advances after a page has been applied. Switching
//! sections ends the category session: the cursor resets to 1 and the
//! accumulated list is cleared before the new section's first fetch.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kinema::pager::Pager;
//! use kinema::tmdb::Tmdb;
//! use kinema::types::{MovieCategory, Section};
//!
//! # async fn example() -> kinema::Result<()> {
//! let catalog = Arc::new(Tmdb::new("api-key"));
//! let mut pager = Pager::new(catalog, Section::Movies(MovieCategory::Popular));
//!
//! pager.load_more().await?; // page 1
//! while pager.has_more() {
//!     pager.load_more().await?;
//! }
//! println!("{} items", pager.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    catalog::CatalogSource,
    error::Result,
    types::{MediaItem, Section},
};

/// Accumulating pager over one catalog section.
pub struct Pager {
    catalog: Arc<dyn CatalogSource>,
    section: Section,

    /// Next page to request, 1-based.
    next_page: u32,
    /// Upstream-reported total, known after the first applied page.
    total_pages: Option<u32>,
    items: Vec<MediaItem>,
}

impl Pager {
    /// Creates a pager positioned at page 1 of `section`, nothing loaded.
    pub fn new(catalog: Arc<dyn CatalogSource>, section: Section) -> Self {
        Self {
            catalog,
            section,
            next_page: 1,
            total_pages: None,
            items: Vec::new(),
        }
    }

    /// Fetches the next page and appends its results.
    ///
    /// Returns the number of items appended. A no-op returning `Ok(0)`
    /// once the section is exhausted. On failure the accumulated list and
    /// cursor are untouched, so calling again retries the same page.
    pub async fn load_more(&mut self) -> Result<usize> {
        if !self.has_more() {
            return Ok(0);
        }

        let page = self.next_page;
        let fetched = self.catalog.section(self.section, page).await?;

        let appended = fetched.results.len();
        self.items.extend(fetched.results);
        // A service reporting zero pages still terminates the session.
        self.total_pages = Some(fetched.total_pages.max(1));
        self.next_page = page + 1;

        Ok(appended)
    }

    /// Switches to `section`, resetting the category session.
    ///
    /// Clears the accumulated list and returns the cursor to page 1
    /// synchronously. Selecting the already-active section is a no-op.
    pub fn select(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        self.section = section;
        self.reset();
    }

    /// Restarts the current section from page 1.
    pub fn refresh(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.next_page = 1;
        self.total_pages = None;
        self.items.clear();
    }

    /// Whether further pages exist for this category session.
    ///
    /// `true` until the last requested page reaches the upstream-reported
    /// total; always `true` before the first page has been applied.
    pub fn has_more(&self) -> bool {
        match self.total_pages {
            None => true,
            Some(total) => self.next_page <= total,
        }
    }

    /// The active section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// The page the next `load_more` will request.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Accumulated items, in page-then-upstream order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Number of accumulated items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been loaded in this category session.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
