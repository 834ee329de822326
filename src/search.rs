//! Debounced search controller with stale-result suppression.
//!
//! [`SearchController`] turns raw keystroke input into at most one catalog
//! call per settled typing pause, and renders results only for the most
//! recently fired query. The debounce timer is an abortable task handle,
//! and every completion event carries the generation it was spawned under,
//! so a superseded response can never clobber newer state.
//!
//! The controller is event-driven: UI code calls [`input`] on every
//! keystroke, then drains completion events with [`try_pump`] (or awaits
//! one with [`pump`]) from its event loop.
//!
//! [`input`]: SearchController::input
//! [`try_pump`]: SearchController::try_pump
//! [`pump`]: SearchController::pump
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kinema::search::SearchController;
//! use kinema::tmdb::Tmdb;
//!
//! # async fn example() {
//! let catalog = Arc::new(Tmdb::new("api-key"));
//! let mut search = SearchController::new(catalog);
//!
//! search.input("one");
//! search.pump().await;
//!
//! for item in search.results() {
//!     println!("{}", item.title());
//! }
//! if let Some(target) = search.select(1) {
//!     println!("navigate to {}", target.path());
//! }
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::{
    catalog::CatalogSource,
    types::{MediaItem, NavigationTarget},
};

/// Quiet period after the last keystroke before a call is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this (trimmed) never reach the network.
pub const MIN_QUERY_LEN: usize = 2;

/// Result dropdown shows at most this many entries.
pub const MAX_RESULTS: usize = 8;

/// Completion event for a scheduled search, tagged with its generation.
#[derive(Debug)]
pub enum SearchEvent {
    /// The catalog call resolved with a result page.
    Resolved {
        generation: u64,
        results: Vec<MediaItem>,
    },
    /// The catalog call failed; existing results stay untouched.
    Failed { generation: u64 },
}

impl SearchEvent {
    fn generation(&self) -> u64 {
        match self {
            SearchEvent::Resolved { generation, .. } => *generation,
            SearchEvent::Failed { generation } => *generation,
        }
    }
}

/// Debounced autocomplete controller over a catalog service.
///
/// Owns the query text, the visible result list, and the panel/loading
/// flags. One logical call is in flight at a time: scheduling a new call
/// aborts the previously scheduled one, and results from an invalidated
/// generation are discarded when they arrive.
pub struct SearchController {
    catalog: Arc<dyn CatalogSource>,
    debounce: Duration,
    max_results: usize,

    /// Bumped on every input/clear/select; in-flight work older than this
    /// is stale.
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: UnboundedSender<SearchEvent>,
    rx: UnboundedReceiver<SearchEvent>,

    query: String,
    results: Vec<MediaItem>,
    open: bool,
    loading: bool,
}

impl SearchController {
    /// Creates a controller with the default debounce and result limit.
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            debounce: DEFAULT_DEBOUNCE,
            max_results: MAX_RESULTS,
            generation: 0,
            pending: None,
            tx,
            rx,
            query: String::new(),
            results: Vec::new(),
            open: false,
            loading: false,
        }
    }

    /// Sets the debounce interval.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the maximum number of rendered results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Feeds one keystroke's worth of input.
    ///
    /// Cancels any scheduled-but-unfired call and invalidates in-flight
    /// work. A trimmed query shorter than [`MIN_QUERY_LEN`] clears the
    /// results and closes the panel synchronously without touching the
    /// network; anything longer schedules a catalog call after the
    /// debounce interval.
    pub fn input(&mut self, text: &str) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
        self.query = text.to_string();

        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.open = false;
            self.loading = false;
            return;
        }

        let generation = self.generation;
        let query = trimmed.to_string();
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        let debounce = self.debounce;

        self.loading = true;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            match catalog.search_multi(&query).await {
                Ok(page) => {
                    let _ = tx.send(SearchEvent::Resolved {
                        generation,
                        results: page.results,
                    });
                }
                Err(e) => {
                    tracing::warn!(query = %query, error = %e, "search failed");
                    let _ = tx.send(SearchEvent::Failed { generation });
                }
            }
        }));
    }

    /// Drains all ready completion events.
    ///
    /// Returns `true` if any event changed visible state. Call this from
    /// the UI loop tick.
    pub fn try_pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Awaits the next completion event, then drains any others ready.
    ///
    /// Only sensible while a call is scheduled or in flight; with nothing
    /// pending this waits until the next one completes.
    pub async fn pump(&mut self) {
        if let Some(event) = self.rx.recv().await {
            self.apply(event);
        }
        self.try_pump();
    }

    /// Applies one completion event, discarding stale generations.
    fn apply(&mut self, event: SearchEvent) -> bool {
        if event.generation() != self.generation {
            // Stale: superseded before it resolved.
            return false;
        }

        match event {
            SearchEvent::Resolved { mut results, .. } => {
                results.truncate(self.max_results);
                self.results = results;
                self.open = true;
                self.loading = false;
            }
            SearchEvent::Failed { .. } => {
                self.loading = false;
            }
        }
        true
    }

    /// Closes the result panel without clearing the query.
    ///
    /// The outside-click/escape interaction. A still-pending call is not
    /// cancelled; the panel reopens when it resolves.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Clears the query and results and closes the panel.
    ///
    /// Invalidates any pending or in-flight call; a late response for the
    /// cleared query is never rendered.
    pub fn clear(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
        self.query.clear();
        self.results.clear();
        self.open = false;
        self.loading = false;
    }

    /// Selects the result at `index`.
    ///
    /// Clears the query, closes the panel, and returns the navigation
    /// target derived from the item's kind and id. Returns `None` for an
    /// out-of-range index.
    pub fn select(&mut self, index: usize) -> Option<NavigationTarget> {
        let target = self.results.get(index).map(MediaItem::target)?;

        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
        self.query.clear();
        self.open = false;
        self.loading = false;

        Some(target)
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results for the most recently resolved current query.
    pub fn results(&self) -> &[MediaItem] {
        &self.results
    }

    /// Whether the result panel is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a call is scheduled or in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        // Teardown must not leave a detached call running.
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
