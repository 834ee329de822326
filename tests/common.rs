//! Common test utilities and fixtures
//!
//! Shared functionality used across all test modules.
// Common test utilities - all must be public

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use kinema::catalog::CatalogSource;
use kinema::types::{MediaItem, Movie, Page, Person, Section, TvShow};
use kinema::{Error, Result};

/// One scripted response step: an optional resolution delay plus the
/// outcome to produce.
#[allow(dead_code)]
#[derive(Clone)]
pub struct Step {
    pub delay: Option<Duration>,
    pub outcome: Outcome,
}

#[allow(dead_code)]
#[derive(Clone)]
pub enum Outcome {
    Page(Page<MediaItem>),
    Fail,
}

#[derive(Default)]
struct Script {
    steps: Vec<Step>,
    cursor: usize,
}

impl Script {
    /// Takes the next step; the last step repeats once exhausted.
    fn next(&mut self) -> Option<Step> {
        let step = self
            .steps
            .get(self.cursor)
            .or_else(|| self.steps.last())
            .cloned();
        self.cursor += 1;
        step
    }
}

/// In-memory catalog fake with per-query and per-page scripted responses.
///
/// Search responses are keyed by the trimmed query text, section
/// responses by `(section, page)`. Multiple steps for the same key play
/// back in order, so a test can script fail-then-succeed sequences. Every
/// call is counted and every search query logged.
#[allow(dead_code)]
pub struct ScriptedCatalog {
    searches: Mutex<HashMap<String, Script>>,
    sections: Mutex<HashMap<(Section, u32), Script>>,
    pub search_calls: AtomicUsize,
    pub section_calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedCatalog {
    pub fn new() -> Self {
        Self {
            searches: Mutex::new(HashMap::new()),
            sections: Mutex::new(HashMap::new()),
            search_calls: AtomicUsize::new(0),
            section_calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn on_search(&self, query: &str, page: Page<MediaItem>) {
        self.push_search(query, None, Outcome::Page(page));
    }

    pub fn on_search_delayed(&self, query: &str, delay: Duration, page: Page<MediaItem>) {
        self.push_search(query, Some(delay), Outcome::Page(page));
    }

    pub fn fail_search(&self, query: &str) {
        self.push_search(query, None, Outcome::Fail);
    }

    pub fn on_section(&self, section: Section, page_no: u32, page: Page<MediaItem>) {
        self.push_section(section, page_no, None, Outcome::Page(page));
    }

    pub fn on_section_delayed(
        &self,
        section: Section,
        page_no: u32,
        delay: Duration,
        page: Page<MediaItem>,
    ) {
        self.push_section(section, page_no, Some(delay), Outcome::Page(page));
    }

    pub fn fail_section(&self, section: Section, page_no: u32) {
        self.push_section(section, page_no, None, Outcome::Fail);
    }

    /// Number of search calls issued so far.
    pub fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of section calls issued so far.
    pub fn section_call_count(&self) -> usize {
        self.section_calls.load(Ordering::SeqCst)
    }

    /// Every query string the controller actually sent, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn push_search(&self, query: &str, delay: Option<Duration>, outcome: Outcome) {
        self.searches
            .lock()
            .unwrap()
            .entry(query.to_string())
            .or_default()
            .steps
            .push(Step { delay, outcome });
    }

    fn push_section(
        &self,
        section: Section,
        page_no: u32,
        delay: Option<Duration>,
        outcome: Outcome,
    ) {
        self.sections
            .lock()
            .unwrap()
            .entry((section, page_no))
            .or_default()
            .steps
            .push(Step { delay, outcome });
    }

    async fn play(step: Option<Step>, what: String) -> Result<Page<MediaItem>> {
        let step = step.ok_or_else(|| Error::Other(format!("unscripted call: {what}")))?;
        if let Some(delay) = step.delay {
            tokio::time::sleep(delay).await;
        }
        match step.outcome {
            Outcome::Page(page) => Ok(page),
            Outcome::Fail => Err(Error::Other(format!("scripted failure: {what}"))),
        }
    }
}

#[async_trait]
impl CatalogSource for ScriptedCatalog {
    fn id(&self) -> &'static str {
        "scripted"
    }

    fn name(&self) -> &'static str {
        "Scripted Catalog"
    }

    async fn search_multi(&self, query: &str) -> Result<Page<MediaItem>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        let step = self.searches.lock().unwrap().get_mut(query).and_then(Script::next);
        Self::play(step, format!("search {query:?}")).await
    }

    async fn section(&self, section: Section, page: u32) -> Result<Page<MediaItem>> {
        self.section_calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .sections
            .lock()
            .unwrap()
            .get_mut(&(section, page))
            .and_then(Script::next);
        Self::play(step, format!("{section:?} page {page}")).await
    }
}

/// Builds a movie item with just an id and title.
#[allow(dead_code)]
pub fn movie(id: u64, title: &str) -> MediaItem {
    MediaItem::Movie(Movie {
        id,
        title: title.to_string(),
        ..Default::default()
    })
}

/// Builds a TV show item with just an id and name.
#[allow(dead_code)]
pub fn tv(id: u64, name: &str) -> MediaItem {
    MediaItem::Tv(TvShow {
        id,
        name: name.to_string(),
        ..Default::default()
    })
}

/// Builds a person item with just an id and name.
#[allow(dead_code)]
pub fn person(id: u64, name: &str) -> MediaItem {
    MediaItem::Person(Person {
        id,
        name: name.to_string(),
        ..Default::default()
    })
}

/// Wraps items into a page with explicit page bookkeeping.
#[allow(dead_code)]
pub fn page_of(items: Vec<MediaItem>, page: u32, total_pages: u32) -> Page<MediaItem> {
    let total_results = items.len() as u64 * u64::from(total_pages);
    Page {
        page,
        results: items,
        total_pages,
        total_results,
    }
}

/// A page of `count` sequentially numbered movie items.
#[allow(dead_code)]
pub fn movie_page(page: u32, count: usize, total_pages: u32) -> Page<MediaItem> {
    let items = (0..count)
        .map(|i| {
            let id = u64::from(page) * 1000 + i as u64;
            movie(id, &format!("Movie {id}"))
        })
        .collect();
    page_of(items, page, total_pages)
}
