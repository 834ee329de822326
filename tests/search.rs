//! Search controller behavior tests
//!
//! Exercises debouncing, stale-result suppression, failure handling, and
//! the panel lifecycle against a scripted catalog fake. All tests run on
//! a paused clock, so timing is deterministic.

mod common;

use std::sync::Arc;
use std::time::Duration;

use kinema::search::{MAX_RESULTS, SearchController};
use kinema::types::NavigationTarget;

use common::{ScriptedCatalog, movie, page_of, person, tv};

#[tokio::test(start_paused = true)]
async fn short_queries_never_reach_the_network() {
    let catalog = Arc::new(ScriptedCatalog::new());
    let mut search = SearchController::new(Arc::clone(&catalog) as _);

    search.input("a");
    tokio::time::sleep(Duration::from_millis(500)).await;
    search.try_pump();

    assert_eq!(catalog.search_call_count(), 0);
    assert!(search.results().is_empty());
    assert!(!search.is_open());
    assert!(!search.is_loading());
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_coalesce_into_one_call() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search("one", page_of(vec![movie(1, "One Piece Film")], 1, 1));

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("o");
    search.input("on");
    search.input("one");
    assert!(search.is_loading());

    search.pump().await;

    assert_eq!(catalog.search_call_count(), 1);
    assert_eq!(catalog.queries(), vec!["one"]);
    assert_eq!(search.results().len(), 1);
    assert_eq!(search.results()[0].title(), "One Piece Film");
    assert!(search.is_open());
    assert!(!search.is_loading());
}

#[tokio::test(start_paused = true)]
async fn call_fires_only_after_the_quiet_period() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search("one", page_of(vec![movie(1, "One")], 1, 1));

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("one");
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(299)).await;
    tokio::task::yield_now().await;
    assert_eq!(catalog.search_call_count(), 0);
    assert!(search.is_loading());

    tokio::time::advance(Duration::from_millis(1)).await;
    search.pump().await;
    assert_eq!(catalog.search_call_count(), 1);
    assert_eq!(search.results().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn queued_stale_response_is_discarded() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search("one", page_of(vec![movie(1, "One")], 1, 1));

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("one");
    // Let the call resolve and queue its event without applying it.
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(catalog.search_call_count(), 1);

    // Shrinking below the minimum invalidates the queued response.
    search.input("o");
    let changed = search.try_pump();

    assert!(!changed);
    assert!(search.results().is_empty());
    assert!(!search.is_open());
    assert!(!search.is_loading());
}

#[tokio::test(start_paused = true)]
async fn superseded_in_flight_call_never_renders() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search_delayed(
        "one",
        Duration::from_millis(500),
        page_of(vec![movie(1, "One")], 1, 1),
    );
    catalog.on_search("two", page_of(vec![movie(2, "Two")], 1, 1));

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("one");
    // Debounce elapses; the slow call for "one" is now in flight.
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(catalog.search_call_count(), 1);

    search.input("two");
    search.pump().await;

    assert_eq!(catalog.queries(), vec!["one", "two"]);
    assert_eq!(search.results().len(), 1);
    assert_eq!(search.results()[0].title(), "Two");

    // The aborted call never delivers anything later either.
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(!search.try_pump());
    assert_eq!(search.results()[0].title(), "Two");
}

#[tokio::test(start_paused = true)]
async fn failure_clears_loading_and_keeps_results() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search("one", page_of(vec![movie(1, "One")], 1, 1));
    catalog.fail_search("ones");

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("one");
    search.pump().await;
    assert_eq!(search.results().len(), 1);

    search.input("ones");
    assert!(search.is_loading());
    search.pump().await;

    assert!(!search.is_loading());
    assert!(search.is_open());
    assert_eq!(search.results().len(), 1);
    assert_eq!(search.results()[0].title(), "One");
}

#[tokio::test(start_paused = true)]
async fn selecting_a_result_yields_its_navigation_target() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search(
        "sev",
        page_of(
            vec![
                movie(7, "Se7en"),
                tv(456, "Severance"),
                person(9, "Seva Novgorodtsev"),
            ],
            1,
            1,
        ),
    );

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("sev");
    search.pump().await;

    let target = search.select(1);
    assert_eq!(target, Some(NavigationTarget::Tv(456)));
    assert_eq!(target.unwrap().path(), "/tv/456");
    assert_eq!(search.query(), "");
    assert!(!search.is_open());

    assert_eq!(search.select(99), None);
}

#[tokio::test(start_paused = true)]
async fn dismiss_closes_the_panel_but_keeps_the_query() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search("one", page_of(vec![movie(1, "One")], 1, 1));

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("one");
    search.pump().await;
    assert!(search.is_open());

    search.dismiss();
    assert!(!search.is_open());
    assert_eq!(search.query(), "one");
    assert_eq!(search.results().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn clear_during_an_in_flight_call_discards_everything() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search_delayed(
        "one",
        Duration::from_millis(500),
        page_of(vec![movie(1, "One")], 1, 1),
    );

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("one");
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(search.is_loading());

    search.clear();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(!search.try_pump());
    assert_eq!(search.query(), "");
    assert!(search.results().is_empty());
    assert!(!search.is_open());
    assert!(!search.is_loading());
}

#[tokio::test(start_paused = true)]
async fn results_are_truncated_to_the_dropdown_limit() {
    let catalog = Arc::new(ScriptedCatalog::new());
    let many: Vec<_> = (0..20).map(|i| movie(i, &format!("Movie {i}"))).collect();
    catalog.on_search("one", page_of(many, 1, 3));

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("one");
    search.pump().await;

    assert_eq!(search.results().len(), MAX_RESULTS);
    assert_eq!(search.results()[0].title(), "Movie 0");
}

#[tokio::test(start_paused = true)]
async fn whitespace_padding_does_not_change_the_query_sent() {
    let catalog = Arc::new(ScriptedCatalog::new());
    catalog.on_search("one", page_of(vec![movie(1, "One")], 1, 1));

    let mut search = SearchController::new(Arc::clone(&catalog) as _);
    search.input("  one  ");
    search.pump().await;

    assert_eq!(catalog.queries(), vec!["one"]);
    assert_eq!(search.query(), "  one  ");
    assert_eq!(search.results().len(), 1);
}
