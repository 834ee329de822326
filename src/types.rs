//! Core data types for media items, pages, and catalog sections.
//!
//! This module defines the fundamental data structures used throughout kinema:
//!
//! - [`Movie`], [`TvShow`], [`Person`] - Typed catalog records
//! - [`MediaItem`] - Tagged union over the three record kinds
//! - [`Page`] - One page of a paginated listing
//! - [`Section`] - A browsable catalog section with its category filter
//! - [`ImageSize`] - The fixed set of image size tokens
//! - [`DiscoverParams`] - Parameters for the discover endpoints
//!
//! The `media_type` discriminator is assigned once, at the deserialization
//! boundary, by modeling [`MediaItem`] as an internally tagged enum. Code
//! downstream matches on the variant instead of probing record shapes.
//!
//! # Examples
//!
//! ```rust
//! use kinema::types::{MediaItem, Movie, NavigationTarget};
//!
//! let item = MediaItem::Movie(Movie {
//!     id: 603,
//!     title: "The Matrix".to_string(),
//!     ..Default::default()
//! });
//!
//! assert_eq!(item.title(), "The Matrix");
//! assert_eq!(item.target(), NavigationTarget::Movie(603));
//! ```

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A movie record as returned by the catalog service.
///
/// Fields the service omits or nulls out deserialize to their defaults, so
/// a sparsely populated record never fails ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog identifier
    pub id: u64,

    /// Display title
    pub title: String,

    /// Title in the original language
    #[serde(default)]
    pub original_title: String,

    /// Plot summary
    #[serde(default)]
    pub overview: String,

    /// Relative poster image path
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Relative backdrop image path
    #[serde(default)]
    pub backdrop_path: Option<String>,

    /// Release date, `YYYY-MM-DD`
    #[serde(default)]
    pub release_date: Option<String>,

    /// Average vote, 0-10 scale
    #[serde(default)]
    pub vote_average: f64,

    /// Number of votes
    #[serde(default)]
    pub vote_count: u64,

    /// Upstream popularity score
    #[serde(default)]
    pub popularity: f64,

    /// Genre identifiers
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

/// A TV show record as returned by the catalog service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TvShow {
    /// Catalog identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Name in the original language
    #[serde(default)]
    pub original_name: String,

    /// Plot summary
    #[serde(default)]
    pub overview: String,

    /// Relative poster image path
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Relative backdrop image path
    #[serde(default)]
    pub backdrop_path: Option<String>,

    /// First air date, `YYYY-MM-DD`
    #[serde(default)]
    pub first_air_date: Option<String>,

    /// Average vote, 0-10 scale
    #[serde(default)]
    pub vote_average: f64,

    /// Number of votes
    #[serde(default)]
    pub vote_count: u64,

    /// Upstream popularity score
    #[serde(default)]
    pub popularity: f64,

    /// Genre identifiers
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

/// A person record as returned by the catalog service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    /// Catalog identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Relative profile image path
    #[serde(default)]
    pub profile_path: Option<String>,

    /// Department the person is known for (acting, directing, ...)
    #[serde(default)]
    pub known_for_department: String,

    /// Upstream popularity score
    #[serde(default)]
    pub popularity: f64,
}

/// Tagged union over the three catalog record kinds.
///
/// Mixed listings (multi search, trending) carry a `media_type` field on
/// every record; serde uses it as the enum tag, so the discriminator is
/// fixed when the response is ingested and never inferred afterwards.
///
/// # Examples
///
/// ```rust
/// use kinema::types::MediaItem;
///
/// let json = r#"{"media_type":"tv","id":456,"name":"Severance"}"#;
/// let item: MediaItem = serde_json::from_str(json).unwrap();
///
/// assert!(matches!(item, MediaItem::Tv(_)));
/// assert_eq!(item.id(), 456);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "snake_case")]
pub enum MediaItem {
    Movie(Movie),
    Tv(TvShow),
    Person(Person),
}

impl MediaItem {
    /// Returns the catalog identifier of the underlying record.
    pub fn id(&self) -> u64 {
        match self {
            MediaItem::Movie(m) => m.id,
            MediaItem::Tv(t) => t.id,
            MediaItem::Person(p) => p.id,
        }
    }

    /// Returns the display title of the underlying record.
    pub fn title(&self) -> &str {
        match self {
            MediaItem::Movie(m) => &m.title,
            MediaItem::Tv(t) => &t.name,
            MediaItem::Person(p) => &p.name,
        }
    }

    /// Returns the relative image path, if the record carries one.
    ///
    /// Movies and shows use their poster path, people their profile path.
    pub fn image_path(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.poster_path.as_deref(),
            MediaItem::Tv(t) => t.poster_path.as_deref(),
            MediaItem::Person(p) => p.profile_path.as_deref(),
        }
    }

    /// Returns a short secondary line for result rows.
    ///
    /// Release/air year for movies and shows, known-for department for
    /// people. `None` when the record has nothing to show.
    pub fn subtitle(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => year_of(m.release_date.as_deref()),
            MediaItem::Tv(t) => year_of(t.first_air_date.as_deref()),
            MediaItem::Person(p) => {
                if p.known_for_department.is_empty() {
                    None
                } else {
                    Some(&p.known_for_department)
                }
            }
        }
    }

    /// Returns the record kind discriminator.
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Movie(_) => MediaKind::Movie,
            MediaItem::Tv(_) => MediaKind::Tv,
            MediaItem::Person(_) => MediaKind::Person,
        }
    }

    /// Returns the navigation target for this item.
    pub fn target(&self) -> NavigationTarget {
        match self {
            MediaItem::Movie(m) => NavigationTarget::Movie(m.id),
            MediaItem::Tv(t) => NavigationTarget::Tv(t.id),
            MediaItem::Person(p) => NavigationTarget::Person(p.id),
        }
    }
}

fn year_of(date: Option<&str>) -> Option<&str> {
    date.and_then(|d| d.split('-').next())
        .filter(|y| !y.is_empty())
}

/// Record kind discriminator, used for icon and route selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Tv,
    Person,
}

impl MediaKind {
    /// Returns the lowercase kind label used in routes and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Person => "person",
        }
    }
}

/// Navigation target derived from a selected search result.
///
/// # Examples
///
/// ```rust
/// use kinema::types::NavigationTarget;
///
/// assert_eq!(NavigationTarget::Tv(456).path(), "/tv/456");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationTarget {
    Movie(u64),
    Tv(u64),
    Person(u64),
}

impl NavigationTarget {
    /// Renders the target as a route path.
    pub fn path(&self) -> String {
        match self {
            NavigationTarget::Movie(id) => format!("/movie/{}", id),
            NavigationTarget::Tv(id) => format!("/tv/{}", id),
            NavigationTarget::Person(id) => format!("/person/{}", id),
        }
    }
}

/// One page of a paginated listing.
///
/// The service reports the page number it served and the total number of
/// pages; both default to 1 when missing so a degenerate response still
/// forms a terminated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Page number served, 1-based
    #[serde(default = "first_page")]
    pub page: u32,

    /// Records on this page, upstream order preserved
    #[serde(default)]
    pub results: Vec<T>,

    /// Total number of pages available
    #[serde(default = "first_page")]
    pub total_pages: u32,

    /// Total number of records available
    #[serde(default)]
    pub total_results: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    /// Returns `true` when pages beyond this one exist.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Converts the item type while keeping the page bookkeeping.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            results: self.results.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Page {
            page: 1,
            results: Vec::new(),
            total_pages: 1,
            total_results: 0,
        }
    }
}

/// A browsable catalog section.
///
/// Each variant maps to one paginated listing upstream. The pager treats
/// the span between two section selections as one category session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Movie listing filtered by category
    Movies(MovieCategory),
    /// TV listing filtered by category
    Tv(TvCategory),
    /// Japanese animation, a filtered TV discover listing
    Anime,
    /// Popular people
    People,
}

impl Default for Section {
    fn default() -> Self {
        Section::Movies(MovieCategory::Popular)
    }
}

/// Category filter for movie listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieCategory {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl MovieCategory {
    /// Returns the endpoint path segment for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "popular",
            MovieCategory::TopRated => "top_rated",
            MovieCategory::NowPlaying => "now_playing",
            MovieCategory::Upcoming => "upcoming",
        }
    }
}

/// Category filter for TV listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvCategory {
    Popular,
    TopRated,
    AiringToday,
    OnTheAir,
}

impl TvCategory {
    /// Returns the endpoint path segment for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TvCategory::Popular => "popular",
            TvCategory::TopRated => "top_rated",
            TvCategory::AiringToday => "airing_today",
            TvCategory::OnTheAir => "on_the_air",
        }
    }
}

/// Image size tokens accepted by the image URL builder.
///
/// The set is fixed by the image CDN; [`ImageSize::W500`] matches the
/// default used for poster grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    W200,
    W300,
    #[default]
    W500,
    W780,
    Original,
}

impl ImageSize {
    /// Returns the size token as it appears in image URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W200 => "w200",
            ImageSize::W300 => "w300",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

/// Time window for trending listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    /// Returns the endpoint path segment for this window.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

/// Parameters for the discover endpoints.
///
/// Uses the builder pattern (via `derive_builder`) for fluent
/// construction.
///
/// # Examples
///
/// ```rust
/// use kinema::types::DiscoverParamsBuilder;
///
/// let params = DiscoverParamsBuilder::default()
///     .with_genres("16")
///     .with_origin_country("JP")
///     .sort_by("popularity.desc")
///     .page(2u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.with_genres.as_deref(), Some("16"));
/// assert_eq!(params.page, Some(2));
/// ```
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct DiscoverParams {
    /// Comma-separated genre identifiers
    pub with_genres: Option<String>,

    /// ISO 3166-1 origin country filter
    pub with_origin_country: Option<String>,

    /// Sort key, e.g. `popularity.desc`
    pub sort_by: Option<String>,

    /// Page number, 1-based
    pub page: Option<u32>,

    /// Release/air year filter
    pub year: Option<u32>,
}

/// A genre entry from the genre list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Detailed movie record from the single-movie endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Detailed TV show record from the single-show endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Detailed person record from the single-person endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub popularity: f64,
}
