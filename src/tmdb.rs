//! TMDB (The Movie Database) catalog implementation.
//!
//! [`Tmdb`] implements [`CatalogSource`] against TMDB API v3 and adds the
//! rest of the catalog surface: typed searches, discover, trending, detail
//! lookups, genre lists, and the image URL builder.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kinema::tmdb::Tmdb;
//! use kinema::types::{MovieCategory, ImageSize};
//!
//! # async fn example() -> kinema::Result<()> {
//! let tmdb = Tmdb::new("api-key").with_language("fr-FR");
//!
//! let page = tmdb.movies(MovieCategory::TopRated, 1).await?;
//! for movie in &page.results {
//!     let poster = tmdb.image_url(movie.poster_path.as_deref(), ImageSize::W500);
//!     println!("{} {}", movie.title, poster);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    catalog::CatalogSource,
    error::Result,
    net::HttpClient,
    types::{
        DiscoverParams, Genre, ImageSize, MediaItem, Movie, MovieCategory, MovieDetails, Page,
        Person, PersonDetails, Section, TimeWindow, TvCategory, TvDetails, TvShow,
    },
};

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Served for records without an image path.
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Animation genre id and origin filter for the anime listing.
const ANIME_GENRE: &str = "16";
const ANIME_ORIGIN: &str = "JP";

/// Genre list response wrapper
#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

/// TMDB catalog client.
///
/// Wraps the shared [`HttpClient`] with TMDB credentials and language
/// selection. TMDB allows roughly 40 requests per 10 seconds; the default
/// 250ms pacing stays inside that.
pub struct Tmdb {
    client: HttpClient,
    api_base: String,
    image_base: String,
    api_key: String,
    language: String,
}

impl Tmdb {
    /// Creates a new TMDB client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new("tmdb")
                .with_rate_limit(250)
                .with_max_retries(3),
            api_base: TMDB_API_BASE.to_string(),
            image_base: TMDB_IMAGE_BASE.to_string(),
            api_key: api_key.into(),
            language: "en-US".to_string(),
        }
    }

    /// Sets the response language (ISO 639-1 plus region, e.g. `fr-FR`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Overrides the API base URL. Intended for test servers.
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Builds a fully qualified image URL for a relative path.
    ///
    /// Returns the placeholder URL when the record has no image.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinema::tmdb::Tmdb;
    /// use kinema::types::ImageSize;
    ///
    /// let tmdb = Tmdb::new("key");
    /// assert_eq!(
    ///     tmdb.image_url(Some("/abc.jpg"), ImageSize::W200),
    ///     "https://image.tmdb.org/t/p/w200/abc.jpg"
    /// );
    /// assert_eq!(tmdb.image_url(None, ImageSize::W500), "/placeholder.svg");
    /// ```
    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path {
            Some(p) if !p.is_empty() => format!("{}/{}{}", self.image_base, size.as_str(), p),
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Searches movies only.
    pub async fn search_movies(&self, query: &str) -> Result<Page<Movie>> {
        let url = self.url("/search/movie", &[("query", query), ("page", "1")]);
        self.client.get_json(&url).await
    }

    /// Searches TV shows only.
    pub async fn search_tv(&self, query: &str) -> Result<Page<TvShow>> {
        let url = self.url("/search/tv", &[("query", query), ("page", "1")]);
        self.client.get_json(&url).await
    }

    /// Searches people only.
    pub async fn search_people(&self, query: &str) -> Result<Page<Person>> {
        let url = self.url("/search/person", &[("query", query), ("page", "1")]);
        self.client.get_json(&url).await
    }

    /// Fetches one page of a movie category listing.
    pub async fn movies(&self, category: MovieCategory, page: u32) -> Result<Page<Movie>> {
        let page = page.to_string();
        let url = self.url(
            &format!("/movie/{}", category.as_str()),
            &[("page", &page)],
        );
        self.client.get_json(&url).await
    }

    /// Fetches one page of a TV category listing.
    pub async fn tv_shows(&self, category: TvCategory, page: u32) -> Result<Page<TvShow>> {
        let page = page.to_string();
        let url = self.url(&format!("/tv/{}", category.as_str()), &[("page", &page)]);
        self.client.get_json(&url).await
    }

    /// Fetches one page of the anime listing.
    ///
    /// Anime is the TV discover listing filtered to Japanese animation,
    /// sorted by popularity.
    pub async fn anime(&self, page: u32) -> Result<Page<TvShow>> {
        let params = DiscoverParams {
            with_genres: Some(ANIME_GENRE.to_string()),
            with_origin_country: Some(ANIME_ORIGIN.to_string()),
            sort_by: Some("popularity.desc".to_string()),
            page: Some(page),
            year: None,
        };
        self.discover_tv(&params).await
    }

    /// Fetches one page of the popular-people listing.
    pub async fn people(&self, page: u32) -> Result<Page<Person>> {
        let page = page.to_string();
        let url = self.url("/person/popular", &[("page", &page)]);
        self.client.get_json(&url).await
    }

    /// Runs a movie discover query.
    pub async fn discover_movies(&self, params: &DiscoverParams) -> Result<Page<Movie>> {
        let url = self.discover_url("/discover/movie", params);
        self.client.get_json(&url).await
    }

    /// Runs a TV discover query.
    pub async fn discover_tv(&self, params: &DiscoverParams) -> Result<Page<TvShow>> {
        let url = self.discover_url("/discover/tv", params);
        self.client.get_json(&url).await
    }

    /// Fetches the trending listing across all record kinds.
    pub async fn trending(&self, window: TimeWindow) -> Result<Page<MediaItem>> {
        let url = self.url(&format!("/trending/all/{}", window.as_str()), &[]);
        let raw: Page<serde_json::Value> = self.client.get_json(&url).await?;
        Ok(ingest_mixed(raw))
    }

    /// Fetches detailed information about a movie.
    pub async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        let url = self.url(&format!("/movie/{}", id), &[]);
        self.client.get_json(&url).await
    }

    /// Fetches detailed information about a TV show.
    pub async fn tv_details(&self, id: u64) -> Result<TvDetails> {
        let url = self.url(&format!("/tv/{}", id), &[]);
        self.client.get_json(&url).await
    }

    /// Fetches detailed information about a person.
    pub async fn person_details(&self, id: u64) -> Result<PersonDetails> {
        let url = self.url(&format!("/person/{}", id), &[]);
        self.client.get_json(&url).await
    }

    /// Fetches the movie genre list.
    pub async fn movie_genres(&self) -> Result<Vec<Genre>> {
        let url = self.url("/genre/movie/list", &[]);
        let response: GenreListResponse = self.client.get_json(&url).await?;
        Ok(response.genres)
    }

    /// Fetches the TV genre list.
    pub async fn tv_genres(&self) -> Result<Vec<Genre>> {
        let url = self.url("/genre/tv/list", &[]);
        let response: GenreListResponse = self.client.get_json(&url).await?;
        Ok(response.genres)
    }

    /// Fetches the first page of every home rail concurrently.
    pub async fn home(&self, window: TimeWindow) -> Result<HomeRails> {
        let (trending, popular_movies, popular_tv, anime) = futures::try_join!(
            self.trending(window),
            self.movies(MovieCategory::Popular, 1),
            self.tv_shows(TvCategory::Popular, 1),
            self.anime(1),
        )?;

        Ok(HomeRails {
            trending,
            popular_movies,
            popular_tv,
            anime,
        })
    }

    /// Formats an endpoint URL with credentials, language, and extras.
    fn url(&self, path: &str, extra: &[(&str, &str)]) -> String {
        let mut parts = vec![
            format!("api_key={}", urlencoding::encode(&self.api_key)),
            format!("language={}", urlencoding::encode(&self.language)),
        ];

        for (key, value) in extra {
            parts.push(format!("{}={}", key, urlencoding::encode(value)));
        }

        format!("{}{}?{}", self.api_base, path, parts.join("&"))
    }

    /// Formats a discover endpoint URL from builder parameters.
    fn discover_url(&self, path: &str, params: &DiscoverParams) -> String {
        let page = params.page.map(|p| p.to_string());
        let year = params.year.map(|y| y.to_string());

        let mut extra: Vec<(&str, &str)> = Vec::new();
        if let Some(genres) = params.with_genres.as_deref() {
            extra.push(("with_genres", genres));
        }
        if let Some(origin) = params.with_origin_country.as_deref() {
            extra.push(("with_origin_country", origin));
        }
        if let Some(sort) = params.sort_by.as_deref() {
            extra.push(("sort_by", sort));
        }
        if let Some(year) = year.as_deref() {
            extra.push(("year", year));
        }
        if let Some(page) = page.as_deref() {
            extra.push(("page", page));
        }

        self.url(path, &extra)
    }
}

#[async_trait]
impl CatalogSource for Tmdb {
    fn id(&self) -> &'static str {
        "tmdb"
    }

    fn name(&self) -> &'static str {
        "The Movie Database"
    }

    async fn search_multi(&self, query: &str) -> Result<Page<MediaItem>> {
        let url = self.url("/search/multi", &[("query", query), ("page", "1")]);
        let raw: Page<serde_json::Value> = self.client.get_json(&url).await?;
        Ok(ingest_mixed(raw))
    }

    async fn section(&self, section: Section, page: u32) -> Result<Page<MediaItem>> {
        match section {
            Section::Movies(category) => {
                Ok(self.movies(category, page).await?.map(MediaItem::Movie))
            }
            Section::Tv(category) => Ok(self.tv_shows(category, page).await?.map(MediaItem::Tv)),
            Section::Anime => Ok(self.anime(page).await?.map(MediaItem::Tv)),
            Section::People => Ok(self.people(page).await?.map(MediaItem::Person)),
        }
    }
}

/// First page of every rail on the home screen.
#[derive(Debug, Clone)]
pub struct HomeRails {
    pub trending: Page<MediaItem>,
    pub popular_movies: Page<Movie>,
    pub popular_tv: Page<TvShow>,
    pub anime: Page<TvShow>,
}

/// Ingests a mixed listing, tagging each record by its `media_type`.
///
/// Records with an unknown or missing discriminator are dropped rather
/// than failing the page; upstream order is preserved for the rest.
fn ingest_mixed(raw: Page<serde_json::Value>) -> Page<MediaItem> {
    let page = raw.page;
    let total_pages = raw.total_pages;
    let total_results = raw.total_results;

    let results = raw
        .results
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<MediaItem>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unrecognized catalog record");
                None
            }
        })
        .collect();

    Page {
        page,
        results,
        total_pages,
        total_results,
    }
}
