//! The catalog aggregate: every known work, show and watchlist.

use crate::core::generator::{self, WatchlistCriteria};
use crate::core::registry::IdentityRegistry;
use crate::error::require;
use crate::models::media::{Language, WatchItem, Watchable};
use crate::models::{Episode, Movie, TvShow, Watchlist};
use crate::utils::fs::{FileProbe, ProbeHandle};
use crate::{Error, Result};
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::rc::Rc;

/// Minimal `localpart@domain` shape.
const EMAIL_PATTERN: &str = r"^(.+)@(.+)$";

/// Name given to a fresh catalog.
pub const DEFAULT_NAME: &str = "Default";

thread_local! {
    static GLOBAL: RefCell<Catalog> = RefCell::new(Catalog::new());
}

/// Run `f` against the process-wide catalog, created empty on first use.
///
/// Calls must not nest. Tests should build their own [`Catalog`] instead of
/// sharing this one.
pub fn with_global<R>(f: impl FnOnce(&mut Catalog) -> R) -> R {
    GLOBAL.with(|catalog| f(&mut catalog.borrow_mut()))
}

/// Set element comparing by identity of the shared value.
#[derive(Debug)]
struct Shared<T>(Rc<T>);

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Shared<T> {}

impl<T> Hash for Shared<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

/// Movies, TV shows, episodes and watchlists plus the owner's details.
///
/// Storage is unordered; nothing here promises an iteration order.
#[derive(Debug)]
pub struct Catalog {
    name: String,
    email: Option<String>,
    movies: HashSet<Shared<Movie>>,
    tv_shows: HashSet<Shared<TvShow>>,
    episodes: HashSet<Shared<Episode>>,
    watchlists: HashSet<Shared<Watchlist>>,
    movie_registry: IdentityRegistry<Movie>,
    show_registry: IdentityRegistry<TvShow>,
    probe: ProbeHandle,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog backed by the real file system.
    pub fn new() -> Self {
        Self::with_probe(ProbeHandle::default())
    }

    /// Create an empty catalog whose works check files through `probe`.
    pub fn with_probe(probe: ProbeHandle) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: None,
            movies: HashSet::new(),
            tv_shows: HashSet::new(),
            episodes: HashSet::new(),
            watchlists: HashSet::new(),
            movie_registry: IdentityRegistry::new("movie"),
            show_registry: IdentityRegistry::new("TV show"),
            probe,
        }
    }

    pub fn probe(&self) -> &dyn FileProbe {
        &*self.probe
    }

    // ========== FACTORIES ==========

    /// The movie titled `title`, created on first request.
    ///
    /// Later calls with the same title return the first instance unchanged,
    /// whatever path, language or studio they pass.
    pub fn movie(
        &mut self,
        path: &Path,
        title: &str,
        language: Language,
        studio: &str,
    ) -> Result<Rc<Movie>> {
        let probe = self.probe.clone();
        self.movie_registry
            .get_or_create(title, || Movie::new(path, title, language, studio, probe))
    }

    /// The TV show titled `title`, created on first request.
    ///
    /// Same first-registration-wins rule as [`movie`](Self::movie).
    pub fn tv_show(&mut self, title: &str, language: Language, studio: &str) -> Result<Rc<TvShow>> {
        let probe = self.probe.clone();
        self.show_registry
            .get_or_create(title, || Ok(TvShow::new(title, language, studio, probe)))
    }

    /// Previously created movie by title, whether or not it was added.
    pub fn find_movie(&self, title: &str) -> Option<Rc<Movie>> {
        self.movie_registry.get(title)
    }

    /// Previously created TV show by title, whether or not it was added.
    pub fn find_tv_show(&self, title: &str) -> Option<Rc<TvShow>> {
        self.show_registry.get(title)
    }

    // ========== INGESTION ==========

    /// Add a movie. Returns `false` if it was already present.
    pub fn add_movie(&mut self, movie: &Rc<Movie>) -> bool {
        self.movies.insert(Shared(Rc::clone(movie)))
    }

    /// Add a TV show together with each of its episodes.
    pub fn add_tv_show(&mut self, show: &Rc<TvShow>) -> bool {
        let added = self.tv_shows.insert(Shared(Rc::clone(show)));
        let episodes = show.episodes();
        for episode in &episodes {
            self.episodes.insert(Shared(Rc::clone(episode)));
        }
        tracing::info!("Added TV show {} ({} episodes)", show.title(), episodes.len());
        added
    }

    /// Add a watchlist together with each of its movies and episodes.
    pub fn add_watchlist(&mut self, watchlist: &Rc<Watchlist>) -> bool {
        let added = self.watchlists.insert(Shared(Rc::clone(watchlist)));
        let items = watchlist.items();
        for item in items.iter() {
            match item {
                WatchItem::Movie(movie) => {
                    self.movies.insert(Shared(Rc::clone(movie)));
                }
                WatchItem::Episode(episode) => {
                    self.episodes.insert(Shared(Rc::clone(episode)));
                }
            }
        }
        tracing::info!("Added watchlist {} ({} items)", watchlist.name(), items.len());
        added
    }

    // ========== QUERIES ==========

    pub fn movies(&self) -> impl Iterator<Item = &Rc<Movie>> {
        self.movies.iter().map(|s| &s.0)
    }

    pub fn tv_shows(&self) -> impl Iterator<Item = &Rc<TvShow>> {
        self.tv_shows.iter().map(|s| &s.0)
    }

    pub fn episodes(&self) -> impl Iterator<Item = &Rc<Episode>> {
        self.episodes.iter().map(|s| &s.0)
    }

    pub fn watchlists(&self) -> impl Iterator<Item = &Rc<Watchlist>> {
        self.watchlists.iter().map(|s| &s.0)
    }

    pub fn contains_movie(&self, movie: &Rc<Movie>) -> bool {
        self.movies.contains(&Shared(Rc::clone(movie)))
    }

    pub fn contains_episode(&self, episode: &Rc<Episode>) -> bool {
        self.episodes.contains(&Shared(Rc::clone(episode)))
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn tv_show_count(&self) -> usize {
        self.tv_shows.len()
    }

    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    pub fn watchlist_count(&self) -> usize {
        self.watchlists.len()
    }

    // ========== GENERATION ==========

    /// Build a new watchlist from the catalog. See [`generator::generate`].
    pub fn generate_watchlist<C>(&self, name: &str, criteria: &C) -> Result<Watchlist>
    where
        C: WatchlistCriteria + ?Sized,
    {
        generator::generate(self, name, criteria)
    }

    // ========== OWNER ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        require(!name.trim().is_empty(), || "catalog name must not be blank".into())?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Set the owner's email. An address that is not `localpart@domain`
    /// is rejected and the current email is kept.
    pub fn set_email(&mut self, email: &str) -> Result<()> {
        if !is_valid_email(email) {
            return Err(Error::InvalidEmail(email.to_string()));
        }
        self.email = Some(email.to_string());
        Ok(())
    }

    pub fn clear_email(&mut self) {
        self.email = None;
    }
}

/// Check an address against the minimal `localpart@domain` shape.
pub fn is_valid_email(address: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(address))
        .unwrap_or(false)
}
