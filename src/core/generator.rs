//! Watchlist generation: select works from a catalog, order them, and
//! materialize the result as a new watchlist.

use crate::core::catalog::Catalog;
use crate::models::media::{Language, WatchItem, Watchable};
use crate::models::Watchlist;
use crate::Result;
use std::cmp::Ordering;
use std::fmt;

/// Selection and ordering used to build a watchlist.
pub trait WatchlistCriteria {
    /// Whether a work belongs in the list. Applied to whole shows as well as
    /// to their episodes and to movies.
    fn select(&self, item: &dyn Watchable) -> bool;

    /// Total order over the selected items.
    fn compare(&self, a: &WatchItem, b: &WatchItem) -> Ordering;
}

type Filter = Box<dyn Fn(&dyn Watchable) -> bool>;
type Order = Box<dyn Fn(&WatchItem, &WatchItem) -> Ordering>;

/// Criteria assembled from closures.
pub struct GenerationInfo {
    filters: Vec<Filter>,
    order: Order,
}

impl GenerationInfo {
    pub fn new<F, O>(filter: F, order: O) -> Self
    where
        F: Fn(&dyn Watchable) -> bool + 'static,
        O: Fn(&WatchItem, &WatchItem) -> Ordering + 'static,
    {
        Self {
            filters: vec![Box::new(filter)],
            order: Box::new(order),
        }
    }

    /// Additionally require `filter` to hold.
    pub fn and<F>(mut self, filter: F) -> Self
    where
        F: Fn(&dyn Watchable) -> bool + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }
}

impl Default for GenerationInfo {
    /// Everything, by title.
    fn default() -> Self {
        Self::new(any(), title_ascending())
    }
}

impl fmt::Debug for GenerationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationInfo")
            .field("filters", &self.filters.len())
            .finish_non_exhaustive()
    }
}

impl WatchlistCriteria for GenerationInfo {
    fn select(&self, item: &dyn Watchable) -> bool {
        self.filters.iter().all(|f| f(item))
    }

    fn compare(&self, a: &WatchItem, b: &WatchItem) -> Ordering {
        (self.order)(a, b)
    }
}

// ========== STOCK SELECTORS ==========

pub fn any() -> impl Fn(&dyn Watchable) -> bool {
    |_| true
}

pub fn by_language(language: Language) -> impl Fn(&dyn Watchable) -> bool {
    move |item| *item.language() == language
}

/// Case-insensitive studio match.
pub fn by_studio(studio: &str) -> impl Fn(&dyn Watchable) -> bool {
    let studio = studio.to_lowercase();
    move |item| item.studio().to_lowercase() == studio
}

pub fn valid_only() -> impl Fn(&dyn Watchable) -> bool {
    |item| item.is_valid()
}

// ========== STOCK ORDERINGS ==========

pub fn title_ascending() -> impl Fn(&WatchItem, &WatchItem) -> Ordering {
    |a, b| a.title().cmp(b.title())
}

pub fn studio_then_title() -> impl Fn(&WatchItem, &WatchItem) -> Ordering {
    |a, b| {
        a.studio()
            .cmp(b.studio())
            .then_with(|| a.title().cmp(b.title()))
    }
}

/// Generate a watchlist named `name` from everything in `catalog` that
/// `criteria` selects.
///
/// A show is a gate: its episodes are considered only if the show itself is
/// selected, and then each episode must be selected on its own as well.
/// Movies are considered individually. The collected items are sorted with
/// `criteria.compare`; items comparing equal have no guaranteed relative
/// order since catalog iteration order is unspecified.
pub fn generate<C>(catalog: &Catalog, name: &str, criteria: &C) -> Result<Watchlist>
where
    C: WatchlistCriteria + ?Sized,
{
    let watchlist = Watchlist::new(name)?;
    let mut items: Vec<WatchItem> = Vec::new();

    for show in catalog.tv_shows() {
        if !criteria.select(&**show) {
            tracing::debug!("Skipping show {}", show.title());
            continue;
        }
        for episode in show.episodes() {
            if criteria.select(&*episode) {
                items.push(WatchItem::Episode(episode));
            }
        }
    }

    for movie in catalog.movies() {
        if criteria.select(&**movie) {
            items.push(WatchItem::Movie(movie.clone()));
        }
    }

    items.sort_by(|a, b| criteria.compare(a, b));

    for item in items {
        watchlist.push(item);
    }

    tracing::info!("Generated watchlist {} with {} items", name, watchlist.len());
    Ok(watchlist)
}
