//! Media-related data models.

use crate::models::info::Tags;
use crate::models::movie::Movie;
use crate::models::tvshow::Episode;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::str::FromStr;

/// Spoken language of a work.
///
/// Serialized as its display name, so config files and JSON output use the
/// same spelling `FromStr` accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Language {
    English,
    French,
    German,
    Spanish,
    Italian,
    Japanese,
    Korean,
    Chinese,
    Other(String),
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::French => write!(f, "French"),
            Language::German => write!(f, "German"),
            Language::Spanish => write!(f, "Spanish"),
            Language::Italian => write!(f, "Italian"),
            Language::Japanese => write!(f, "Japanese"),
            Language::Korean => write!(f, "Korean"),
            Language::Chinese => write!(f, "Chinese"),
            Language::Other(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "english" | "en" => Language::English,
            "french" | "fr" => Language::French,
            "german" | "de" => Language::German,
            "spanish" | "es" => Language::Spanish,
            "italian" | "it" => Language::Italian,
            "japanese" | "ja" => Language::Japanese,
            "korean" | "ko" => Language::Korean,
            "chinese" | "zh" => Language::Chinese,
            _ => Language::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for Language {
    fn from(name: String) -> Self {
        let Ok(language) = name.parse::<Language>();
        language
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.to_string()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// Something that can be played and tagged.
pub trait Watchable {
    /// Play the video. Playback itself is out of scope; this only logs.
    fn watch(&self);

    /// Whether the element is ready to be played.
    fn is_valid(&self) -> bool;

    fn title(&self) -> &str;
    fn language(&self) -> &Language;
    fn studio(&self) -> &str;

    /// Tag storage backing the `*_info` accessors.
    fn tags(&self) -> &Tags;

    fn info(&self, key: &str) -> Option<String> {
        self.tags().get(key)
    }

    fn has_info(&self, key: &str) -> bool {
        self.tags().has(key)
    }

    /// Set or, with `None`, remove a tag. Returns the previous value.
    fn set_info(&self, key: &str, value: Option<&str>) -> Result<Option<String>> {
        self.tags().set(key, value)
    }
}

/// An entry of a watchlist.
///
/// Equality is identity: two items are equal when they refer to the same
/// shared work, not when their fields match.
#[derive(Debug, Clone)]
pub enum WatchItem {
    Movie(Rc<Movie>),
    Episode(Rc<Episode>),
}

impl WatchItem {
    pub fn as_movie(&self) -> Option<&Rc<Movie>> {
        match self {
            WatchItem::Movie(m) => Some(m),
            WatchItem::Episode(_) => None,
        }
    }

    pub fn as_episode(&self) -> Option<&Rc<Episode>> {
        match self {
            WatchItem::Episode(e) => Some(e),
            WatchItem::Movie(_) => None,
        }
    }

    fn inner(&self) -> &dyn Watchable {
        match self {
            WatchItem::Movie(m) => &**m,
            WatchItem::Episode(e) => &**e,
        }
    }
}

impl Watchable for WatchItem {
    fn watch(&self) {
        self.inner().watch()
    }

    fn is_valid(&self) -> bool {
        self.inner().is_valid()
    }

    fn title(&self) -> &str {
        self.inner().title()
    }

    fn language(&self) -> &Language {
        self.inner().language()
    }

    fn studio(&self) -> &str {
        self.inner().studio()
    }

    fn tags(&self) -> &Tags {
        self.inner().tags()
    }
}

impl PartialEq for WatchItem {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (WatchItem::Movie(a), WatchItem::Movie(b)) => Rc::ptr_eq(a, b),
            (WatchItem::Episode(a), WatchItem::Episode(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for WatchItem {}

impl From<Rc<Movie>> for WatchItem {
    fn from(movie: Rc<Movie>) -> Self {
        WatchItem::Movie(movie)
    }
}

impl From<Rc<Episode>> for WatchItem {
    fn from(episode: Rc<Episode>) -> Self {
        WatchItem::Episode(episode)
    }
}
