//! Data models.

pub mod config;
pub mod info;
pub mod media;
pub mod movie;
pub mod tvshow;
pub mod watchlist;

pub use media::{Language, WatchItem, Watchable};
pub use movie::Movie;
pub use tvshow::{Episode, TvShow};
pub use watchlist::Watchlist;
