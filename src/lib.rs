//! Media Catalog Library
//!
//! An in-memory catalog of movies, TV shows and watchlists, with flyweight
//! works, bingeable episode sequencing and watchlist generation.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
