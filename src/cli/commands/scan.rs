//! Scan command implementation.

use crate::core::catalog::Catalog;
use crate::core::scanner;
use crate::models::config::Config;
use crate::models::media::Watchable;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Build a catalog from `path` using `config`: owner details first, then
/// every scanned work.
pub fn build_catalog(path: &Path, config: &Config, flat: bool) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog.set_name(&config.owner.name)?;
    if let Some(email) = &config.owner.email {
        if let Err(e) = catalog.set_email(email) {
            tracing::warn!("{}", e);
        }
    }

    let group_shows = config.scan.shows_from_subdirectories && !flat;
    let scan = scanner::scan_directory(path, group_shows)?;
    let summary = scanner::ingest(&mut catalog, &scan, &config.scan)?;
    tracing::info!(
        "Cataloged {} movies, {} shows, {} episodes",
        summary.movies,
        summary.shows,
        summary.episodes
    );
    Ok(catalog)
}

/// Scan a directory and print the resulting catalog.
pub fn scan(path: &Path, config: &Config, flat: bool) -> Result<()> {
    println!("{} {}", "Scanning".bold().cyan(), path.display());
    println!();

    let catalog = build_catalog(path, config, flat)?;

    println!(
        "{}",
        format!("Catalog \"{}\"", catalog.name()).bold()
    );
    if let Some(email) = catalog.email() {
        println!("Owner: {}", email);
    }
    println!();

    let mut movies: Vec<_> = catalog.movies().collect();
    movies.sort_by(|a, b| a.title().cmp(b.title()));
    println!("{}", format!("Movies ({}):", movies.len()).bold());
    for movie in movies {
        let status = if movie.is_valid() {
            "ok".green()
        } else {
            "unreadable".red()
        };
        println!("  {:<40} {}", movie.title(), status);
    }
    println!();

    let mut shows: Vec<_> = catalog.tv_shows().collect();
    shows.sort_by(|a, b| a.title().cmp(b.title()));
    println!("{}", format!("TV Shows ({}):", shows.len()).bold());
    for show in shows {
        println!("  {:<40} {} episodes", show.title(), show.episode_count());
    }

    Ok(())
}
