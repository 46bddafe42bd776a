//! Directory scanner module.
//!
//! Walks a media directory and turns its video files into catalog entries:
//! loose files become movies, and each top-level subdirectory holding videos
//! becomes a TV show whose episodes are its files in path order.

use crate::core::catalog::Catalog;
use crate::models::config::ScanConfig;
use crate::models::media::Watchable;
use crate::utils::fs::{is_video_file, title_from_path};
use crate::Result;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Video files grouped the way they will be cataloged.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Loose video files, one movie each.
    pub movies: Vec<PathBuf>,
    /// Show title -> episode files, sorted by path.
    pub shows: BTreeMap<String, Vec<PathBuf>>,
    /// Sample and extras files that were skipped.
    pub skipped: Vec<PathBuf>,
    /// Total files scanned.
    pub total_files_scanned: usize,
}

impl ScanResult {
    pub fn episode_count(&self) -> usize {
        self.shows.values().map(Vec::len).sum()
    }
}

/// What a scan added to a catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub movies: usize,
    pub shows: usize,
    pub episodes: usize,
}

/// Check if a file is inside an "Extras" or "Sample" directory.
fn is_in_extras_directory(path: &Path) -> bool {
    const EXTRAS_NAMES: &[&str] = &[
        "extras",
        "extra",
        "featurettes",
        "featurette",
        "behind the scenes",
        "deleted scenes",
        "bonus",
        "special features",
        "sample",
        "samples",
    ];

    path.components().any(|component| match component {
        Component::Normal(name) => {
            let name = name.to_string_lossy().to_lowercase();
            EXTRAS_NAMES.contains(&name.as_str())
                || name.contains(".extras")
                || name.contains("-extras")
                || name.contains(".sample")
                || name.contains("-sample")
        }
        _ => false,
    })
}

/// Check if a filename indicates a sample file.
fn is_sample_filename(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.contains("sample") && !lower.contains("sampler")
}

/// Scan a directory for video files.
///
/// With `group_shows` off, every video becomes a movie regardless of depth.
pub fn scan_directory(path: &Path, group_shows: bool) -> Result<ScanResult> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        result.total_files_scanned += 1;

        let entry_path = entry.path();
        if !is_video_file(entry_path) {
            continue;
        }

        let relative = entry_path.strip_prefix(path).unwrap_or(entry_path);
        let filename = entry.file_name().to_string_lossy();
        if is_in_extras_directory(relative) || is_sample_filename(&filename) {
            tracing::debug!("Skipping extra: {}", entry_path.display());
            result.skipped.push(entry_path.to_path_buf());
            continue;
        }

        let mut components = relative.components();
        let top = components.next();
        let is_nested = components.next().is_some();

        match top {
            Some(Component::Normal(dir)) if group_shows && is_nested => {
                result
                    .shows
                    .entry(dir.to_string_lossy().to_string())
                    .or_default()
                    .push(entry_path.to_path_buf());
            }
            _ => result.movies.push(entry_path.to_path_buf()),
        }
    }

    result.movies.sort();
    for episodes in result.shows.values_mut() {
        episodes.sort();
    }

    tracing::info!(
        "Scanned {} files: {} movies, {} shows ({} episodes), {} skipped",
        result.total_files_scanned,
        result.movies.len(),
        result.shows.len(),
        result.episode_count(),
        result.skipped.len()
    );

    Ok(result)
}

/// Register scanned files in `catalog` and add them to it.
///
/// Works already registered under the same title are reused as-is; a show
/// only gains episodes whose files it does not already hold.
pub fn ingest(catalog: &mut Catalog, scan: &ScanResult, config: &ScanConfig) -> Result<IngestSummary> {
    let mut summary = IngestSummary::default();

    for path in &scan.movies {
        let title = title_from_path(path);
        match catalog.movie(path, &title, config.default_language.clone(), &config.default_studio) {
            Ok(movie) => {
                if catalog.add_movie(&movie) {
                    summary.movies += 1;
                }
            }
            Err(e) => tracing::warn!("Failed to catalog {}: {}", path.display(), e),
        }
    }

    for (title, files) in &scan.shows {
        let show = catalog.tv_show(title, config.default_language.clone(), &config.default_studio)?;
        let known: Vec<PathBuf> = show.episodes().iter().map(|e| e.path().to_path_buf()).collect();
        for file in files {
            if known.contains(file) {
                continue;
            }
            show.create_and_add_episode(file, &title_from_path(file))?;
            summary.episodes += 1;
        }
        if catalog.add_tv_show(&show) {
            summary.shows += 1;
        }
        tracing::debug!("Show {} now has {} episodes", show.title(), show.episode_count());
    }

    Ok(summary)
}
