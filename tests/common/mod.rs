//! Shared fixtures for integration tests.

#![allow(dead_code)]

use media_catalog::core::catalog::Catalog;
use media_catalog::models::{Language, Movie, TvShow};
use media_catalog::utils::fs::{FileProbe, ProbeHandle};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// In-memory view of the file system.
#[derive(Debug, Default, Clone)]
pub struct FakeProbe {
    pub files: HashSet<PathBuf>,
    pub dirs: HashSet<PathBuf>,
}

impl FakeProbe {
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
            dirs: HashSet::new(),
        }
    }

    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dirs.insert(PathBuf::from(dir));
        self
    }
}

impl FileProbe for FakeProbe {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn is_readable_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

/// A catalog whose works see `probe` as the file system.
pub fn catalog_with(probe: FakeProbe) -> Catalog {
    Catalog::with_probe(ProbeHandle::new(probe))
}

/// A catalog where nothing exists on disk.
pub fn empty_catalog() -> Catalog {
    catalog_with(FakeProbe::default())
}

pub fn movie(catalog: &mut Catalog, title: &str, language: Language) -> Rc<Movie> {
    let path = format!("/media/{}.mkv", title);
    catalog
        .movie(Path::new(&path), title, language, "Studio")
        .unwrap()
}

/// A show with one episode per title, in order.
pub fn show(catalog: &mut Catalog, title: &str, language: Language, episodes: &[&str]) -> Rc<TvShow> {
    let show = catalog.tv_show(title, language, "Network").unwrap();
    for (i, ep) in episodes.iter().enumerate() {
        let path = format!("/media/{}/{:02}.mkv", title, i + 1);
        show.create_and_add_episode(Path::new(&path), ep).unwrap();
    }
    show
}
