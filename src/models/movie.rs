//! A single movie, identified by title and backed by a file.

use crate::core::sequence::{SequenceLink, Sequenceable};
use crate::models::info::Tags;
use crate::models::media::{Language, Watchable};
use crate::utils::fs::ProbeHandle;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A movie with at least a title, language and publishing studio.
///
/// Built only through the catalog's identity registry, so a title maps to
/// exactly one `Movie` per catalog.
#[derive(Debug)]
pub struct Movie {
    path: PathBuf,
    title: String,
    language: Language,
    studio: String,
    tags: Tags,
    link: SequenceLink<Movie>,
    probe: ProbeHandle,
}

impl Movie {
    /// Rejects a path that exists but is not a regular file.
    pub(crate) fn new(
        path: &Path,
        title: &str,
        language: Language,
        studio: &str,
        probe: ProbeHandle,
    ) -> Result<Self> {
        if !probe.accepts_media_path(path) {
            return Err(Error::NotAFile(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            title: title.to_string(),
            language,
            studio: studio.to_string(),
            tags: Tags::new(),
            link: SequenceLink::new(),
            probe,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Watchable for Movie {
    fn watch(&self) {
        tracing::info!("Now playing {}", self.title);
    }

    fn is_valid(&self) -> bool {
        self.probe.is_readable_file(&self.path)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn language(&self) -> &Language {
        &self.language
    }

    fn studio(&self) -> &str {
        &self.studio
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Sequenceable for Movie {
    fn link(&self) -> &SequenceLink<Self> {
        &self.link
    }
}
