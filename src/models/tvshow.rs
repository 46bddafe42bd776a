//! TV shows and the episodes they aggregate.

use crate::core::binge::{BingeCursor, Bingeable};
use crate::error::require;
use crate::models::info::Tags;
use crate::models::media::{Language, Watchable};
use crate::utils::fs::ProbeHandle;
use crate::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

/// One episode of a [`TvShow`].
///
/// Studio is the owning show's; language is too unless given at creation.
#[derive(Debug)]
pub struct Episode {
    path: PathBuf,
    title: String,
    number: usize,
    show: Weak<TvShow>,
    show_title: String,
    language: Language,
    studio: String,
    tags: Tags,
    probe: ProbeHandle,
}

impl Episode {
    /// 1-based position within the show.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The owning show, while it is still alive.
    pub fn show(&self) -> Option<Rc<TvShow>> {
        self.show.upgrade()
    }

    pub fn show_title(&self) -> &str {
        &self.show_title
    }
}

impl Watchable for Episode {
    fn watch(&self) {
        tracing::info!(
            "Now playing {} episode {}: {}",
            self.show_title,
            self.number,
            self.title
        );
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

/// A TV show with a title, language and studio, aggregating episodes in
/// the order they were added.
#[derive(Debug)]
pub struct TvShow {
    title: String,
    language: Language,
    studio: String,
    tags: Tags,
    episodes: RefCell<BingeCursor<Rc<Episode>>>,
    probe: ProbeHandle,
}

impl TvShow {
    pub(crate) fn new(title: &str, language: Language, studio: &str, probe: ProbeHandle) -> Self {
        Self {
            title: title.to_string(),
            language,
            studio: studio.to_string(),
            tags: Tags::new(),
            episodes: RefCell::new(BingeCursor::new()),
            probe,
        }
    }

    /// Create an episode at the end of the episode list and return it.
    pub fn create_and_add_episode(self: &Rc<Self>, path: &Path, title: &str) -> Result<Rc<Episode>> {
        self.create_and_add_episode_in(path, title, self.language.clone())
    }

    /// Like [`create_and_add_episode`](Self::create_and_add_episode), for an
    /// episode whose audio differs from the show's language.
    pub fn create_and_add_episode_in(
        self: &Rc<Self>,
        path: &Path,
        title: &str,
        language: Language,
    ) -> Result<Rc<Episode>> {
        require(!title.trim().is_empty(), || "episode title must not be empty".into())?;
        let mut episodes = self.episodes.borrow_mut();
        let episode = Rc::new(Episode {
            path: path.to_path_buf(),
            title: title.to_string(),
            number: episodes.total_count() + 1,
            show: Rc::downgrade(self),
            show_title: self.title.clone(),
            language,
            studio: self.studio.clone(),
            tags: Tags::new(),
            probe: self.probe.clone(),
        });
        episodes.push(Rc::clone(&episode));
        tracing::debug!("Added episode {} \"{}\" to {}", episode.number, title, self.title);
        Ok(episode)
    }

    /// Episode by 1-based number.
    pub fn episode(&self, number: usize) -> Result<Rc<Episode>> {
        self.episodes.borrow().get(number).cloned()
    }

    /// All episodes in order.
    pub fn episodes(&self) -> Vec<Rc<Episode>> {
        self.episodes.borrow().as_slice().to_vec()
    }

    pub fn episode_count(&self) -> usize {
        self.episodes.borrow().total_count()
    }
}

impl Watchable for TvShow {
    /// Plays every valid episode in order.
    fn watch(&self) {
        for episode in self.episodes() {
            if episode.is_valid() {
                episode.watch();
            }
        }
    }

    /// A show is valid when at least one of its episodes is.
    fn is_valid(&self) -> bool {
        self.episodes.borrow().iter().any(|e| e.is_valid())
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

impl Bingeable for TvShow {
    type Item = Rc<Episode>;

    fn total_count(&self) -> usize {
        self.episodes.borrow().total_count()
    }

    fn remaining_count(&self) -> usize {
        self.episodes.borrow().remaining_count()
    }

    fn next_item(&self) -> Result<Rc<Episode>> {
        self.episodes.borrow_mut().advance()
    }

    fn reset(&self) {
        self.episodes.borrow_mut().reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show() -> Rc<TvShow> {
        Rc::new(TvShow::new("Show", Language::English, "HBO", ProbeHandle::default()))
    }

    #[test]
    fn test_episode_numbers_follow_append_order() {
        let show = show();
        let first = show.create_and_add_episode(Path::new("/e1.mkv"), "Pilot").unwrap();
        let second = show.create_and_add_episode(Path::new("/e2.mkv"), "Two").unwrap();
        assert_eq!(first.number(), 1);
        assert_eq!(second.number(), 2);
        assert!(Rc::ptr_eq(&show.episode(1).unwrap(), &first));
        assert!(show.episode(3).unwrap_err().is_precondition());
    }

    #[test]
    fn test_episode_inherits_show_fields() {
        let show = show();
        let ep = show.create_and_add_episode(Path::new("/e1.mkv"), "Pilot").unwrap();
        assert_eq!(ep.language(), &Language::English);
        assert_eq!(ep.studio(), "HBO");
        assert!(Rc::ptr_eq(&ep.show().unwrap(), &show));
    }

    #[test]
    fn test_show_validity_needs_a_valid_episode() {
        let dir = tempfile::TempDir::new().unwrap();
        let show = show();
        assert!(!show.is_valid());
        show.create_and_add_episode(&dir.path().join("missing.mkv"), "Gone").unwrap();
        assert!(!show.is_valid());
        let real = dir.path().join("real.mkv");
        std::fs::write(&real, "x").unwrap();
        show.create_and_add_episode(&real, "Here").unwrap();
        assert!(show.is_valid());
    }

    #[test]
    fn test_empty_show_cannot_binge() {
        let show = show();
        assert_eq!(show.remaining_count(), 0);
        assert!(show.next_item().unwrap_err().is_precondition());
    }
}
