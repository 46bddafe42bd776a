//! Integration tests for watchlist generation.
//!
//! Tests cover:
//! - Selection at show, episode and movie granularity
//! - Ordering by the supplied comparator
//! - Precondition on the watchlist name

mod common;

use common::{catalog_with, empty_catalog, movie, show, FakeProbe};
use media_catalog::core::catalog::Catalog;
use media_catalog::core::generator::{
    by_language, by_studio, generate, studio_then_title, title_ascending, valid_only,
    GenerationInfo, WatchlistCriteria,
};
use media_catalog::models::{Language, WatchItem, Watchable};
use std::cmp::Ordering;
use std::path::Path;

fn titles(list: &media_catalog::models::Watchlist) -> Vec<String> {
    list.items().iter().map(|i| i.title().to_string()).collect()
}

/// Two English movies, one French movie, and an English show with two
/// English episodes and one French one.
fn mixed_catalog() -> Catalog {
    let mut catalog = empty_catalog();
    for (title, language) in [
        ("Casablanca", Language::English),
        ("Alien", Language::English),
        ("Amelie", Language::French),
    ] {
        let m = movie(&mut catalog, title, language);
        catalog.add_movie(&m);
    }

    let show = catalog.tv_show("Office", Language::English, "NBC").unwrap();
    show.create_and_add_episode(Path::new("/o/1.mkv"), "Pilot").unwrap();
    show.create_and_add_episode_in(Path::new("/o/2.mkv"), "Diversity Day", Language::French)
        .unwrap();
    show.create_and_add_episode(Path::new("/o/3.mkv"), "Basketball").unwrap();
    catalog.add_tv_show(&show);
    catalog
}

// ========== SELECTION TESTS ==========

#[test]
fn test_generation_selects_by_language_and_sorts_by_title() {
    let catalog = mixed_catalog();
    let info = GenerationInfo::new(by_language(Language::English), title_ascending());

    let list = generate(&catalog, "x", &info).unwrap();

    assert_eq!(list.name(), "x");
    assert_eq!(list.len(), 4);
    assert_eq!(titles(&list), vec!["Alien", "Basketball", "Casablanca", "Pilot"]);
    let movies = list.items().iter().filter(|i| i.as_movie().is_some()).count();
    assert_eq!(movies, 2);
}

#[test]
fn test_show_gate_excludes_all_episodes() {
    let mut catalog = empty_catalog();
    let show = catalog.tv_show("Les Revenants", Language::French, "Canal+").unwrap();
    show.create_and_add_episode_in(Path::new("/r/1.mkv"), "Camille", Language::English)
        .unwrap();
    show.create_and_add_episode_in(Path::new("/r/2.mkv"), "Simon", Language::English)
        .unwrap();
    catalog.add_tv_show(&show);

    let info = GenerationInfo::new(by_language(Language::English), title_ascending());
    let list = catalog.generate_watchlist("english", &info).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_episode_gate_applies_after_show_passes() {
    let catalog = mixed_catalog();
    let info = GenerationInfo::new(by_language(Language::French), title_ascending());
    let list = generate(&catalog, "fr", &info).unwrap();
    // The French episode's show is English, so only the movie comes through
    assert_eq!(titles(&list), vec!["Amelie"]);
}

#[test]
fn test_works_not_added_to_catalog_are_ignored() {
    let mut catalog = empty_catalog();
    let _loose = movie(&mut catalog, "Loose", Language::English);
    let list = generate(&catalog, "all", &GenerationInfo::default()).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_combined_filters() {
    let mut catalog = empty_catalog();
    let a = catalog
        .movie(Path::new("/a.mkv"), "A", Language::English, "Pixar")
        .unwrap();
    let b = catalog
        .movie(Path::new("/b.mkv"), "B", Language::English, "Ghibli")
        .unwrap();
    catalog.add_movie(&a);
    catalog.add_movie(&b);

    let info = GenerationInfo::new(by_language(Language::English), title_ascending())
        .and(by_studio("pixar"));
    let list = generate(&catalog, "pixar", &info).unwrap();
    assert_eq!(titles(&list), vec!["A"]);
}

#[test]
fn test_valid_only_uses_file_probe() {
    let mut catalog = catalog_with(FakeProbe::with_files(&["/media/Here.mkv"]));
    let here = movie(&mut catalog, "Here", Language::English);
    let gone = movie(&mut catalog, "Gone", Language::English);
    catalog.add_movie(&here);
    catalog.add_movie(&gone);

    let info = GenerationInfo::new(valid_only(), title_ascending());
    let list = generate(&catalog, "playable", &info).unwrap();
    assert_eq!(titles(&list), vec!["Here"]);
    assert_eq!(list.valid_count(), 1);
}

// ========== ORDERING TESTS ==========

#[test]
fn test_custom_criteria_ordering() {
    struct EpisodesFirst;

    impl WatchlistCriteria for EpisodesFirst {
        fn select(&self, _item: &dyn Watchable) -> bool {
            true
        }

        fn compare(&self, a: &WatchItem, b: &WatchItem) -> Ordering {
            let rank = |i: &WatchItem| i.as_movie().is_some();
            rank(a).cmp(&rank(b)).then_with(|| a.title().cmp(b.title()))
        }
    }

    let mut catalog = empty_catalog();
    let m = movie(&mut catalog, "Aardvark", Language::English);
    catalog.add_movie(&m);
    let s = show(&mut catalog, "Show", Language::English, &["Zebra", "Yak"]);
    catalog.add_tv_show(&s);

    let list = generate(&catalog, "mixed", &EpisodesFirst).unwrap();
    assert_eq!(titles(&list), vec!["Yak", "Zebra", "Aardvark"]);
}

#[test]
fn test_studio_then_title() {
    let mut catalog = empty_catalog();
    for (title, studio) in [("B", "Alpha"), ("A", "Beta"), ("C", "Alpha")] {
        let m = catalog
            .movie(Path::new("/x.mkv"), title, Language::English, studio)
            .unwrap();
        catalog.add_movie(&m);
    }
    let info = GenerationInfo::new(|_: &dyn Watchable| true, studio_then_title());
    let list = generate(&catalog, "by studio", &info).unwrap();
    assert_eq!(titles(&list), vec!["B", "C", "A"]);
}

#[test]
fn test_generated_list_accepts_appends() {
    let catalog = mixed_catalog();
    let list = generate(&catalog, "x", &GenerationInfo::default()).unwrap();
    let before = list.len();
    let extra = catalog.find_movie("Alien").unwrap();
    list.push(extra);
    assert_eq!(list.len(), before + 1);
}

// ========== PRECONDITION TESTS ==========

#[test]
fn test_blank_name_rejected() {
    let catalog = mixed_catalog();
    let err = generate(&catalog, " ", &GenerationInfo::default()).unwrap_err();
    assert!(err.is_precondition());
}
