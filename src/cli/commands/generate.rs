//! Generate command implementation.

use crate::cli::args::{OrderBy, OutputFormat};
use crate::cli::commands::scan::build_catalog;
use crate::core::generator::{self, GenerationInfo};
use crate::models::config::Config;
use crate::models::media::{Language, WatchItem, Watchable};
use crate::models::Watchlist;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub name: String,
    pub language: Option<String>,
    pub studio: Option<String>,
    pub valid_only: bool,
    pub order: OrderBy,
    pub format: OutputFormat,
}

/// Turn command options into generation criteria.
pub fn criteria(options: &GenerateOptions) -> GenerationInfo {
    let mut info = match options.order {
        OrderBy::Title => GenerationInfo::new(generator::any(), generator::title_ascending()),
        OrderBy::Studio => GenerationInfo::new(generator::any(), generator::studio_then_title()),
    };
    if let Some(language) = &options.language {
        let Ok(language) = language.parse::<Language>();
        info = info.and(generator::by_language(language));
    }
    if let Some(studio) = &options.studio {
        info = info.and(generator::by_studio(studio));
    }
    if options.valid_only {
        info = info.and(generator::valid_only());
    }
    info
}

/// Scan `path`, generate a watchlist and print it.
pub fn generate(path: &Path, config: &Config, options: &GenerateOptions) -> Result<()> {
    let catalog = build_catalog(path, config, false)?;
    let watchlist = catalog.generate_watchlist(&options.name, &criteria(options))?;

    match options.format {
        OutputFormat::Json => print_json(&watchlist)?,
        OutputFormat::Simple => print_simple(&watchlist),
        OutputFormat::Table => print_table(&watchlist),
    }

    Ok(())
}

fn kind_and_label(item: &WatchItem) -> (&'static str, String) {
    match item {
        WatchItem::Movie(_) => ("movie", item.title().to_string()),
        WatchItem::Episode(e) => (
            "episode",
            format!("{} #{}: {}", e.show_title(), e.number(), e.title()),
        ),
    }
}

/// Print the watchlist as JSON.
fn print_json(watchlist: &Watchlist) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput {
        name: String,
        items: Vec<ItemJson>,
    }

    #[derive(serde::Serialize)]
    struct ItemJson {
        kind: &'static str,
        title: String,
        language: Language,
        studio: String,
        valid: bool,
    }

    let output = JsonOutput {
        name: watchlist.name(),
        items: watchlist
            .items()
            .iter()
            .map(|item| {
                let (kind, title) = kind_and_label(item);
                ItemJson {
                    kind,
                    title,
                    language: item.language().clone(),
                    studio: item.studio().to_string(),
                    valid: item.is_valid(),
                }
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the watchlist one item per line.
fn print_simple(watchlist: &Watchlist) {
    for item in watchlist.items().iter() {
        println!("{}", kind_and_label(item).1);
    }
}

/// Print the watchlist as a table.
fn print_table(watchlist: &Watchlist) {
    if watchlist.is_empty() {
        println!("{}", "No matching items.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Watchlist \"{}\" ({} items):", watchlist.name(), watchlist.len())
            .bold()
            .cyan()
    );
    println!();
    println!(
        " {:>4} | {:<8} | {:<40} | {:<10} | {}",
        "#", "Kind", "Title", "Language", "Studio"
    );
    println!("{}", "-".repeat(80));

    for (i, item) in watchlist.items().iter().enumerate() {
        let (kind, label) = kind_and_label(item);
        let label = if label.chars().count() > 38 {
            format!("{}...", label.chars().take(35).collect::<String>())
        } else {
            label
        };
        println!(
            " {:>4} | {:<8} | {:<40} | {:<10} | {}",
            i + 1,
            kind,
            label,
            item.language().to_string(),
            item.studio()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GenerateOptions {
        GenerateOptions {
            name: "x".into(),
            language: None,
            studio: None,
            valid_only: false,
            order: OrderBy::Title,
            format: OutputFormat::Simple,
        }
    }

    #[test]
    fn test_criteria_from_options() {
        use crate::core::generator::WatchlistCriteria;
        use crate::core::catalog::Catalog;

        let mut catalog = Catalog::new();
        let en = catalog
            .movie(Path::new("/nope/a.mkv"), "A", Language::English, "Pixar")
            .unwrap();
        let fr = catalog
            .movie(Path::new("/nope/b.mkv"), "B", Language::French, "Gaumont")
            .unwrap();

        let mut opts = options();
        opts.language = Some("english".into());
        let info = criteria(&opts);
        assert!(info.select(&*en));
        assert!(!info.select(&*fr));

        let mut opts = options();
        opts.studio = Some("GAUMONT".into());
        let info = criteria(&opts);
        assert!(info.select(&*fr));
        assert!(!info.select(&*en));
    }
}
