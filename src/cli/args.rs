//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Media Catalog - Catalog a media directory and build watchlists
#[derive(Parser, Debug)]
#[command(name = "media-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory and show what would be cataloged
    Scan {
        /// Directory containing movies and show folders
        #[arg(value_name = "DIR")]
        path: PathBuf,

        /// Catalog every video as a movie, ignoring show folders
        #[arg(long)]
        flat: bool,
    },

    /// Scan a directory and generate a watchlist from it
    Generate {
        /// Directory containing movies and show folders
        #[arg(value_name = "DIR")]
        path: PathBuf,

        /// Name of the watchlist
        #[arg(short, long, default_value = "Watchlist")]
        name: String,

        /// Only include works in this language
        #[arg(short, long)]
        language: Option<String>,

        /// Only include works from this studio
        #[arg(short, long)]
        studio: Option<String>,

        /// Only include playable files
        #[arg(long)]
        valid_only: bool,

        /// Ordering of the generated list
        #[arg(long, value_enum, default_value = "title")]
        order: OrderBy,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderBy {
    Title,
    Studio,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Simple,
    Json,
}
