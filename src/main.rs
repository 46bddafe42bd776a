//! Media Catalog CLI
//!
//! A command-line tool for cataloging a media directory and generating watchlists.

use clap::Parser;
use media_catalog::cli::{
    args::{Cli, Commands},
    commands::{generate, scan},
};
use media_catalog::models::config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();

    match cli.command {
        Commands::Scan { path, flat } => {
            scan::scan(&path, &config, flat)?;
        }

        Commands::Generate {
            path,
            name,
            language,
            studio,
            valid_only,
            order,
            format,
        } => {
            let options = generate::GenerateOptions {
                name,
                language,
                studio,
                valid_only,
                order,
                format,
            };
            generate::generate(&path, &config, &options)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_catalog=debug")
    } else {
        EnvFilter::new("media_catalog=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
