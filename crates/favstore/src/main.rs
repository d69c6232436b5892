//! favstore CLI entry point.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use favstore::cli::{Cli, Commands, OutputFormat};
use favstore::output::{format_output, Cleared, Count, Membership, Render, StorageSize};
use favstore::{Config, FavoritesCache};
use favstore_core::favorites::FavoritesService;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; stdout is reserved for command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "favstore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        base_dir: cli.base_dir,
        ..Config::from_env()
    };

    let favorites = FavoritesCache::open(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.database_path().display()))?;

    match cli.command {
        Commands::Add { taxon_id } => {
            favorites.add(taxon_id).await?;
            let membership = Membership {
                taxon_id,
                favorite: true,
            };
            print_confirmation(&membership, cli.format, cli.quiet);
        }
        Commands::Remove { taxon_id } => {
            favorites.remove(taxon_id).await?;
            let membership = Membership {
                taxon_id,
                favorite: false,
            };
            print_confirmation(&membership, cli.format, cli.quiet);
        }
        Commands::Toggle { taxon_id } => {
            let favorite = favorites.toggle(taxon_id).await?;
            let membership = Membership { taxon_id, favorite };
            println!("{}", format_output(&membership, cli.format));
        }
        Commands::Check { taxon_id } => {
            let membership = Membership {
                taxon_id,
                favorite: favorites.is_favorite(taxon_id),
            };
            println!("{}", format_output(&membership, cli.format));
        }
        Commands::List => {
            let entries = favorites.all_favorites().await?;
            println!("{}", format_output(entries.as_slice(), cli.format));
        }
        Commands::Count => {
            let count = Count {
                count: favorites.count(),
            };
            println!("{}", format_output(&count, cli.format));
        }
        Commands::Clear { yes } => {
            if !yes {
                bail!("Refusing to remove every favorite without --yes");
            }
            let removed = favorites.count();
            favorites.clear_all().await?;
            print_confirmation(&Cleared { removed }, cli.format, cli.quiet);
        }
        Commands::Size => {
            let size = StorageSize {
                bytes: favorites.storage_bytes().await?,
            };
            println!("{}", format_output(&size, cli.format));
        }
    }

    Ok(())
}

/// Prints the result of a mutation. `--quiet` only silences pretty output.
fn print_confirmation<T: Render + ?Sized>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet && matches!(format, OutputFormat::Pretty) {
        return;
    }
    println!("{}", format_output(value, format));
}
