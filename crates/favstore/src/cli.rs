//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use favstore_core::favorites::TaxonId;

/// Manage locally stored favorite taxa.
#[derive(Debug, Parser)]
#[command(name = "favstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base directory holding the favorites store.
    #[arg(long, env = "FAVSTORE_BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mark a taxon as favorite.
    Add {
        /// Taxon ID.
        #[arg(allow_negative_numbers = true)]
        taxon_id: TaxonId,
    },
    /// Remove a taxon from favorites.
    Remove {
        /// Taxon ID.
        #[arg(allow_negative_numbers = true)]
        taxon_id: TaxonId,
    },
    /// Flip the favorite state of a taxon.
    Toggle {
        /// Taxon ID.
        #[arg(allow_negative_numbers = true)]
        taxon_id: TaxonId,
    },
    /// Check whether a taxon is a favorite.
    Check {
        /// Taxon ID.
        #[arg(allow_negative_numbers = true)]
        taxon_id: TaxonId,
    },
    /// List favorites, most recently added first.
    List,
    /// Print the number of favorites.
    Count,
    /// Remove every favorite.
    Clear {
        /// Confirm removal of all favorites.
        #[arg(long)]
        yes: bool,
    },
    /// Print the on-disk size of the store in bytes.
    Size,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_global_flags() {
        let cli = Cli::try_parse_from([
            "favstore",
            "--base-dir",
            "/tmp/data",
            "--format",
            "json",
            "add",
            "42",
        ])
        .unwrap();

        assert_eq!(cli.base_dir, PathBuf::from("/tmp/data"));
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Add { taxon_id: 42 }));
    }

    #[test]
    fn test_base_dir_reads_environment() {
        let command = Cli::command();
        let base_dir = command
            .get_arguments()
            .find(|arg| arg.get_id() == "base_dir")
            .unwrap();

        assert_eq!(
            base_dir.get_env(),
            Some(std::ffi::OsStr::new("FAVSTORE_BASE_DIR"))
        );
    }

    #[test]
    fn test_parse_negative_taxon_id() {
        let cli = Cli::try_parse_from(["favstore", "toggle", "-7"]).unwrap();

        assert!(matches!(cli.command, Commands::Toggle { taxon_id: -7 }));
    }

    #[test]
    fn test_clear_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["favstore", "clear"]).unwrap();

        assert!(matches!(cli.command, Commands::Clear { yes: false }));
        assert!(matches!(cli.format, OutputFormat::Pretty));
    }

    #[test]
    fn test_rejects_non_numeric_taxon_id() {
        assert!(Cli::try_parse_from(["favstore", "add", "oak"]).is_err());
    }
}
