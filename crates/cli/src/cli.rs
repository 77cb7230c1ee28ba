use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "stockroom",
    about = "Track item quantities in a JSON inventory file",
    version
)]
pub struct Cli {
    /// Inventory file (overrides STOCKROOM_FILE)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Log format: text or json (overrides STOCKROOM_LOG_FORMAT)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a scripted walkthrough of every store operation
    Demo,

    /// Add stock to an item
    Add {
        item: String,

        /// Amount to add (whole or fractional, must be positive)
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },

    /// Remove stock from an item
    Remove {
        item: String,

        /// Amount to remove (must be positive)
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },

    /// Print the quantity held for an item
    Get { item: String },

    /// List items below a stock threshold
    Low {
        /// Threshold (overrides STOCKROOM_LOW_STOCK_THRESHOLD)
        #[arg(long, allow_hyphen_values = true)]
        threshold: Option<String>,
    },

    /// Log every item with its quantity
    Report,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stockroom", "add", "apple", "10", "--file", "stock.json", "--log-format", "json",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("stock.json")));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        match cli.command {
            Commands::Add { item, qty } => {
                assert_eq!(item, "apple");
                assert_eq!(qty, "10");
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn negative_quantities_reach_the_store() {
        let cli = Cli::try_parse_from(["stockroom", "remove", "apple", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { qty, .. } if qty == "-3"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["stockroom", "--log-format", "xml", "report"]).is_err());
    }
}
