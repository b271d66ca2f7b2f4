//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storefront - browse a product catalog with local snapshots
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog with local snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file applied over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal user interface
    Tui,

    /// Print the catalog, loading it from the snapshot or the remote endpoint
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Replace the catalog with a fresh copy from the remote endpoint
    Refresh,

    /// Append a product
    Add {
        /// Remote product id; a random one when omitted
        id: Option<u32>,

        /// Append a locally generated product instead of fetching one
        #[arg(long, conflicts_with = "id")]
        stub: bool,
    },

    /// Remove the product at a list index (as shown by `list`)
    Remove {
        /// Zero-based position in the list
        index: usize,
    },

    /// Print the top-rated products as a bar chart
    Chart {
        /// Number of bars; the configured value when omitted
        #[arg(long)]
        top: Option<usize>,
    },

    /// Delete the local snapshot so the next start fetches from remote
    Reset,
}

/// Output format for `list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON array, same shape as the snapshot
    Json,
}
