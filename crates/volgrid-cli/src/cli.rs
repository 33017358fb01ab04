//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CarryArgs, GridsArgs, ListArgs};

/// Volgrid - FX volatility grid and carry table image generator
#[derive(Parser)]
#[command(name = "volgrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for listings
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate composite volatility grid images (vol, 4-week shift,
    /// percentile) per currency pair
    Grids(GridsArgs),

    /// Generate carry-by-tenor table images (defaults to the dataset's
    /// G10 pairs)
    Carry(CarryArgs),

    /// List the currency pairs available in a dataset
    List(ListArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
