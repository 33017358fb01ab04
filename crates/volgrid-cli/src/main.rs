//! Volgrid CLI - Command-line interface for FX volatility grids.
//!
//! # Usage
//!
//! ```bash
//! # Generate composite volatility grids
//! volgrid grids --data vol_data.csv eur/usd gbp/jpy
//!
//! # Generate every pair in the dataset
//! volgrid grids --data vol_data.csv all
//!
//! # Carry tables for the G10 pairs in the dataset
//! volgrid carry --data vol_data.csv
//!
//! # List available currency pairs
//! volgrid list --data vol_data.csv --g10
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Grids(args) => commands::grids::execute(args)?,
        Commands::Carry(args) => commands::carry::execute(args)?,
        Commands::List(args) => commands::list::execute(args, format)?,
    }

    Ok(())
}
