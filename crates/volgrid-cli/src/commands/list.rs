//! List command implementation.
//!
//! Prints the currency pairs available in a dataset, mirroring what the
//! interactive surface offers for selection.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use volgrid_core::g10::{g10_pairs, is_g10_pair};

use crate::cli::OutputFormat;
use crate::commands::load_dataset;
use crate::output::{print_header, print_output};

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the volatility dataset CSV
    #[arg(short, long, default_value = "vol_data.csv")]
    pub data: PathBuf,

    /// Only show pairs where both legs are G10 currencies
    #[arg(long)]
    pub g10: bool,
}

#[derive(Serialize, Tabled)]
struct PairRow {
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Quote")]
    quote: String,
    #[tabled(rename = "G10")]
    g10: &'static str,
}

/// Execute the list command.
pub fn execute(args: ListArgs, format: OutputFormat) -> Result<()> {
    let dataset = load_dataset(&args.data)?;

    let pairs = if args.g10 {
        g10_pairs(&dataset)
    } else {
        dataset.pairs().to_vec()
    };

    let rows: Vec<PairRow> = pairs
        .iter()
        .map(|pair| PairRow {
            pair: pair.to_string(),
            base: pair.base().to_string(),
            quote: pair.quote().to_string(),
            g10: if is_g10_pair(pair) { "yes" } else { "no" },
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(if args.g10 {
            "G10 currency pairs"
        } else {
            "Currency pairs"
        });
    }
    print_output(&rows, format)
}
