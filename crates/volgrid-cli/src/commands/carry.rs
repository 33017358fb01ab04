//! Carry command implementation.
//!
//! The carry flow: one carry-by-tenor table image per pair. With no pairs
//! given, the G10 subset of the dataset is used.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use volgrid_core::g10::g10_pairs;
use volgrid_core::types::CurrencyPair;
use volgrid_core::validate::resolve;
use volgrid_render::Exporter;

use crate::commands::{load_dataset, warn_unknown};
use crate::output::{print_success, print_warning};

/// Arguments for the carry command.
#[derive(Args, Debug)]
pub struct CarryArgs {
    /// Path to the volatility dataset CSV
    #[arg(short, long, default_value = "vol_data.csv")]
    pub data: PathBuf,

    /// Directory for the generated images
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Currency pairs to generate (case-insensitive), or "all";
    /// defaults to the dataset's G10 pairs
    #[arg(num_args = 0..)]
    pub ccys: Vec<String>,
}

/// Execute the carry command.
pub fn execute(args: CarryArgs) -> Result<()> {
    let dataset = load_dataset(&args.data)?;

    let pairs: Vec<CurrencyPair> = if args.ccys.is_empty() {
        let pairs = g10_pairs(&dataset);
        if pairs.is_empty() {
            print_warning("dataset contains no G10 currency pairs; nothing to do");
            return Ok(());
        }
        pairs
    } else {
        let resolution = resolve(&args.ccys, &dataset)?;
        warn_unknown(&resolution);
        resolution.pairs
    };

    let exporter = Exporter::new(&args.out_dir);
    for pair in &pairs {
        let path = exporter.export_carry(&dataset, pair)?;
        print_success(&format!("{pair} -> {}", path.display()));
    }

    Ok(())
}
