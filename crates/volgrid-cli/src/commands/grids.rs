//! Grids command implementation.
//!
//! The volatility flow: one composite image per resolved currency pair,
//! stacking the implied-vol, 4-week-shift, and percentile tables.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use volgrid_core::compose::DEFAULT_SPACING;
use volgrid_core::validate::resolve;
use volgrid_render::Exporter;

use crate::commands::{load_dataset, warn_unknown};
use crate::output::print_success;

/// Arguments for the grids command.
#[derive(Args, Debug)]
pub struct GridsArgs {
    /// Path to the volatility dataset CSV
    #[arg(short, long, default_value = "vol_data.csv")]
    pub data: PathBuf,

    /// Directory for the generated images
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Vertical spacing between stacked tables, in pixels
    #[arg(long, default_value_t = DEFAULT_SPACING)]
    pub spacing: u32,

    /// Currency pairs to generate (case-insensitive), or "all"
    #[arg(required = true, num_args = 1..)]
    pub ccys: Vec<String>,
}

/// Execute the grids command.
pub fn execute(args: GridsArgs) -> Result<()> {
    let dataset = load_dataset(&args.data)?;
    let resolution = resolve(&args.ccys, &dataset)?;
    warn_unknown(&resolution);

    let exporter = Exporter::new(&args.out_dir).with_spacing(args.spacing);
    for pair in &resolution.pairs {
        let path = exporter.export_grid(&dataset, pair)?;
        print_success(&format!("{pair} -> {}", path.display()));
    }

    Ok(())
}
