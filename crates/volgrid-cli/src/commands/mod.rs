//! Command implementations.

pub mod carry;
pub mod grids;
pub mod list;

pub use carry::CarryArgs;
pub use grids::GridsArgs;
pub use list::ListArgs;

use std::path::Path;

use anyhow::{Context, Result};

use volgrid_core::dataset::Dataset;
use volgrid_core::validate::Resolution;

use crate::output::print_warning;

/// Loads the dataset, attaching the path to any failure.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    Dataset::from_path(path).with_context(|| format!("loading dataset {}", path.display()))
}

/// Surfaces unknown request tokens as a non-fatal warning.
pub fn warn_unknown(resolution: &Resolution) {
    if resolution.has_unknown() {
        print_warning(&format!(
            "The following currency pairs do not exist in the dataset or were mistyped: {}",
            resolution.unknown.join(", ")
        ));
    }
}
