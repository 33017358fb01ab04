//! # Volgrid Core
//!
//! Core types, dataset access, and table construction for the Volgrid FX
//! volatility toolkit.
//!
//! This crate provides everything between the raw CSV and the renderer:
//!
//! - **Types**: `CurrencyPair`, `Tenor`, `DeltaPoint`, `CarryMetric`
//! - **Dataset**: two-level-header CSV loading and per-pair slicing
//! - **Validation**: currency request resolution and the G10 filter
//! - **Tables**: `LogicalTable` construction with declarative formatting
//!   intent (color scales, diverging bars)
//! - **Compositing**: deterministic vertical stacking of rendered images
//!
//! Rendering itself is behind the [`render::TableRenderer`] trait; the
//! `volgrid-render` crate provides the concrete rasterizer.
//!
//! ## Example
//!
//! ```no_run
//! use volgrid_core::dataset::Dataset;
//! use volgrid_core::tables::{GridStyle, TableBuilder};
//! use volgrid_core::validate::resolve;
//!
//! # fn main() -> volgrid_core::VolGridResult<()> {
//! let dataset = Dataset::from_path("vol_data.csv")?;
//! let resolution = resolve(&["eur/usd".into()], &dataset)?;
//! let builder = TableBuilder::new(&dataset, GridStyle::default());
//! for pair in &resolution.pairs {
//!     let triplet = builder.volatility_triplet(pair)?;
//!     println!("{}: {} rows", pair, triplet.vol.n_rows());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compose;
pub mod dataset;
pub mod error;
pub mod g10;
pub mod render;
pub mod tables;
pub mod types;
pub mod validate;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compose::stack_vertical;
    pub use crate::dataset::Dataset;
    pub use crate::error::{VolGridError, VolGridResult};
    pub use crate::g10::g10_pairs;
    pub use crate::render::{RenderedImage, TableRenderer};
    pub use crate::tables::{GridStyle, LogicalTable, TableBuilder, VolTriplet};
    pub use crate::types::{CarryMetric, CurrencyPair, DeltaPoint, Tenor};
    pub use crate::validate::{resolve, Resolution};
}

// Re-export commonly used types at crate root
pub use error::{VolGridError, VolGridResult};
pub use types::{CarryMetric, CurrencyPair, DeltaPoint, Tenor};
