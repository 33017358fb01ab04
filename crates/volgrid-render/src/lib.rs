//! # Volgrid Render
//!
//! The render/export side of Volgrid: turns a
//! [`LogicalTable`](volgrid_core::tables::LogicalTable) into pixels and
//! pixels into PNG files.
//!
//! - [`GridRenderer`]: deterministic table rasterizer implementing the
//!   core's [`TableRenderer`](volgrid_core::render::TableRenderer) seam
//! - [`png`]: PNG encode/decode and file I/O
//! - [`Exporter`]: the per-currency pipeline (build, render, compose,
//!   write) for the volatility and carry flows

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod export;
mod font;
pub mod png;
pub mod renderer;

pub use export::Exporter;
pub use renderer::GridRenderer;
