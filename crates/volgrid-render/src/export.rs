//! The per-currency export pipeline.
//!
//! Ties the core together for both flows: build the logical tables,
//! render them, stack the volatility triplet, and write the final PNGs.
//! Rendering happens entirely in memory, so no intermediate files exist
//! to clean up; the only writes are the finished outputs.

use std::path::{Path, PathBuf};

use tracing::info;

use volgrid_core::compose::{stack_vertical, DEFAULT_SPACING};
use volgrid_core::dataset::Dataset;
use volgrid_core::error::VolGridResult;
use volgrid_core::render::TableRenderer;
use volgrid_core::tables::{GridStyle, TableBuilder};
use volgrid_core::types::CurrencyPair;

use crate::png;
use crate::renderer::GridRenderer;

/// Exports per-currency images into an output directory.
pub struct Exporter<R: TableRenderer = GridRenderer> {
    renderer: R,
    style: GridStyle,
    out_dir: PathBuf,
    spacing: u32,
}

impl Exporter<GridRenderer> {
    /// Creates an exporter with the built-in renderer and default styling.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_renderer(GridRenderer::new(), out_dir)
    }
}

impl<R: TableRenderer> Exporter<R> {
    /// Creates an exporter around a specific renderer.
    #[must_use]
    pub fn with_renderer(renderer: R, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            style: GridStyle::default(),
            out_dir: out_dir.into(),
            spacing: DEFAULT_SPACING,
        }
    }

    /// Overrides the styling configuration.
    #[must_use]
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Overrides the stacking spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Returns the output directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the output path of a pair's volatility grid image.
    #[must_use]
    pub fn grid_path(&self, pair: &CurrencyPair) -> PathBuf {
        self.out_dir.join(format!("{}.png", pair.file_stem()))
    }

    /// Returns the output path of a pair's carry table image.
    #[must_use]
    pub fn carry_path(&self, pair: &CurrencyPair) -> PathBuf {
        self.out_dir.join(format!("{}_carry.png", pair.file_stem()))
    }

    /// Renders and writes the composite volatility grid for one pair.
    ///
    /// # Errors
    ///
    /// Propagates table construction, render, and write failures.
    pub fn export_grid(&self, dataset: &Dataset, pair: &CurrencyPair) -> VolGridResult<PathBuf> {
        let builder = TableBuilder::new(dataset, self.style.clone());
        let triplet = builder.volatility_triplet(pair)?;

        let mut images = Vec::with_capacity(3);
        for table in triplet.tables() {
            images.push(self.renderer.render(table)?);
        }
        let composite = stack_vertical(&images, self.spacing)?;

        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.grid_path(pair);
        png::write_png(&composite, &path)?;
        info!(pair = %pair, path = %path.display(), "exported volatility grid");
        Ok(path)
    }

    /// Renders and writes the carry table for one pair. No compositing:
    /// the carry flow produces a single table image.
    ///
    /// # Errors
    ///
    /// Propagates table construction, render, and write failures.
    pub fn export_carry(&self, dataset: &Dataset, pair: &CurrencyPair) -> VolGridResult<PathBuf> {
        let builder = TableBuilder::new(dataset, self.style.clone());
        let table = builder.carry_table(pair)?;
        let image = self.renderer.render(&table)?;

        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.carry_path(pair);
        png::write_png(&image, &path)?;
        info!(pair = %pair, path = %path.display(), "exported carry table");
        Ok(path)
    }

    /// Runs the volatility flow for every pair, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first pair that cannot be exported.
    pub fn export_grids(
        &self,
        dataset: &Dataset,
        pairs: &[CurrencyPair],
    ) -> VolGridResult<Vec<PathBuf>> {
        pairs
            .iter()
            .map(|pair| self.export_grid(dataset, pair))
            .collect()
    }

    /// Runs the carry flow for every pair, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first pair that cannot be exported.
    pub fn export_carries(
        &self,
        dataset: &Dataset,
        pairs: &[CurrencyPair],
    ) -> VolGridResult<Vec<PathBuf>> {
        pairs
            .iter()
            .map(|pair| self.export_carry(dataset, pair))
            .collect()
    }

    /// Deletes every previously generated PNG in the output directory.
    /// Used when a new dataset replaces the old one.
    ///
    /// # Errors
    ///
    /// Returns [`volgrid_core::VolGridError::Io`] on directory or file
    /// failures other than the directory being absent.
    pub fn clear_outputs(&self) -> VolGridResult<()> {
        let entries = match std::fs::read_dir(&self.out_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "png") {
                png::remove_file(&path)?;
            }
        }
        Ok(())
    }
}
