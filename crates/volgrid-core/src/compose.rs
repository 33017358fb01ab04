//! Image compositing.
//!
//! Stacks the rendered tables for one currency pair into a single canvas.
//! The gap policy places one spacing band above the first image and one
//! after every image including the last, so the canvas height is
//! `sum(heights) + spacing * (count + 1)`.

use crate::error::{VolGridError, VolGridResult};
use crate::render::RenderedImage;

/// Default vertical spacing between stacked tables, in pixels.
pub const DEFAULT_SPACING: u32 = 30;

/// The canvas fill for areas not covered by an input image.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Stacks images vertically in input order with fixed spacing.
///
/// Canvas width is the maximum input width; every image is left-aligned at
/// x = 0; unused area is filled white.
///
/// # Errors
///
/// Returns [`VolGridError::EmptySlice`] when `images` is empty.
pub fn stack_vertical(images: &[RenderedImage], spacing: u32) -> VolGridResult<RenderedImage> {
    if images.is_empty() {
        return Err(VolGridError::empty_slice("no images to compose"));
    }

    let width = images.iter().map(RenderedImage::width).max().unwrap_or(0);
    let height: u32 = images.iter().map(RenderedImage::height).sum::<u32>()
        + spacing * (images.len() as u32 + 1);

    let mut canvas = RenderedImage::filled(width, height, BACKGROUND);
    let mut y = spacing;
    for image in images {
        canvas.blit(image, 0, y);
        y += image.height() + spacing;
    }
    Ok(canvas)
}
