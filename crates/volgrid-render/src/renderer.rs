//! Deterministic table rasterizer.
//!
//! Draws a [`LogicalTable`] as a caption, a header row, a row-label
//! column, and a grid of value cells. Formatting rules become cell
//! backgrounds: color scales fill the whole cell, diverging bars grow from
//! the cell's midline. The output depends only on the table contents.

use volgrid_core::error::{VolGridError, VolGridResult};
use volgrid_core::render::{RenderedImage, TableRenderer};
use volgrid_core::tables::{BarStyle, CellStyle, LogicalTable, RuleScope};

use crate::font;

const PAD: u32 = 10;
const CAPTION_SCALE: u32 = 2;
const CAPTION_MARGIN: u32 = 10;
const TEXT_SCALE: u32 = 1;
const CELL_WIDTH: u32 = 60;
const CELL_HEIGHT: u32 = 18;
const ROW_LABEL_WIDTH: u32 = 64;
const BAR_MARGIN: u32 = 3;

const TEXT_COLOR: [u8; 3] = [0, 0, 0];
const RULE_COLOR: [u8; 3] = [128, 128, 128];
const BACKGROUND: [u8; 3] = [255, 255, 255];

/// The built-in table renderer.
///
/// Stateless; construct once and reuse across tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer;

impl GridRenderer {
    /// Creates a renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TableRenderer for GridRenderer {
    fn render(&self, table: &LogicalTable) -> VolGridResult<RenderedImage> {
        if table.n_rows() == 0 || table.n_cols() == 0 {
            return Err(VolGridError::render("cannot render an empty table"));
        }

        let n_rows = table.n_rows() as u32;
        let n_cols = table.n_cols() as u32;

        let caption_height = font::text_height(CAPTION_SCALE) + CAPTION_MARGIN;
        let grid_top = PAD + caption_height + CELL_HEIGHT;
        let width = PAD + ROW_LABEL_WIDTH + n_cols * CELL_WIDTH + PAD;
        let height = grid_top + n_rows * CELL_HEIGHT + PAD;

        let mut image = RenderedImage::filled(width, height, BACKGROUND);

        // Caption, centered.
        let caption_width = font::text_width(table.caption(), CAPTION_SCALE);
        draw_text_clipped(
            &mut image,
            (width.saturating_sub(caption_width)) / 2,
            PAD,
            table.caption(),
            CAPTION_SCALE,
        );

        // Column header row with a rule underneath.
        let header_y = PAD + caption_height;
        for (col, label) in table.col_labels().iter().enumerate() {
            let x = PAD + ROW_LABEL_WIDTH + col as u32 * CELL_WIDTH;
            draw_centered(&mut image, x, header_y, CELL_WIDTH, CELL_HEIGHT, label);
        }
        fill_rect(
            &mut image,
            PAD,
            grid_top - 1,
            ROW_LABEL_WIDTH + n_cols * CELL_WIDTH,
            1,
            RULE_COLOR,
        );

        // Row labels and value cells.
        for row in 0..table.n_rows() {
            let y = grid_top + row as u32 * CELL_HEIGHT;
            draw_centered(
                &mut image,
                PAD,
                y,
                ROW_LABEL_WIDTH,
                CELL_HEIGHT,
                &table.row_labels()[row],
            );

            let rule = table.rule_for_row(row);
            let bar_extent = rule.and_then(|rule| match &rule.style {
                CellStyle::Bar(bar) => Some(max_deviation(table, &rule.scope, bar)),
                CellStyle::Scale(_) => None,
            });

            for col in 0..table.n_cols() {
                let x = PAD + ROW_LABEL_WIDTH + col as u32 * CELL_WIDTH;
                let value = table.value(row, col);

                match rule.map(|r| &r.style) {
                    Some(CellStyle::Scale(scale)) => {
                        fill_rect(
                            &mut image,
                            x,
                            y,
                            CELL_WIDTH,
                            CELL_HEIGHT,
                            scale.color_at(value).over_white(),
                        );
                    }
                    Some(CellStyle::Bar(bar)) => {
                        draw_bar(&mut image, x, y, bar, value, bar_extent.unwrap_or(0.0));
                    }
                    None => {}
                }

                draw_centered(
                    &mut image,
                    x,
                    y,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                    &table.format_value(row, col),
                );
            }
        }

        Ok(image)
    }
}

/// Largest absolute deviation from the bar's alignment point across the
/// rule's scope; bar lengths normalize against it.
fn max_deviation(table: &LogicalTable, scope: &RuleScope, bar: &BarStyle) -> f64 {
    table
        .values_in_scope(scope)
        .iter()
        .map(|v| (v - bar.align).abs())
        .fold(0.0, f64::max)
}

fn draw_bar(image: &mut RenderedImage, x: u32, y: u32, bar: &BarStyle, value: f64, extent: f64) {
    if extent <= 0.0 {
        return;
    }
    let half = f64::from(CELL_WIDTH / 2 - BAR_MARGIN);
    let frac = ((value - bar.align) / extent).clamp(-1.0, 1.0);
    let length = (frac.abs() * half).round() as u32;
    if length == 0 {
        return;
    }

    let mid = x + CELL_WIDTH / 2;
    let (bar_x, color) = if frac < 0.0 {
        (mid - length, bar.negative)
    } else {
        (mid, bar.positive)
    };
    fill_rect(
        image,
        bar_x,
        y + BAR_MARGIN,
        length,
        CELL_HEIGHT - 2 * BAR_MARGIN,
        color.over_white(),
    );
}

fn fill_rect(image: &mut RenderedImage, x: u32, y: u32, w: u32, h: u32, rgb: [u8; 3]) {
    for dy in 0..h {
        for dx in 0..w {
            image.put_pixel(x + dx, y + dy, rgb);
        }
    }
}

fn draw_centered(image: &mut RenderedImage, x: u32, y: u32, w: u32, h: u32, text: &str) {
    let text_w = font::text_width(text, TEXT_SCALE);
    let text_h = font::text_height(TEXT_SCALE);
    let tx = x + w.saturating_sub(text_w) / 2;
    let ty = y + h.saturating_sub(text_h) / 2;
    draw_text_clipped(image, tx, ty, text, TEXT_SCALE);
}

fn draw_text_clipped(image: &mut RenderedImage, x: u32, y: u32, text: &str, scale: u32) {
    font::draw_text(image, x, y, text, scale, TEXT_COLOR);
}
