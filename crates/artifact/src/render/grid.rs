//! Shared rectangular-grid drawing for table and map-table artifacts.

use crate::draw::{approx_text_width, line_height, DrawList, RectElement, Stroke, TextStyle};
use sheaf_types::Color;

pub(crate) const CELL_FONT: f32 = 8.0;
pub(crate) const ROW_HEIGHT: f32 = 18.0;
const CELL_PADDING: f32 = 4.0;
const MIN_COL_WIDTH: f32 = 40.0;
const MAX_COL_WIDTH: f32 = 160.0;

pub(crate) struct GridExtent {
    pub width: f32,
    pub height: f32,
}

/// Draws a bordered grid with a shaded header row at vertical offset `y0`
/// and returns the space it occupied. Column widths follow content, clamped
/// so one long value cannot blow up the whole artifact.
pub(crate) fn draw_grid(
    list: &mut DrawList,
    y0: f32,
    headers: &[String],
    rows: &[Vec<String>],
) -> GridExtent {
    let widths: Vec<f32> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let content_max = rows
                .iter()
                .map(|row| {
                    row.get(col)
                        .map(|value| approx_text_width(value, CELL_FONT))
                        .unwrap_or(0.0)
                })
                .fold(0.0_f32, f32::max);
            (approx_text_width(header, CELL_FONT).max(content_max) + 2.0 * CELL_PADDING)
                .clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
        })
        .collect();
    let total_width: f32 = widths.iter().sum();

    draw_row(list, y0, &widths, headers, true);
    for (i, row) in rows.iter().enumerate() {
        let y = y0 + ROW_HEIGHT * (i + 1) as f32;
        draw_row(list, y, &widths, row, false);
    }

    GridExtent {
        width: total_width,
        height: ROW_HEIGHT * (rows.len() + 1) as f32,
    }
}

fn draw_row(list: &mut DrawList, y: f32, widths: &[f32], values: &[String], header: bool) {
    static EMPTY: String = String::new();
    let mut x = 0.0;
    for (col, width) in widths.iter().enumerate() {
        list.rect(
            x,
            y,
            *width,
            ROW_HEIGHT,
            RectElement {
                fill: header.then(|| Color::gray(229)),
                stroke: Some(Stroke { color: Color::gray(120), width: 0.5 }),
            },
        );
        let value = values.get(col).unwrap_or(&EMPTY);
        if !value.is_empty() {
            list.text(
                x + CELL_PADDING,
                y + (ROW_HEIGHT - line_height(CELL_FONT)) / 2.0,
                width - 2.0 * CELL_PADDING,
                value.clone(),
                TextStyle { font_size: CELL_FONT, bold: header, ..Default::default() },
            );
        }
        x += width;
    }
}
