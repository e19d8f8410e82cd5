//! Stacked bar chart sections.
//!
//! Series declaration order defines stacking order: series `k` sits on the
//! cumulative sum of series `0..k-1` at the same category. Categories keep
//! their input order.

use crate::draw::{approx_text_width, line_height, DrawList, RectElement, TextAlign, TextStyle};
use crate::palette::entry_color;
use crate::{Artifact, ArtifactKind};
use itertools::izip;
use sheaf_report::{resolve, StackedBarSection};
use sheaf_types::{ArtifactId, Color, Size};

const PLOT_WIDTH: f32 = 360.0;
const PLOT_HEIGHT: f32 = 190.0;
const MARGIN_LEFT: f32 = 46.0;
const MARGIN_RIGHT: f32 = 12.0;
const AXIS_FONT: f32 = 7.0;
const LABEL_FONT: f32 = 8.0;
const HEADER_FONT: f32 = 10.0;
const BAR_FILL: f32 = 0.64;
const LEGEND_ROW_HEIGHT: f32 = 14.0;
const SWATCH: f32 = 9.0;

/// `(bottom, height)` of every segment, per category, per series, in data
/// units. This is the cumulative-stacking invariant in one place; drawing
/// only scales it.
pub(crate) fn stack_geometry(section: &StackedBarSection) -> Vec<Vec<(f64, f64)>> {
    section
        .data
        .iter()
        .map(|category| {
            let mut bottom = 0.0;
            section
                .series
                .iter()
                .map(|series| {
                    let height = resolve::bar_height(category, &series.field);
                    let segment = (bottom, height);
                    bottom += height;
                    segment
                })
                .collect()
        })
        .collect()
}

pub(super) fn render(section: &StackedBarSection, sheet: usize, index: usize) -> Artifact {
    let geometry = stack_geometry(section);
    let max_total = geometry
        .iter()
        .filter_map(|segments| segments.last().map(|(bottom, height)| bottom + height))
        .fold(0.0_f64, f64::max);
    // All-zero data still renders an empty plot rather than failing.
    let scale_max = if max_total > 0.0 { max_total } else { 1.0 };

    let colors: Vec<Color> = section
        .series
        .iter()
        .enumerate()
        .map(|(k, series)| entry_color(series.color.as_ref(), k))
        .collect();

    let mut list = DrawList::new();
    let mut y = 0.0;
    if !section.header.is_empty() {
        list.text(0.0, 0.0, approx_text_width(&section.header, HEADER_FONT), section.header.clone(), TextStyle {
            font_size: HEADER_FONT,
            bold: true,
            ..Default::default()
        });
        y += line_height(HEADER_FONT) + 6.0;
    }

    // Y-axis label above the plot; text is never rotated.
    list.text(
        MARGIN_LEFT,
        y,
        approx_text_width(&section.y_label, LABEL_FONT),
        section.y_label.clone(),
        TextStyle { font_size: LABEL_FONT, color: Color::gray(60), ..Default::default() },
    );
    y += line_height(LABEL_FONT) + 4.0;

    let plot_top = y;
    let plot_bottom = plot_top + PLOT_HEIGHT;
    let plot_left = MARGIN_LEFT;
    let plot_right = MARGIN_LEFT + PLOT_WIDTH;

    // Axes.
    let axis_color = Color::gray(40);
    list.line(plot_left, plot_top, plot_left, plot_bottom, axis_color.clone(), 0.8);
    list.line(plot_left, plot_bottom, plot_right, plot_bottom, axis_color.clone(), 0.8);

    // Ticks at zero, half and full scale.
    for tick in [0.0, scale_max / 2.0, scale_max] {
        let ty = plot_bottom - ((tick / scale_max) as f32) * PLOT_HEIGHT;
        list.line(plot_left - 3.0, ty, plot_left, ty, axis_color.clone(), 0.8);
        let label = format_tick(tick);
        let label_w = approx_text_width(&label, AXIS_FONT);
        list.text(
            plot_left - 6.0 - label_w,
            ty - line_height(AXIS_FONT) / 2.0,
            label_w,
            label,
            TextStyle { font_size: AXIS_FONT, align: TextAlign::Right, ..Default::default() },
        );
    }

    // Bars.
    let count = section.data.len().max(1);
    let slot = PLOT_WIDTH / count as f32;
    let bar_width = slot * BAR_FILL;
    for (i, (category, segments)) in section.data.iter().zip(&geometry).enumerate() {
        let x = plot_left + i as f32 * slot + (slot - bar_width) / 2.0;
        for (series, color, (bottom, height)) in izip!(&section.series, &colors, segments) {
            if *height <= 0.0 {
                log::trace!("empty segment for series '{}' at category '{}'", series.field, category.x);
                continue;
            }
            let seg_h = ((height / scale_max) as f32) * PLOT_HEIGHT;
            let seg_y = plot_bottom - (((bottom + height) / scale_max) as f32) * PLOT_HEIGHT;
            list.rect(x, seg_y, bar_width, seg_h, RectElement {
                fill: Some(color.clone()),
                stroke: None,
            });
        }

        let label = truncate_to_width(&category.x, slot - 2.0, AXIS_FONT);
        let label_w = approx_text_width(&label, AXIS_FONT);
        list.text(
            plot_left + i as f32 * slot + (slot - label_w) / 2.0,
            plot_bottom + 3.0,
            label_w,
            label,
            TextStyle { font_size: AXIS_FONT, align: TextAlign::Center, ..Default::default() },
        );
    }
    y = plot_bottom + 3.0 + line_height(AXIS_FONT);

    if let Some(x_label) = &section.x_label {
        let label_w = approx_text_width(x_label, LABEL_FONT);
        list.text(
            plot_left + (PLOT_WIDTH - label_w) / 2.0,
            y + 2.0,
            label_w,
            x_label.clone(),
            TextStyle { font_size: LABEL_FONT, color: Color::gray(60), align: TextAlign::Center, ..Default::default() },
        );
        y += line_height(LABEL_FONT) + 2.0;
    }

    // Legend: swatch + series title, flowing left to right.
    y += 4.0;
    let mut legend_x = plot_left;
    for (series, color) in section.series.iter().zip(&colors) {
        let item_width = SWATCH + 4.0 + approx_text_width(&series.title, LABEL_FONT);
        if legend_x + item_width > plot_right && legend_x > plot_left {
            legend_x = plot_left;
            y += LEGEND_ROW_HEIGHT;
        }
        list.rect(legend_x, y + (LEGEND_ROW_HEIGHT - SWATCH) / 2.0, SWATCH, SWATCH, RectElement {
            fill: Some(color.clone()),
            stroke: None,
        });
        list.text(
            legend_x + SWATCH + 4.0,
            y + (LEGEND_ROW_HEIGHT - line_height(LABEL_FONT)) / 2.0,
            approx_text_width(&series.title, LABEL_FONT),
            series.title.clone(),
            TextStyle { font_size: LABEL_FONT, ..Default::default() },
        );
        legend_x += item_width + 14.0;
    }
    if !section.series.is_empty() {
        y += LEGEND_ROW_HEIGHT;
    }

    list.size = Size::new(MARGIN_LEFT + PLOT_WIDTH + MARGIN_RIGHT, y + 2.0);

    Artifact {
        id: ArtifactId::new(sheet, index, 0),
        kind: ArtifactKind::ChartImage,
        label: section.header.clone(),
        content: list,
    }
}

fn format_tick(value: f64) -> String {
    if value == value.trunc() {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn truncate_to_width(text: &str, max_width: f32, font_size: f32) -> String {
    if approx_text_width(text, font_size) <= max_width {
        return text.to_string();
    }
    let mut out: String = text.to_string();
    while !out.is_empty() && approx_text_width(&out, font_size) + approx_text_width("..", font_size) > max_width {
        out.pop();
    }
    out.push_str("..");
    out
}
