//! Pie chart sections.
//!
//! Wedges start at 12 o'clock and advance counter-clockwise. Percentages are
//! always recomputed from the `raw` values of this chart; input percentages
//! are never trusted.

use super::placeholder;
use crate::draw::{approx_text_width, line_height, DrawList, TextAlign, TextStyle, WedgeElement};
use crate::palette::entry_color;
use crate::{Artifact, ArtifactKind};
use sheaf_report::{resolve, PieChartSection, PieValue};
use sheaf_types::{ArtifactId, Size};

const RADIUS: f32 = 90.0;
/// Title labels sit on this ring, percentage labels inside the wedge.
const LABEL_RING: f32 = 1.18;
const PCT_RING: f32 = 0.62;
const LABEL_FONT: f32 = 8.0;
const HEADER_FONT: f32 = 10.0;
const SIDE_MARGIN: f32 = 104.0;
const V_MARGIN: f32 = 22.0;

/// Each slice's share of the chart total, in input order. `None` when the
/// chart has no positive weight to distribute.
pub(crate) fn slice_fractions(values: &[PieValue]) -> Option<Vec<f64>> {
    let raws: Vec<f64> = values
        .iter()
        .map(|value| resolve::pie_raw(value).unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = raws.iter().sum();
    if total > 0.0 {
        Some(raws.iter().map(|raw| raw / total).collect())
    } else {
        None
    }
}

pub(crate) fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub(super) fn render(section: &PieChartSection, sheet: usize, index: usize) -> Artifact {
    let id = ArtifactId::new(sheet, index, 0);
    let Some(fractions) = slice_fractions(&section.values) else {
        log::warn!("pie chart {} has no positive values, degrading to placeholder", id);
        return placeholder("Pie chart has no positive values".to_string(), id);
    };

    let mut list = DrawList::new();
    let mut y = 0.0;
    if !section.header.is_empty() {
        list.text(0.0, 0.0, approx_text_width(&section.header, HEADER_FONT), section.header.clone(), TextStyle {
            font_size: HEADER_FONT,
            bold: true,
            ..Default::default()
        });
        y = line_height(HEADER_FONT) + 6.0;
    }

    let reach = RADIUS * LABEL_RING;
    let width = 2.0 * (reach + SIDE_MARGIN);
    let cx = width / 2.0;
    let cy = y + V_MARGIN + reach;

    // Wedges first, labels on top.
    let mut start = 90.0_f32;
    for (i, (value, fraction)) in section.values.iter().zip(&fractions).enumerate() {
        let sweep = (*fraction as f32) * 360.0;
        if sweep <= 0.0 {
            log::debug!("skipping zero-weight pie slice '{}'", value.title);
            continue;
        }
        list.wedge(cx, cy, WedgeElement {
            radius: RADIUS,
            start_angle: start,
            sweep,
            fill: entry_color(value.color.as_ref(), i),
        });
        start += sweep;
    }

    let mut start = 90.0_f32;
    for (i, (value, fraction)) in section.values.iter().zip(&fractions).enumerate() {
        let sweep = (*fraction as f32) * 360.0;
        if sweep <= 0.0 {
            continue;
        }
        let mid = (start + sweep / 2.0).to_radians();
        let fill = entry_color(value.color.as_ref(), i);

        let pct = format_percent(*fraction);
        let pct_w = approx_text_width(&pct, LABEL_FONT);
        let px = cx + RADIUS * PCT_RING * mid.cos();
        let py = cy - RADIUS * PCT_RING * mid.sin();
        list.text(px - pct_w / 2.0, py - line_height(LABEL_FONT) / 2.0, pct_w, pct, TextStyle {
            font_size: LABEL_FONT,
            color: fill.contrast_text(),
            align: TextAlign::Center,
            ..Default::default()
        });

        if !value.title.is_empty() {
            let lx = cx + reach * mid.cos();
            let ly = cy - reach * mid.sin() - line_height(LABEL_FONT) / 2.0;
            let label_w = approx_text_width(&value.title, LABEL_FONT);
            // Anchor away from the pie so labels grow outward.
            let (x, align) = if mid.cos() > 0.15 {
                (lx, TextAlign::Left)
            } else if mid.cos() < -0.15 {
                (lx - label_w, TextAlign::Right)
            } else {
                (lx - label_w / 2.0, TextAlign::Center)
            };
            list.text(x, ly, label_w, value.title.clone(), TextStyle {
                font_size: LABEL_FONT,
                ..Default::default()
            });
        }
        start += sweep;
    }

    list.size = Size::new(width, cy + reach + V_MARGIN);

    Artifact {
        id,
        kind: ArtifactKind::ChartImage,
        label: section.header.clone(),
        content: list,
    }
}
