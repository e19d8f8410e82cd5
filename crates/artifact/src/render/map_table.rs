//! Map-table sections.
//!
//! Rendered transposed: one `Metric`/`Value` row per `{name, v}` pair. The
//! wide single-row form would grow unbounded with the number of entries;
//! transposed keeps the artifact at a fixed two-column width. The same
//! presentation is used on screen and in the export.

use super::grid::{self, GridExtent};
use crate::draw::{approx_text_width, line_height, DrawList, TextStyle};
use crate::{Artifact, ArtifactKind};
use sheaf_report::MapTableSection;
use sheaf_types::{ArtifactId, Size};

const HEADER_FONT: f32 = 10.0;
const HEADER_GAP: f32 = 4.0;

pub(super) fn render(section: &MapTableSection, sheet: usize, index: usize) -> Artifact {
    let headers = vec!["Metric".to_string(), "Value".to_string()];
    let rows: Vec<Vec<String>> = section
        .rows
        .iter()
        .map(|entry| vec![entry.name.clone(), entry.value.clone()])
        .collect();

    let mut list = DrawList::new();
    let mut y = 0.0;
    if !section.header.is_empty() {
        list.text(
            0.0,
            0.0,
            approx_text_width(&section.header, HEADER_FONT),
            section.header.clone(),
            TextStyle { font_size: HEADER_FONT, bold: true, ..Default::default() },
        );
        y = line_height(HEADER_FONT) + HEADER_GAP;
    }
    let GridExtent { width, height } = grid::draw_grid(&mut list, y, &headers, &rows);
    list.size = Size::new(
        width.max(approx_text_width(&section.header, HEADER_FONT)),
        y + height,
    );

    Artifact {
        id: ArtifactId::new(sheet, index, 0),
        kind: ArtifactKind::TableImage,
        label: section.header.clone(),
        content: list,
    }
}
