//! Table sections: one grid artifact per row-group.

use super::grid::{self, GridExtent};
use crate::draw::{approx_text_width, line_height, DrawList, TextStyle};
use crate::{Artifact, ArtifactKind};
use sheaf_report::{resolve, TableSection};
use sheaf_types::{ArtifactId, Size};

const GROUP_HEADER_FONT: f32 = 10.0;
const GROUP_HEADER_GAP: f32 = 4.0;

pub(super) fn render(section: &TableSection, sheet: usize, index: usize) -> Vec<Artifact> {
    let headers: Vec<String> = section.columns.iter().map(|c| c.title.clone()).collect();

    section
        .groups
        .iter()
        .enumerate()
        .map(|(subgroup, group)| {
            let label = if group.header.is_empty() {
                section.header.clone()
            } else {
                group.header.clone()
            };

            let rows: Vec<Vec<String>> = group
                .rows
                .iter()
                .map(|row| {
                    section
                        .columns
                        .iter()
                        .map(|column| resolve::display(row, column).to_string())
                        .collect()
                })
                .collect();

            let mut list = DrawList::new();
            let mut y = 0.0;
            if !label.is_empty() {
                list.text(0.0, 0.0, approx_text_width(&label, GROUP_HEADER_FONT), label.clone(), TextStyle {
                    font_size: GROUP_HEADER_FONT,
                    bold: true,
                    ..Default::default()
                });
                y = line_height(GROUP_HEADER_FONT) + GROUP_HEADER_GAP;
            }
            let GridExtent { width, height } = grid::draw_grid(&mut list, y, &headers, &rows);
            list.size = Size::new(width.max(approx_text_width(&label, GROUP_HEADER_FONT)), y + height);

            log::debug!(
                "rendered table group {}:{}:{} ({} rows x {} columns)",
                sheet,
                index,
                subgroup,
                rows.len(),
                headers.len()
            );

            Artifact {
                id: ArtifactId::new(sheet, index, subgroup),
                kind: ArtifactKind::TableImage,
                label,
                content: list,
            }
        })
        .collect()
}
