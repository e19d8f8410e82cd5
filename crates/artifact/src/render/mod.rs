//! Per-section renderers.
//!
//! Dispatch is an exhaustive match over the section enum; every arm is a pure
//! function from normalized section to artifacts. Degraded sections produce a
//! placeholder artifact at their identity slot so selection bookkeeping stays
//! positional even for broken input.

mod grid;
mod map_table;
mod pie;
mod stacked_bar;
mod table;

use crate::draw::{DrawList, RectElement, Stroke, TextAlign, TextStyle};
use crate::{Artifact, ArtifactKind};
use sheaf_report::Section;
use sheaf_types::{ArtifactId, Color, Size};

/// Width artifacts are ultimately scaled to; full-width markers (separators,
/// placeholders) use it as their intrinsic width so they come out 1:1.
pub(crate) const NATURAL_WIDTH: f32 = 468.0;

/// Renders one section into its artifacts.
///
/// Table sections yield one artifact per row-group; everything else yields
/// exactly one. A table with no groups yields none, which is how the original
/// documents express an intentionally empty section.
pub fn render_section(section: &Section, sheet: usize, index: usize) -> Vec<Artifact> {
    match section {
        Section::Table(table) => table::render(table, sheet, index),
        Section::MapTable(map) => vec![map_table::render(map, sheet, index)],
        Section::PieChart(chart) => vec![pie::render(chart, sheet, index)],
        Section::StackedBar(chart) => vec![stacked_bar::render(chart, sheet, index)],
        Section::Separator => vec![separator(ArtifactId::new(sheet, index, 0))],
        Section::Invalid { reason } => {
            vec![placeholder(format!("Invalid section: {}", reason), ArtifactId::new(sheet, index, 0))]
        }
        Section::Unsupported { kind } => vec![placeholder(
            format!("Unsupported section type '{}'", kind),
            ArtifactId::new(sheet, index, 0),
        )],
    }
}

fn separator(id: ArtifactId) -> Artifact {
    let mut list = DrawList::new();
    list.size = Size::new(NATURAL_WIDTH, 6.0);
    list.line(0.0, 3.0, NATURAL_WIDTH, 3.0, Color::gray(60), 1.5);
    Artifact {
        id,
        kind: ArtifactKind::SeparatorMarker,
        label: String::new(),
        content: list,
    }
}

pub(crate) fn placeholder(message: String, id: ArtifactId) -> Artifact {
    let mut list = DrawList::new();
    let height = 40.0;
    list.size = Size::new(NATURAL_WIDTH, height);
    list.rect(
        0.0,
        0.0,
        NATURAL_WIDTH,
        height,
        RectElement {
            fill: Some(Color::gray(245)),
            stroke: Some(Stroke { color: Color::gray(150), width: 0.8 }),
        },
    );
    list.text(
        8.0,
        height / 2.0 - 5.5,
        NATURAL_WIDTH - 16.0,
        message.clone(),
        TextStyle { font_size: 9.0, color: Color::gray(90), align: TextAlign::Center, ..Default::default() },
    );
    Artifact {
        id,
        kind: ArtifactKind::Placeholder,
        label: message,
        content: list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheaf_report::{MapEntry, MapTableSection};

    #[test]
    fn invalid_section_keeps_its_identity_slot() {
        let section = Section::Invalid { reason: "table section has no 'columns'".into() };
        let artifacts = render_section(&section, 2, 5);
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].id, ArtifactId::new(2, 5, 0));
        assert_eq!(artifacts[0].kind, ArtifactKind::Placeholder);
        assert!(!artifacts[0].kind.is_exportable());
    }

    #[test]
    fn unknown_type_degrades_instead_of_crashing() {
        let section = Section::Unsupported { kind: "gauge".into() };
        let artifacts = render_section(&section, 0, 0);
        assert_eq!(artifacts[0].kind, ArtifactKind::Placeholder);
        assert!(artifacts[0].label.contains("gauge"));
    }

    #[test]
    fn separator_is_a_marker_with_a_rule() {
        let artifacts = render_section(&Section::Separator, 0, 1);
        assert_eq!(artifacts[0].kind, ArtifactKind::SeparatorMarker);
        assert_eq!(artifacts[0].content.elements.len(), 1);
    }

    #[test]
    fn single_artifact_sections_use_subgroup_zero() {
        let section = Section::MapTable(MapTableSection {
            header: "Totals".into(),
            rows: vec![MapEntry { name: "Hours".into(), value: "40".into() }],
        });
        let artifacts = render_section(&section, 1, 3);
        assert_eq!(artifacts[0].id, ArtifactId::new(1, 3, 0));
    }
}
