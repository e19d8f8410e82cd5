//! The document assembler.
//!
//! Walks the artifact list in document order, keeps what the selection says
//! to keep, scales every artifact to the fixed content width and flows them
//! top to bottom across as many pages as needed. Assembly reads the artifact
//! list and the selection; it never mutates either.

use crate::error::ExportError;
use crate::page::{PageContext, FONT_BOLD, FONT_REGULAR};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use sheaf_artifact::Artifact;
use sheaf_types::ArtifactId;
use std::io::Cursor;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;
/// Every artifact is scaled to this width, aspect ratio preserved.
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Trailing space after each flowed block.
const BLOCK_SPACING: f32 = 14.4;

/// The result of an export request. Exporting with nothing selected is a
/// well-defined outcome, not an error, and produces no bytes at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Empty,
    Document(Vec<u8>),
}

impl ExportOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, ExportOutcome::Empty)
    }
}

/// Assembles the selected subset of `artifacts` into a PDF.
///
/// Order is the slice order (callers pass artifacts in document order);
/// nothing is reordered and nothing appears twice. Placeholder artifacts are
/// skipped even when selected.
pub fn assemble<F>(artifacts: &[Artifact], is_selected: F) -> Result<ExportOutcome, ExportError>
where
    F: Fn(ArtifactId) -> bool,
{
    let chosen: Vec<&Artifact> = artifacts
        .iter()
        .filter(|artifact| artifact.kind.is_exportable() && is_selected(artifact.id))
        .collect();
    if chosen.is_empty() {
        log::info!("export requested with no selected artifacts");
        return Ok(ExportOutcome::Empty);
    }

    let mut writer = DocumentWriter::new();
    for artifact in &chosen {
        writer.place(artifact);
    }
    let bytes = writer.finish()?;
    log::info!("exported {} artifact(s), {} bytes", chosen.len(), bytes.len());
    Ok(ExportOutcome::Document(bytes))
}

/// Builds the PDF object graph page by page.
struct DocumentWriter {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page: Option<PageContext>,
    cursor_y: f32,
}

impl DocumentWriter {
    fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let regular_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        document.objects.insert(
            resources_id,
            Object::Dictionary(dictionary! {
                "Font" => dictionary! {
                    FONT_REGULAR => regular_id,
                    FONT_BOLD => bold_id,
                },
            }),
        );

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page: None,
            cursor_y: MARGIN,
        }
    }

    fn place(&mut self, artifact: &Artifact) {
        let size = artifact.content.size;
        let scale = if size.width > 0.0 { CONTENT_WIDTH / size.width } else { 1.0 };
        let scaled_height = size.height * scale;

        if self.page.is_some() && self.cursor_y + scaled_height > PAGE_HEIGHT - MARGIN {
            self.flush_page();
        }
        if scaled_height > PAGE_HEIGHT - 2.0 * MARGIN {
            log::warn!(
                "artifact {} is taller than one page after scaling ({:.0}pt); it will be clipped",
                artifact.id,
                scaled_height
            );
        }

        let page = self.page.get_or_insert_with(|| PageContext::new(PAGE_HEIGHT));
        page.draw_list(&artifact.content, MARGIN, self.cursor_y, scale);
        log::debug!("placed artifact {} at y={:.1} (scale {:.3})", artifact.id, self.cursor_y, scale);
        self.cursor_y += scaled_height + BLOCK_SPACING;
    }

    fn flush_page(&mut self) {
        let Some(page) = self.page.take() else {
            return;
        };
        let encoded = page.finish().encode().unwrap_or_default();
        let content_id = self.document.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        self.cursor_y = MARGIN;
    }

    fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        self.flush_page();

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => self.page_ids.len() as i64,
            }),
        );

        let mut cursor = Cursor::new(Vec::new());
        self.document.save_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }
}
