//! One user session: a loaded report, its rendered artifacts, the render
//! cache and the selection state.
//!
//! Everything is single-threaded and synchronous. One load triggers one full
//! normalize-and-render pass; later passes reuse cached artifacts for any
//! section whose content fingerprint is unchanged, so toggling one artifact
//! never recomputes unrelated ones. Export reads the session and mutates
//! nothing.

use crate::error::PipelineError;
use crate::selection::SelectionSet;
use itertools::Itertools;
use serde_json::Value;
use sheaf_artifact::{render_section, section_fingerprint, Artifact};
use sheaf_render_lopdf::{assemble, ExportOutcome};
use sheaf_report::{normalize_document, parse_report, Report};
use sheaf_types::ArtifactId;
use std::collections::HashMap;

#[derive(Default)]
pub struct Session {
    report: Option<Report>,
    artifacts: Vec<Artifact>,
    cache: HashMap<(usize, usize), CacheEntry>,
    selection: SelectionSet,
}

/// Cached render output of one section, keyed by its position and guarded by
/// its content fingerprint.
struct CacheEntry {
    fingerprint: u64,
    artifacts: Vec<Artifact>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a report from JSON text. Replaces any current document, clears
    /// the render cache and resets every selection flag.
    pub fn load_str(&mut self, text: &str) -> Result<(), PipelineError> {
        let report = parse_report(text)?;
        self.install(report);
        Ok(())
    }

    /// Loads a report from an already-parsed JSON value.
    pub fn load_value(&mut self, value: &Value) -> Result<(), PipelineError> {
        let report = normalize_document(value)?;
        self.install(report);
        Ok(())
    }

    fn install(&mut self, report: Report) {
        self.selection.reset();
        self.cache.clear();
        self.report = Some(report);
        self.render_pass();
    }

    /// Re-derives the artifact list from the current report. Cheap for an
    /// unchanged document: every section comes out of the cache.
    pub fn rerender(&mut self) {
        self.render_pass();
    }

    fn render_pass(&mut self) {
        let Some(report) = self.report.take() else {
            self.artifacts.clear();
            return;
        };

        let mut artifacts = Vec::new();
        let mut fresh = 0usize;
        for (sheet_index, sheet) in report.sheets.iter().enumerate() {
            for (section_index, section) in sheet.sections.iter().enumerate() {
                let key = (sheet_index, section_index);
                let fingerprint = section_fingerprint(section);
                let stale = self
                    .cache
                    .get(&key)
                    .map(|entry| entry.fingerprint != fingerprint)
                    .unwrap_or(true);
                if stale {
                    fresh += 1;
                    let rendered = render_section(section, sheet_index, section_index);
                    self.cache.insert(key, CacheEntry { fingerprint, artifacts: rendered });
                }
                if let Some(entry) = self.cache.get(&key) {
                    artifacts.extend(entry.artifacts.iter().cloned());
                }
            }
        }
        log::debug!(
            "render pass: {} artifact(s), {} section(s) re-rendered",
            artifacts.len(),
            fresh
        );

        self.artifacts = artifacts;
        self.report = Some(report);
    }

    /// All artifacts of the current document, in document order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn toggle(&mut self, id: ArtifactId) {
        self.selection.toggle(id);
    }

    pub fn set_selected(&mut self, id: ArtifactId, included: bool) {
        self.selection.set(id, included);
    }

    pub fn is_selected(&self, id: ArtifactId) -> bool {
        self.selection.is_selected(id)
    }

    /// Marks every exportable artifact of the current document as included.
    pub fn select_all(&mut self) {
        let ids: Vec<ArtifactId> = self
            .artifacts
            .iter()
            .filter(|artifact| artifact.kind.is_exportable())
            .map(|artifact| artifact.id)
            .collect();
        for id in ids {
            self.selection.set(id, true);
        }
    }

    /// Assembles the selected artifacts into a PDF. Does not mutate the
    /// report, the artifacts or the selection.
    pub fn export(&self) -> Result<ExportOutcome, PipelineError> {
        log::debug!(
            "exporting selection [{}]",
            self.selection.selected_ids().sorted().join(", ")
        );
        let outcome = assemble(&self.artifacts, |id| self.selection.is_selected(id))?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({ "report": { "title": "R", "sheets": [{ "header": "S", "sections": [
            { "type": "pie_chart", "header": "P",
              "values": [ { "title": "a", "raw": 4.0 }, { "title": "b", "raw": 6.0 } ] },
            { "type": "separator" },
        ] }] } })
    }

    #[test]
    fn load_resets_selection_and_renders() {
        let mut session = Session::new();
        session.load_value(&sample()).unwrap();
        assert_eq!(session.artifacts().len(), 2);

        let pie = ArtifactId::new(0, 0, 0);
        session.toggle(pie);
        assert!(session.is_selected(pie));

        session.load_value(&sample()).unwrap();
        assert!(!session.is_selected(pie), "new load must clear selection");
    }

    #[test]
    fn rerender_is_stable_and_served_from_cache() {
        let mut session = Session::new();
        session.load_value(&sample()).unwrap();
        let before = session.artifacts().to_vec();

        let pie = ArtifactId::new(0, 0, 0);
        session.toggle(pie);
        session.rerender();

        assert_eq!(session.artifacts(), &before[..]);
        assert!(session.is_selected(pie), "selection survives re-render");
    }

    #[test]
    fn export_does_not_consume_selection() {
        let mut session = Session::new();
        session.load_value(&sample()).unwrap();
        let pie = ArtifactId::new(0, 0, 0);
        session.toggle(pie);

        let first = session.export().unwrap();
        let second = session.export().unwrap();
        assert!(!first.is_empty());
        assert!(!second.is_empty());
        assert!(session.is_selected(pie));
    }

    #[test]
    fn empty_session_exports_empty() {
        let session = Session::new();
        assert!(session.export().unwrap().is_empty());
    }
}
