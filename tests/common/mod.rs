pub mod fixtures;

use lopdf::Document as LopdfDocument;
use serde_json::Value;
use sheaf::{PipelineError, Session};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around an exported PDF with helper methods.
pub struct ExportedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl ExportedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// All text content, pages concatenated in order.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for page_num in 1..=self.page_count() {
            if let Ok(page_text) = self.doc.extract_text(&[page_num as u32]) {
                text.push_str(&page_text);
                text.push('\n');
            }
        }
        text
    }
}

/// Load a session from a JSON document value.
pub fn load_session(doc: &Value) -> Result<Session, PipelineError> {
    let mut session = Session::new();
    session.load_value(doc)?;
    Ok(session)
}
