//! The unified error type for all pipeline operations.

use sheaf_report::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Export failed: {0}")]
    Export(#[from] sheaf_render_lopdf::ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Lets callers hand raw JSON straight to the session with `?`.
impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::Parse(ParseError::JsonParse(e))
    }
}
