use thiserror::Error;

/// Fatal, document-level failures. Anything section-scoped is handled by the
/// normalizer itself and never surfaces as an error (see `Section::Invalid`).
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("input document is not a JSON object")]
    NotAnObject,

    #[error("input document has no 'report' key")]
    MissingReport,
}
