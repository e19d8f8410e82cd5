//! Sheaf turns a semi-structured report document (sheets of typed sections:
//! tables, map-tables, pie charts, stacked-bar charts, separators) into
//! rendered artifacts, and assembles any user-selected subset of them, in
//! document order, into a single paginated PDF.
//!
//! The [`Session`] type is the front door: load a document, inspect the
//! artifacts, toggle inclusion flags, export.

pub mod error;
pub mod selection;
pub mod session;

pub use error::PipelineError;
pub use selection::SelectionSet;
pub use session::Session;

pub use sheaf_artifact::{Artifact, ArtifactKind};
pub use sheaf_render_lopdf::ExportOutcome;
pub use sheaf_report::{ParseError, Report, Section};
pub use sheaf_types::ArtifactId;
