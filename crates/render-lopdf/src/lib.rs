//! PDF assembly.
//!
//! Turns an ordered artifact list plus a selection predicate into a finished
//! PDF byte stream. Drawing goes through content-stream operations over the
//! base-14 Helvetica fonts, so no font embedding is involved.

mod assemble;
mod error;
mod page;

pub use assemble::{assemble, ExportOutcome};
pub use error::ExportError;
