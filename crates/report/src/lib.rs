//! Report document model.
//!
//! This crate owns the **input** representation of a report (the raw, loosely
//! typed JSON schema as Serde sees it), the normalized document model the
//! renderers consume, and the normalizer that maps one onto the other while
//! isolating per-section malformation.

pub mod error;
pub mod model;
pub mod normalize;
pub mod resolve;
pub mod schema;

pub use error::ParseError;
pub use model::{
    BarCategory, BarValue, Cell, Column, MapEntry, MapTableSection, PieChartSection, PieValue,
    Report, Row, Section, Series, Sheet, StackedBarSection, TableGroup, TableSection, TimeFilter,
};
pub use normalize::{normalize_document, parse_report};
pub use resolve::MissingNumericValue;
