//! Cell/value resolution.
//!
//! Display lookups never fail: a missing cell is an empty string. Numeric
//! lookups for charts return [`MissingNumericValue`]; chart renderers absorb
//! that as `0.0` so a chart with gaps still renders whole.

use crate::model::{BarCategory, Cell, Column, PieValue, Row};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cell has no raw numeric value")]
pub struct MissingNumericValue;

/// The display value for one grid cell: `row[column.field].v`, or the empty
/// string when the row has no cell for that field.
pub fn display<'a>(row: &'a Row, column: &Column) -> &'a str {
    row.get(&column.field).map(|cell| cell.v.as_str()).unwrap_or("")
}

/// The numeric value a chart needs from a wrapped cell.
pub fn numeric(cell: &Cell) -> Result<f64, MissingNumericValue> {
    cell.raw.ok_or(MissingNumericValue)
}

/// The wedge weight of one pie slice.
pub fn pie_raw(value: &PieValue) -> Result<f64, MissingNumericValue> {
    value.raw.ok_or(MissingNumericValue)
}

/// The height of one stacked-bar segment. A category with no entry for the
/// series field contributes zero, it is not an error.
pub fn bar_height(category: &BarCategory, field: &str) -> f64 {
    category.bars.get(field).and_then(|bar| bar.raw).unwrap_or(0.0)
}
