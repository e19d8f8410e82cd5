//! The normalized document model consumed by the section renderers.
//!
//! Everything here is immutable for the lifetime of a session. All section
//! types implement `Hash` (floats hashed by bit pattern) so a render pass can
//! fingerprint a section for memoization.

use chrono::{DateTime, FixedOffset};
use sheaf_types::Color;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub created: Option<DateTime<FixedOffset>>,
    pub id: Option<String>,
    pub time_filter: Option<TimeFilter>,
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub weekdays: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub header: String,
    pub sections: Vec<Section>,
}

/// One typed visual unit. `Invalid` and `Unsupported` are first-class
/// variants so a degraded section still occupies its identity slot.
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum Section {
    Table(TableSection),
    MapTable(MapTableSection),
    PieChart(PieChartSection),
    StackedBar(StackedBarSection),
    Separator,
    Invalid { reason: String },
    Unsupported { kind: String },
}

impl Section {
    /// Returns a string identifier for the section type, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Table(_) => "table",
            Section::MapTable(_) => "map_table",
            Section::PieChart(_) => "pie_chart",
            Section::StackedBar(_) => "stacked_bar_chart",
            Section::Separator => "separator",
            Section::Invalid { .. } => "invalid",
            Section::Unsupported { .. } => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Hash)]
pub struct TableSection {
    pub header: String,
    /// Column titles are unique within the table after normalization.
    pub columns: Vec<Column>,
    pub groups: Vec<TableGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub field: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Hash)]
pub struct TableGroup {
    pub header: String,
    pub rows: Vec<Row>,
}

/// A mapping from column field to cell. Stored ordered so iteration,
/// equality and hashing are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Hash)]
pub struct Row {
    pub cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn get(&self, field: &str) -> Option<&Cell> {
        self.cells.get(field)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// Canonical display string, already flattened from the raw `v` value.
    pub v: String,
    pub raw: Option<f64>,
    pub color: Option<Color>,
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v.hash(state);
        self.raw.map(f64::to_bits).hash(state);
        self.color.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapTableSection {
    pub header: String,
    pub rows: Vec<MapEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Hash)]
pub struct PieChartSection {
    pub header: String,
    pub values: Vec<PieValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieValue {
    pub title: String,
    pub raw: Option<f64>,
    pub color: Option<Color>,
}

impl Hash for PieValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.raw.map(f64::to_bits).hash(state);
        self.color.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Hash)]
pub struct StackedBarSection {
    pub header: String,
    pub x_label: Option<String>,
    pub y_label: String,
    /// Declaration order defines stacking order, bottom segment first.
    pub series: Vec<Series>,
    /// Categories in input order; never re-sorted.
    pub data: Vec<BarCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Series {
    pub field: String,
    pub title: String,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Hash)]
pub struct BarCategory {
    pub x: String,
    pub bars: BTreeMap<String, BarValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarValue {
    pub raw: Option<f64>,
}

impl Hash for BarValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.map(f64::to_bits).hash(state);
    }
}
