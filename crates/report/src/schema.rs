//! The raw report schema as it arrives from Serde. This is the **input**
//! representation: almost everything is optional, `v` values may be strings
//! or numbers, and sections are kept as opaque `Value`s so that one
//! malformed section cannot abort deserialization of its siblings.

use serde::Deserialize;
use serde_json::Value;
use sheaf_types::Color;
use std::collections::BTreeMap;

#[derive(Deserialize, Debug, Clone)]
pub struct RawReport {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub time_filter: Option<RawTimeFilter>,
    #[serde(default)]
    pub sheets: Vec<RawSheet>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawTimeFilter {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub weekdays: Vec<Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawSheet {
    #[serde(default)]
    pub header: Option<String>,
    /// Kept as raw values; each section is deserialized individually by the
    /// normalizer so a bad one degrades to a placeholder instead of failing
    /// the whole sheet.
    #[serde(default)]
    pub sections: Vec<Value>,
}

// --- Section payloads, one per `type` tag ---

#[derive(Deserialize, Debug, Clone)]
pub struct RawTable {
    #[serde(default)]
    pub header: Option<String>,
    pub columns: Option<Vec<RawColumn>>,
    pub data: Option<Vec<RawTableGroup>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawColumn {
    pub field: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawTableGroup {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, RawCell>>,
}

/// A wrapped cell: `v` is the canonical display value, `raw`/`color` are
/// optional chart-only hints.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawCell {
    #[serde(default)]
    pub v: Option<Value>,
    #[serde(default)]
    pub raw: Option<f64>,
    #[serde(default)]
    pub color: Option<Color>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawMapTable {
    #[serde(default)]
    pub header: Option<String>,
    pub rows: Option<Vec<RawMapEntry>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawMapEntry {
    pub name: String,
    #[serde(default)]
    pub v: Option<Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawPieChart {
    #[serde(default)]
    pub header: Option<String>,
    pub values: Option<Vec<RawPieValue>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawPieValue {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub raw: Option<f64>,
    #[serde(default)]
    pub color: Option<Color>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawStackedBar {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_axis: Option<RawAxis>,
    pub series: Option<Vec<RawSeries>>,
    pub data: Option<Vec<RawBarCategory>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawAxis {
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawSeries {
    pub field: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawBarCategory {
    #[serde(default)]
    pub x: Option<RawXValue>,
    #[serde(default)]
    pub bars: BTreeMap<String, RawBarValue>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawXValue {
    #[serde(default)]
    pub v: Option<Value>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawBarValue {
    #[serde(default)]
    pub raw: Option<f64>,
}
