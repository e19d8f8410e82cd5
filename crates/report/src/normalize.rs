//! Walks the raw document and produces the normalized model.
//!
//! Top-level shape problems (not an object, no `report` key) are fatal and
//! surface as [`ParseError`]. Everything below that is scoped: a malformed
//! section becomes `Section::Invalid`, an unknown type tag becomes
//! `Section::Unsupported`, and sibling sections are untouched.

use crate::error::ParseError;
use crate::model::*;
use crate::schema::*;
use chrono::DateTime;
use serde_json::Value;
use std::collections::HashSet;

/// Parse and normalize a report from JSON text.
pub fn parse_report(text: &str) -> Result<Report, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    normalize_document(&value)
}

/// Normalize an already-parsed JSON document.
pub fn normalize_document(value: &Value) -> Result<Report, ParseError> {
    let root = value.as_object().ok_or(ParseError::NotAnObject)?;
    let report = root.get("report").ok_or(ParseError::MissingReport)?;
    let raw: RawReport = serde_json::from_value(report.clone())?;
    Ok(normalize_report(raw))
}

fn normalize_report(raw: RawReport) -> Report {
    let created = raw.created.as_deref().and_then(|s| {
        DateTime::parse_from_rfc3339(s)
            .map_err(|e| log::debug!("unparsable 'created' timestamp '{}': {}", s, e))
            .ok()
    });

    let sheets: Vec<Sheet> = raw
        .sheets
        .into_iter()
        .enumerate()
        .map(|(i, sheet)| normalize_sheet(i, sheet))
        .collect();

    let section_count: usize = sheets.iter().map(|s| s.sections.len()).sum();
    log::info!(
        "normalized report '{}': {} sheet(s), {} section(s)",
        raw.title.as_deref().unwrap_or("Untitled Report"),
        sheets.len(),
        section_count
    );

    Report {
        title: raw.title.unwrap_or_else(|| "Untitled Report".to_string()),
        created,
        id: raw.id.as_ref().and_then(scalar_to_string),
        time_filter: raw.time_filter.map(|tf| TimeFilter {
            from: tf.from,
            to: tf.to,
            weekdays: tf.weekdays.iter().filter_map(scalar_to_string).collect(),
        }),
        sheets,
    }
}

fn normalize_sheet(index: usize, raw: RawSheet) -> Sheet {
    Sheet {
        header: raw
            .header
            .unwrap_or_else(|| format!("Sheet {}", index + 1)),
        sections: raw.sections.iter().map(normalize_section).collect(),
    }
}

fn normalize_section(value: &Value) -> Section {
    let Some(obj) = value.as_object() else {
        return Section::Invalid { reason: "section is not an object".to_string() };
    };
    let Some(kind) = obj.get("type").and_then(Value::as_str) else {
        return Section::Invalid { reason: "section has no 'type' tag".to_string() };
    };

    let section = match kind {
        "table" => normalize_table(value),
        "map_table" => normalize_map_table(value),
        "pie_chart" => normalize_pie_chart(value),
        "stacked_bar_chart" => normalize_stacked_bar(value),
        "separator" => Section::Separator,
        other => {
            log::warn!("unsupported section type '{}'", other);
            Section::Unsupported { kind: other.to_string() }
        }
    };

    if let Section::Invalid { reason } = &section {
        log::warn!("degrading {} section to placeholder: {}", kind, reason);
    }
    section
}

fn normalize_table(value: &Value) -> Section {
    let raw: RawTable = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(e) => return invalid(format!("malformed table section: {}", e)),
    };
    let Some(columns) = raw.columns else {
        return invalid("table section has no 'columns'");
    };
    let Some(data) = raw.data else {
        return invalid("table section has no 'data'");
    };

    Section::Table(TableSection {
        header: raw.header.unwrap_or_default(),
        columns: dedupe_columns(columns),
        groups: data
            .into_iter()
            .map(|group| TableGroup {
                header: group.header.unwrap_or_default(),
                rows: group
                    .rows
                    .into_iter()
                    .map(|row| Row {
                        cells: row
                            .into_iter()
                            .map(|(field, cell)| (field, normalize_cell(cell)))
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    })
}

/// Column titles must be unique within one table. Left to right, a colliding
/// title gets the `_N` suffix with the smallest positive `N` that is still
/// unused, so identical inputs always resolve identically.
fn dedupe_columns(columns: Vec<RawColumn>) -> Vec<Column> {
    let mut assigned: HashSet<String> = HashSet::with_capacity(columns.len());
    columns
        .into_iter()
        .map(|col| {
            let base = col.title.unwrap_or_else(|| col.field.clone());
            let title = if assigned.contains(&base) {
                let mut n = 1usize;
                loop {
                    let candidate = format!("{}_{}", base, n);
                    if !assigned.contains(&candidate) {
                        break candidate;
                    }
                    n += 1;
                }
            } else {
                base
            };
            assigned.insert(title.clone());
            Column { field: col.field, title }
        })
        .collect()
}

fn normalize_cell(raw: RawCell) -> Cell {
    Cell {
        v: raw.v.as_ref().map(display_string).unwrap_or_default(),
        raw: raw.raw,
        color: raw.color,
    }
}

fn normalize_map_table(value: &Value) -> Section {
    let raw: RawMapTable = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(e) => return invalid(format!("malformed map_table section: {}", e)),
    };
    let Some(rows) = raw.rows else {
        return invalid("map_table section has no 'rows'");
    };

    Section::MapTable(MapTableSection {
        header: raw.header.unwrap_or_default(),
        rows: rows
            .into_iter()
            .map(|entry| MapEntry {
                name: entry.name,
                value: entry.v.as_ref().map(display_string).unwrap_or_default(),
            })
            .collect(),
    })
}

fn normalize_pie_chart(value: &Value) -> Section {
    let raw: RawPieChart = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(e) => return invalid(format!("malformed pie_chart section: {}", e)),
    };
    let Some(values) = raw.values else {
        return invalid("pie_chart section has no 'values'");
    };

    Section::PieChart(PieChartSection {
        header: raw.header.unwrap_or_default(),
        values: values
            .into_iter()
            .map(|v| PieValue {
                title: v.title.unwrap_or_default(),
                raw: v.raw,
                color: v.color,
            })
            .collect(),
    })
}

fn normalize_stacked_bar(value: &Value) -> Section {
    let raw: RawStackedBar = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(e) => return invalid(format!("malformed stacked_bar_chart section: {}", e)),
    };
    let Some(series) = raw.series else {
        return invalid("stacked_bar_chart section has no 'series'");
    };
    let Some(data) = raw.data else {
        return invalid("stacked_bar_chart section has no 'data'");
    };

    Section::StackedBar(StackedBarSection {
        header: raw.header.unwrap_or_default(),
        x_label: raw.x_label,
        y_label: raw
            .y_axis
            .and_then(|axis| axis.label)
            .unwrap_or_else(|| "Value".to_string()),
        series: series
            .into_iter()
            .map(|s| Series {
                title: s.title.unwrap_or_else(|| s.field.clone()),
                field: s.field,
                color: s.color,
            })
            .collect(),
        data: data
            .into_iter()
            .map(|cat| BarCategory {
                x: cat
                    .x
                    .and_then(|x| x.v)
                    .as_ref()
                    .map(display_string)
                    .unwrap_or_default(),
                bars: cat
                    .bars
                    .into_iter()
                    .map(|(field, bar)| (field, BarValue { raw: bar.raw }))
                    .collect(),
            })
            .collect(),
    })
}

fn invalid(reason: impl Into<String>) -> Section {
    Section::Invalid { reason: reason.into() }
}

/// Flattens a raw scalar into the canonical display string. Strings pass
/// through; numbers and booleans render in their JSON form; null is empty.
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
