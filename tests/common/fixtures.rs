use serde_json::{json, Value};

/// A full report document wrapping the given sheets.
pub fn report(sheets: Value) -> Value {
    json!({
        "report": {
            "title": "Weekly Activity",
            "created": "2024-03-01T10:30:00+00:00",
            "id": "rep-42",
            "time_filter": { "from": "2024-02-23", "to": "2024-03-01", "weekdays": ["Mon", "Fri"] },
            "sheets": sheets,
        }
    })
}

pub fn sheet(header: &str, sections: Value) -> Value {
    json!({ "header": header, "sections": sections })
}

/// A 2x2 table: columns a/b, one row-group with two rows.
pub fn table_section(group_header: &str) -> Value {
    json!({
        "type": "table",
        "header": "Entries",
        "columns": [
            { "field": "a", "title": "Task" },
            { "field": "b", "title": "Hours" },
        ],
        "data": [{
            "header": group_header,
            "rows": [
                { "a": { "v": "Coding" },  "b": { "v": "6.5", "raw": 6.5 } },
                { "a": { "v": "Review" },  "b": { "v": "1.5", "raw": 1.5 } },
            ],
        }],
    })
}

/// A pie whose values sum to 10 with one slice of 4, so the rendered labels
/// are exactly 40.0% and 60.0%.
pub fn pie_section() -> Value {
    json!({
        "type": "pie_chart",
        "header": "Distribution",
        "values": [
            { "title": "Focus", "raw": 4.0, "color": "#4CAF50" },
            { "title": "Meetings", "raw": 6.0 },
        ],
    })
}

pub fn stacked_bar_section() -> Value {
    json!({
        "type": "stacked_bar_chart",
        "header": "Per day",
        "x_label": "Day",
        "y_axis": { "label": "Hours" },
        "series": [
            { "field": "work", "title": "Work", "color": "#1f77b4" },
            { "field": "rest", "title": "Rest", "color": "#ff7f0e" },
        ],
        "data": [
            { "x": { "v": "Mon" }, "bars": { "work": { "raw": 5.0 }, "rest": { "raw": 2.0 } } },
            { "x": { "v": "Tue" }, "bars": { "work": { "raw": 6.0 } } },
        ],
    })
}

pub fn map_table_section(name: &str, value: &str) -> Value {
    json!({
        "type": "map_table",
        "header": "Totals",
        "rows": [ { "name": name, "v": value } ],
    })
}

pub fn separator_section() -> Value {
    json!({ "type": "separator" })
}

/// A table section missing its required `columns` field.
pub fn broken_table_section() -> Value {
    json!({ "type": "table", "header": "Broken", "data": [] })
}
