mod common;

use common::fixtures::*;
use common::{load_session, ExportedPdf, TestResult};
use serde_json::json;
use sheaf::{ArtifactId, ArtifactKind, ExportOutcome, PipelineError, Session};

#[test]
fn end_to_end_table_and_pie() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = report(json!([sheet("Week 9", json!([table_section("By task"), pie_section()]))]));
    let mut session = load_session(&doc)?;

    let kinds: Vec<ArtifactKind> = session.artifacts().iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![ArtifactKind::TableImage, ArtifactKind::ChartImage]);
    assert_eq!(session.artifacts()[0].id, ArtifactId::new(0, 0, 0));
    assert_eq!(session.artifacts()[1].id, ArtifactId::new(0, 1, 0));

    // Selecting only the pie exports a one-artifact document.
    session.toggle(ArtifactId::new(0, 1, 0));
    let ExportOutcome::Document(bytes) = session.export()? else {
        panic!("expected a document");
    };
    let pdf = ExportedPdf::from_bytes(bytes)?;
    assert_eq!(pdf.page_count(), 1);
    let text = pdf.text();
    assert!(text.contains("40.0%"), "pie percentages missing: {}", text);
    assert!(text.contains("60.0%"));
    assert!(!text.contains("Coding"), "unselected table leaked into export");

    // Selecting neither is an explicit empty outcome.
    session.toggle(ArtifactId::new(0, 1, 0));
    assert!(session.export()?.is_empty());
    Ok(())
}

#[test]
fn malformed_top_level_input_is_fatal() {
    let mut session = Session::new();
    assert!(matches!(
        session.load_value(&json!({})),
        Err(PipelineError::Parse(_))
    ));
    assert!(matches!(
        session.load_value(&json!([1, 2])),
        Err(PipelineError::Parse(_))
    ));
    assert!(session.load_str("not json at all").is_err());
    assert!(session.artifacts().is_empty());
}

#[test]
fn invalid_section_is_isolated_from_siblings() -> TestResult {
    let doc = report(json!([sheet(
        "Week 9",
        json!([broken_table_section(), pie_section(), separator_section()])
    )]));
    let session = load_session(&doc)?;

    let artifacts = session.artifacts();
    assert_eq!(artifacts.len(), 3);
    assert_eq!(artifacts[0].kind, ArtifactKind::Placeholder);
    assert_eq!(artifacts[0].id, ArtifactId::new(0, 0, 0));
    assert_eq!(artifacts[1].kind, ArtifactKind::ChartImage);
    assert_eq!(artifacts[2].kind, ArtifactKind::SeparatorMarker);
    Ok(())
}

#[test]
fn placeholder_keeps_slot_but_never_exports() -> TestResult {
    let doc = report(json!([sheet(
        "Week 9",
        json!([broken_table_section(), map_table_section("Total", "8h")])
    )]));
    let mut session = load_session(&doc)?;
    session.select_all();
    session.set_selected(ArtifactId::new(0, 0, 0), true);

    let ExportOutcome::Document(bytes) = session.export()? else {
        panic!("expected a document");
    };
    let text = ExportedPdf::from_bytes(bytes)?.text();
    assert!(text.contains("Total"));
    assert!(!text.contains("Broken"), "placeholder content exported: {}", text);
    Ok(())
}

#[test]
fn selection_survives_rerender_of_unchanged_document() -> TestResult {
    let doc = report(json!([sheet(
        "Week 9",
        json!([table_section("By task"), pie_section(), stacked_bar_section()])
    )]));
    let mut session = load_session(&doc)?;

    let pie = ArtifactId::new(0, 1, 0);
    let bars = ArtifactId::new(0, 2, 0);
    session.toggle(pie);
    session.toggle(bars);
    session.toggle(bars); // off again

    let before = session.artifacts().to_vec();
    session.rerender();
    session.rerender();

    assert_eq!(session.artifacts(), &before[..]);
    assert!(session.is_selected(pie));
    assert!(!session.is_selected(bars));
    Ok(())
}

#[test]
fn export_order_ignores_toggle_order() -> TestResult {
    // A(0,0) table, B(0,1) map table, C(1,0) pie; select C before B and
    // expect document order B, C anyway.
    let doc = report(json!([
        sheet("First", json!([table_section("Alpha"), map_table_section("BetaMetric", "42")])),
        sheet("Second", json!([pie_section()])),
    ]));
    let mut session = load_session(&doc)?;

    session.toggle(ArtifactId::new(1, 0, 0));
    session.toggle(ArtifactId::new(0, 1, 0));

    let ExportOutcome::Document(bytes) = session.export()? else {
        panic!("expected a document");
    };
    let text = ExportedPdf::from_bytes(bytes)?.text();
    let beta = text.find("BetaMetric").expect("map table exported");
    let pie = text.find("40.0%").expect("pie exported");
    assert!(beta < pie, "artifacts were reordered: {}", text);
    assert!(!text.contains("Alpha"), "unselected artifact exported");
    Ok(())
}

#[test]
fn duplicate_column_titles_render_deduplicated() -> TestResult {
    let doc = report(json!([sheet("S", json!([{
        "type": "table",
        "header": "",
        "columns": [
            { "field": "a", "title": "X" },
            { "field": "b", "title": "X" },
        ],
        "data": [{ "header": "G", "rows": [ { "a": { "v": "1" }, "b": { "v": "2" } } ] }],
    }]))]));
    let mut session = load_session(&doc)?;
    session.select_all();

    let ExportOutcome::Document(bytes) = session.export()? else {
        panic!("expected a document");
    };
    let text = ExportedPdf::from_bytes(bytes)?.text();
    assert!(text.contains("X_1"), "deduplicated header missing: {}", text);
    Ok(())
}

#[test]
fn report_metadata_is_normalized() -> TestResult {
    let doc = report(json!([]));
    let session = load_session(&doc)?;
    let report = session.report().expect("report loaded");
    assert_eq!(report.title, "Weekly Activity");
    assert!(report.created.is_some());
    assert_eq!(report.id.as_deref(), Some("rep-42"));
    let filter = report.time_filter.as_ref().expect("time filter");
    assert_eq!(filter.weekdays, vec!["Mon", "Fri"]);
    Ok(())
}
