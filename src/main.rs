use sheaf::{ArtifactId, ArtifactKind, ExportOutcome, PipelineError, Session};
use std::env;
use std::fs;
use std::process;

/// A simple CLI to render a report document and export selected artifacts
/// as a PDF.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Render a JSON report and export selected artifacts to PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/report.json> <path/to/output.pdf> [--all | SELECTION ...]",
            args[0]
        );
        eprintln!();
        eprintln!("Each SELECTION is 'sheet:section' or 'sheet:section:subgroup'");
        eprintln!("(zero-based), e.g. 0:1 or 0:2:1. With no selection the tool");
        eprintln!("only lists the artifacts the document renders to.");
        process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    let text = fs::read_to_string(input_path)?;
    let mut session = Session::new();
    session.load_str(&text)?;

    if let Some(report) = session.report() {
        println!("{}", report.title);
    }
    for artifact in session.artifacts() {
        println!("  [{}] {:<10} {}", artifact.id, kind_name(artifact.kind), artifact.label);
    }

    for selector in &args[3..] {
        if selector == "--all" {
            session.select_all();
            continue;
        }
        match selector.parse::<ArtifactId>() {
            Ok(id) => session.toggle(id),
            Err(e) => {
                eprintln!("Bad selection '{}': {}", selector, e);
                process::exit(1);
            }
        }
    }

    match session.export()? {
        ExportOutcome::Empty => {
            println!("Nothing selected; no document written.");
        }
        ExportOutcome::Document(bytes) => {
            fs::write(output_path, &bytes)?;
            println!("Wrote {} ({} bytes)", output_path, bytes.len());
        }
    }
    Ok(())
}

fn kind_name(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::TableImage => "table",
        ArtifactKind::ChartImage => "chart",
        ArtifactKind::SeparatorMarker => "separator",
        ArtifactKind::Placeholder => "invalid",
    }
}
