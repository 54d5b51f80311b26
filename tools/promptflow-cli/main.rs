use clap::Parser;
use promptflow::prelude::*;
use std::fs;
use std::time::Instant;

/// Compile a prompt graph document (editor JSON export) into linear text.
#[derive(Parser, Debug)]
#[command(name = "promptflow-cli", version, about)]
struct Args {
    /// Path to the document JSON exported by the editor
    document: String,

    /// Write the compiled text to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Write a binary compiled artifact to this file
    #[arg(long)]
    artifact: Option<String>,

    /// Override the document's fragment joiner
    #[arg(long)]
    joiner: Option<String>,

    /// Print the validation report as JSON on stderr
    #[arg(long)]
    report_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let json = fs::read_to_string(&args.document)?;
    let mut doc = UiDocument::from_json(&json)?.into_document()?;
    if let Some(joiner) = args.joiner {
        doc.settings.joiner = Some(joiner);
    }

    let start = Instant::now();
    let result = compile_document(&doc);
    eprintln!(
        "Compiled '{}' ({} nodes, {} edges) in {:.2?}",
        doc.name,
        doc.nodes.len(),
        doc.edges.len(),
        start.elapsed()
    );

    if args.report_json {
        eprintln!("{}", serde_json::to_string_pretty(&result.report)?);
    } else {
        for node_id in &result.report.missing_required {
            eprintln!("Missing required field on node '{}'", node_id);
        }
        for warning in &result.report.warnings {
            eprintln!("Warning: {}", warning);
        }
    }

    if let Some(path) = &args.artifact {
        CompiledPrompt::new(&doc, result.clone()).save(path)?;
        eprintln!("Artifact written to '{}'", path);
    }

    match &args.output {
        Some(path) => fs::write(path, &result.compiled_text)?,
        None => println!("{}", result.compiled_text),
    }

    Ok(())
}
