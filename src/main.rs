use promptflow::prelude::*;
use std::env;
use std::fs;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/document.json> [path/to/output.txt]");
        std::process::exit(1);
    }

    let document_path = &args[1];
    let output_path = args.get(2);

    println!("Loading document from: {}", document_path);
    let json = match fs::read_to_string(document_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read document file '{}': {}", document_path, e);
            std::process::exit(1);
        }
    };

    let ui_doc = match UiDocument::from_json(&json) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Failed to parse document: {}", e);
            std::process::exit(1);
        }
    };

    let doc = match ui_doc.into_document() {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Failed to convert document: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Compiling '{}' ({} nodes, {} edges)...",
        doc.name,
        doc.nodes.len(),
        doc.edges.len()
    );
    let result = compile_document(&doc);

    if result.report.missing_required.is_empty() {
        println!("All required fields are filled.");
    } else {
        println!("Nodes with missing required fields:");
        for node_id in &result.report.missing_required {
            println!("  - {}", node_id);
        }
    }
    for warning in &result.report.warnings {
        println!("Warning: {}", warning);
    }

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &result.compiled_text) {
                eprintln!("Failed to write output file '{}': {}", path, e);
                std::process::exit(1);
            }
            println!("Compiled prompt written to '{}'", path);
        }
        None => {
            println!("--- Compiled prompt ---");
            println!("{}", result.compiled_text);
        }
    }
}
