use clap::Parser;
use promptflow::prelude::*;
use promptflow::registry;
use rand::prelude::*;

/// Generate a random (acyclic) prompt graph document as editor JSON, for
/// stress-testing the compiler and exercising importers.
#[derive(Parser, Debug)]
#[command(name = "doc-gen", version, about)]
struct Args {
    /// Number of nodes to generate
    #[arg(short, long, default_value_t = 12)]
    nodes: usize,

    /// Probability that a node gets an incoming edge from an earlier node
    #[arg(short, long, default_value_t = 0.6)]
    edge_probability: f64,

    /// RNG seed for reproducible documents
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut doc = Document::new("doc_generated", "Generated Document");
    let kinds = NodeType::known();

    for index in 0..args.nodes {
        let node_type = kinds[rng.random_range(0..kinds.len())].clone();
        let mut node = Node::new(
            format!("node_{:04}", index + 1),
            node_type.clone(),
            Position::new(
                (index % 4) as f64 * 220.0,
                (index / 4) as f64 * 140.0 + rng.random_range(0.0..40.0),
            ),
        );
        fill_fields(&mut node);
        doc.nodes.push(node);
    }

    // Forward-only edges keep the generated graph acyclic.
    for target_index in 1..args.nodes {
        if !rng.random_bool(args.edge_probability) {
            continue;
        }
        let source_index = rng.random_range(0..target_index);
        let source = doc.nodes[source_index].clone();
        let condition = match source.node_type {
            NodeType::IfElse => {
                let tag = if rng.random_bool(0.5) { "if" } else { "else" };
                Some(tag.to_string())
            }
            _ => None,
        };
        doc.edges.push(Edge {
            id: format!("edge_{:04}", target_index),
            source: source.id,
            target: doc.nodes[target_index].id.clone(),
            points: None,
            condition,
        });
    }

    let ui_doc = UiDocument::from(&doc);
    println!("{}", ui_doc.to_json()?);
    Ok(())
}

/// Fills every compile-enabled field of the node with plausible filler so the
/// generated document validates clean.
fn fill_fields(node: &mut Node) {
    let Some(definition) = registry::lookup(&node.node_type) else {
        return;
    };
    for field in &definition.fields {
        let value = match field.kind {
            FieldKind::Text | FieldKind::TextArea => {
                FieldValue::Text(format!("sample {}", field.key))
            }
            FieldKind::List => FieldValue::List(vec![
                format!("first {}", field.key),
                format!("second {}", field.key),
            ]),
            FieldKind::Select => {
                FieldValue::Text(field.options.first().unwrap_or(&"").to_string())
            }
        };
        node.data.insert(field.key.to_string(), value);
    }
}
