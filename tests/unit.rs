//! Unit tests for the document model and the node type registry.
mod common;
use promptflow::prelude::*;
use promptflow::registry;

#[test]
fn test_node_type_parse_roundtrip() {
    for node_type in NodeType::known() {
        assert_eq!(NodeType::parse(node_type.as_str()), node_type);
    }
}

#[test]
fn test_unknown_tag_is_preserved() {
    let node_type = NodeType::parse("somethingElse");
    assert_eq!(node_type, NodeType::Unknown("somethingElse".to_string()));
    assert_eq!(node_type.as_str(), "somethingElse");
}

#[test]
fn test_registry_defines_all_ten_types() {
    assert_eq!(registry::all_definitions().count(), 10);
    for node_type in NodeType::known() {
        let definition = registry::lookup(&node_type).expect("known type must be registered");
        assert_eq!(definition.node_type, node_type);
    }
}

#[test]
fn test_registry_lookup_is_total() {
    assert!(registry::lookup(&NodeType::Unknown("mystery".to_string())).is_none());
}

#[test]
fn test_every_compiled_field_has_a_placeholder() {
    for definition in registry::all_definitions() {
        for field in definition.fields.iter().filter(|f| f.compile) {
            let placeholder = format!("{{{{{}}}}}", field.key);
            assert!(
                definition.template.contains(&placeholder),
                "template for '{}' lacks placeholder {}",
                definition.node_type,
                placeholder
            );
        }
    }
}

#[test]
fn test_note_text_field_is_required_but_not_compiled() {
    let definition = registry::lookup(&NodeType::Note).unwrap();
    let field = &definition.fields[0];
    assert_eq!(field.key, "text");
    assert!(field.required);
    assert!(!field.compile);
    assert_eq!(definition.template, "");
}

#[test]
fn test_select_fields_carry_options() {
    let definition = registry::lookup(&NodeType::Persona).unwrap();
    let tone = definition.fields.iter().find(|f| f.key == "tone").unwrap();
    assert_eq!(tone.kind, FieldKind::Select);
    assert!(tone.options.contains(&"professional"));
}

#[test]
fn test_field_value_emptiness() {
    assert!(FieldValue::Text(String::new()).is_empty());
    assert!(FieldValue::List(vec![]).is_empty());
    assert!(!FieldValue::Text("x".to_string()).is_empty());
    assert!(!FieldValue::List(vec!["x".to_string()]).is_empty());
}

#[test]
fn test_settings_default_joiner() {
    let settings = Settings::default();
    assert_eq!(settings.joiner(), DEFAULT_JOINER);
    let custom = Settings {
        joiner: Some(" | ".to_string()),
        ..Settings::default()
    };
    assert_eq!(custom.joiner(), " | ");
}

#[test]
fn test_document_error_messages_name_the_failing_direction() {
    let parse = DocumentError::JsonParse("eof".to_string());
    assert!(parse.to_string().contains("parse"));
    let serialize = DocumentError::JsonSerialize("bad key".to_string());
    assert!(serialize.to_string().contains("serialize"));
    assert!(!serialize.to_string().contains("parse"));
}

#[test]
fn test_validation_report_is_clean() {
    assert!(ValidationReport::default().is_clean());
    let dirty = ValidationReport {
        missing_required: vec!["n1".to_string()],
        warnings: vec![],
    };
    assert!(!dirty.is_clean());
}
