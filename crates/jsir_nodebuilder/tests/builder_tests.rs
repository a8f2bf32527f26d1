//! Node builder integration tests.
//!
//! Verifies that JSON descriptions build the expected trees and that bad
//! input is rejected at construction time.

use jsir_ast::{Node, NodeKind};
use jsir_core::IrError;
use jsir_nodebuilder::NodeBuilder;
use serde_json::json;
use std::io::Write;

/// Helper: build a module from a JSON value and serialize it.
fn render(doc: serde_json::Value) -> String {
    NodeBuilder::new()
        .build_module(&doc)
        .expect("valid description")
        .serialize()
}

/// Helper: build a single node and return the error it raises.
fn node_error(value: serde_json::Value) -> IrError {
    NodeBuilder::new()
        .build_node(&value)
        .expect_err("description should be rejected")
}

// ============================================================================
// Successful builds
// ============================================================================

#[test]
fn test_build_var_and_if_scenario() {
    let doc = json!({
        "options": { "useStrict": true },
        "body": [
            {
                "kind": "VariableStatement",
                "declarations": [
                    { "name": "x", "initializer": { "kind": "BooleanLiteral", "value": true } }
                ]
            },
            {
                "kind": "ConditionalStatement",
                "condition": { "kind": "BooleanLiteral", "value": true },
                "then": { "kind": "BlockStatement", "statements": [ { "kind": "EmptyStatement" } ] }
            }
        ]
    });
    assert_eq!(render(doc), "\"use strict\"\n\nvar x = true;if (true) {\n    ;\n}");
}

#[test]
fn test_build_defaults_to_strict() {
    assert_eq!(render(json!({})), "\"use strict\"\n\n");
    assert_eq!(render(json!({ "options": { "useStrict": false } })), "");
}

#[test]
fn test_null_statements_mean_absent_block() {
    let doc = json!({
        "options": { "useStrict": false },
        "body": [
            { "kind": "BlockStatement", "statements": null },
            { "kind": "BlockStatement", "statements": [] }
        ]
    });
    assert_eq!(render(doc), "{}{\n}");
}

#[test]
fn test_build_switch_with_fallthrough_and_default() {
    let doc = json!({
        "options": { "useStrict": false },
        "body": [{
            "kind": "SwitchStatement",
            "discriminant": { "kind": "BooleanLiteral", "value": false },
            "members": [
                { "labels": [1, "2"], "statements": [ { "kind": "EmptyStatement" } ] },
                { "kind": "SwitchMember", "statements": [ { "kind": "EmptyStatement" } ] }
            ]
        }]
    });
    assert_eq!(
        render(doc),
        "switch (false) {\n    case 1:\n    case 2:\n        ;\n    default:\n        ;\n}"
    );
}

#[test]
fn test_build_function() {
    let doc = json!({
        "options": { "useStrict": false },
        "body": [
            { "kind": "FunctionNode", "name": "f", "params": ["a", "b"] },
            {
                "kind": "FunctionNode",
                "body": { "statements": [ { "kind": "EmptyStatement" } ] }
            }
        ]
    });
    assert_eq!(render(doc), "function f(a, b) {}function () {\n    ;\n}");
}

#[test]
fn test_build_node_sets_parents() {
    let node = NodeBuilder::new()
        .build_module(&json!({ "body": [ { "kind": "EmptyStatement" } ] }))
        .unwrap();
    assert_eq!(node.statements()[0].parent(), Some(node.id()));
    assert_eq!(node.statements()[0].kind(), NodeKind::EmptyStatement);
}

#[test]
fn test_parse_module_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "options": {{ "useStrict": false }}, "body": [ {{ "kind": "EmptyStatement" }} ] }}"#
    )
    .unwrap();

    let module = NodeBuilder::new().parse_module_file(file.path()).unwrap();
    assert_eq!(module.serialize(), ";");
}

// ============================================================================
// Rejected descriptions
// ============================================================================

#[test]
fn test_non_boolean_literal_rejected() {
    for value in [json!(1), json!("true"), json!(null)] {
        let err = node_error(json!({ "kind": "BooleanLiteral", "value": value }));
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("BooleanLiteral"), "{}", err);
    }
    let err = node_error(json!({ "kind": "BooleanLiteral" }));
    assert!(err.is_invalid_argument());
}

#[test]
fn test_conditional_requires_node_condition() {
    let missing = node_error(json!({ "kind": "ConditionalStatement" }));
    assert_eq!(missing.to_string(), "ConditionalStatement: requires valid condition");

    let not_a_node = node_error(json!({ "kind": "ConditionalStatement", "condition": true }));
    assert!(not_a_node.is_invalid_argument());
}

#[test]
fn test_bad_nested_node_fails_whole_module() {
    let doc = json!({
        "body": [
            { "kind": "EmptyStatement" },
            { "kind": "BlockStatement", "statements": [ { "kind": "BooleanLiteral", "value": 0 } ] }
        ]
    });
    let err = NodeBuilder::new().build_module(&doc).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_unknown_kind_rejected() {
    let err = node_error(json!({ "kind": "WhileStatement" }));
    assert!(err.to_string().contains("unknown node kind `WhileStatement`"));
}

#[test]
fn test_nested_module_rejected() {
    assert!(node_error(json!({ "kind": "Module" })).is_invalid_argument());
}

#[test]
fn test_empty_declarations_rejected() {
    let err = node_error(json!({ "kind": "VariableStatement", "declarations": [] }));
    assert!(err.is_invalid_argument());
}

#[test]
fn test_mismatched_member_kind_rejected() {
    let err = node_error(json!({
        "kind": "SwitchStatement",
        "discriminant": { "kind": "BooleanLiteral", "value": true },
        "members": [ { "kind": "EmptyStatement" } ]
    }));
    assert!(err.to_string().contains("expected kind `SwitchMember`"));
}

#[test]
fn test_invalid_json_text() {
    let err = NodeBuilder::new().parse_module("{ not json").unwrap_err();
    assert!(matches!(err, IrError::Json(_)));
}

#[test]
fn test_missing_file() {
    let err = NodeBuilder::new()
        .parse_module_file("/nonexistent/jsir/description.json")
        .unwrap_err();
    assert!(matches!(err, IrError::Io(_)));
}
