//! Tests for liquid token parsing and text scanning.
use liquilint::prelude::*;

#[test]
fn test_parse_dotted_path() {
    let expr = parse_liquid_expression("{{a.b.c}}").unwrap();
    assert_eq!(expr.path, "a.b.c");
    assert_eq!(expr.root_namespace, "a");
    assert!(expr.filters.is_empty());
    assert_eq!(expr.full_expression, "{{a.b.c}}");
}

#[test]
fn test_parse_round_trip_modulo_whitespace() {
    let expr = parse_liquid_expression("{{  payload.user.name  }}").unwrap();
    assert_eq!(expr.path, "payload.user.name");

    let reserialized = format!("{{{{{}}}}}", expr.path);
    let reparsed = parse_liquid_expression(&reserialized).unwrap();
    assert_eq!(reparsed.path, expr.path);
    assert_eq!(reparsed.root_namespace, expr.root_namespace);
}

#[test]
fn test_parse_accepts_unwrapped_input() {
    let wrapped = parse_liquid_expression("{{payload.name}}").unwrap();
    let unwrapped = parse_liquid_expression("payload.name").unwrap();
    assert_eq!(wrapped, unwrapped);
}

#[test]
fn test_parse_filter_chain() {
    let expr = parse_liquid_expression("{{payload.name | upcase | truncate: 5}}").unwrap();
    assert_eq!(expr.path, "payload.name");
    assert_eq!(expr.filters, vec!["upcase", "truncate: 5"]);
    assert_eq!(
        expr.full_expression,
        "{{payload.name | upcase | truncate: 5}}"
    );
}

#[test]
fn test_parse_escaped_pipe_does_not_split() {
    let expr = parse_liquid_expression(r"{{payload.title | default: a\|b}}").unwrap();
    assert_eq!(expr.path, "payload.title");
    assert_eq!(expr.filters, vec![r"default: a\|b"]);
}

#[test]
fn test_parse_empty_filters_dropped() {
    let expr = parse_liquid_expression("{{payload.name | | upcase}}").unwrap();
    assert_eq!(expr.filters, vec!["upcase"]);
}

#[test]
fn test_parse_unbalanced_braces_fails() {
    assert!(parse_liquid_expression("{{payload.name}").is_none());
    assert!(parse_liquid_expression("{{a}b}}").is_none());
}

#[test]
fn test_parse_namespace_only() {
    let expr = parse_liquid_expression("{{payload}}").unwrap();
    assert!(expr.is_namespace_only());
    assert_eq!(expr.root_namespace, "payload");
    assert_eq!(expr.path, "payload");
}

#[test]
fn test_parse_empty_token() {
    let expr = parse_liquid_expression("{{}}").unwrap();
    assert_eq!(expr.path, "");
    assert_eq!(expr.root_namespace, "");
}

#[test]
fn test_variable_key_stripping() {
    let expr = parse_liquid_expression("{{payload.user.name}}").unwrap();
    assert_eq!(expr.variable_key(), Some("user.name"));

    let expr = parse_liquid_expression("{{current.payload.title}}").unwrap();
    assert_eq!(expr.variable_key(), Some("title"));
    assert!(expr.is_payload_variable());

    let expr = parse_liquid_expression("{{payload}}").unwrap();
    assert_eq!(expr.variable_key(), Some(""));

    let expr = parse_liquid_expression("{{subscriber.email}}").unwrap();
    assert_eq!(expr.variable_key(), None);
    assert!(!expr.is_payload_variable());

    // A namespace that merely starts with "payload" is not the payload.
    let expr = parse_liquid_expression("{{payloads.name}}").unwrap();
    assert_eq!(expr.variable_key(), None);
}

#[test]
fn test_extract_skips_malformed_tokens() {
    let text = "Hi {{subscriber.firstName}}, {{broken and {{payload.name}} go";
    let found = extract_liquid_expressions(text);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].path, "subscriber.firstName");
    assert_eq!(found[1].path, "payload.name");
}

#[test]
fn test_extract_from_plain_text() {
    assert!(extract_liquid_expressions("no variables here").is_empty());
}
