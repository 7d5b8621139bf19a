// ABOUTME: Unit tests for filter expression parsing
// ABOUTME: Covers operators, defaults, malformed input, numeric coercion, and trailing-text leniency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use recipe_catalog::query::{parse_expression, ComparisonOp, FilterValue, NumericKind};

#[test]
fn test_parses_each_operator() {
    let cases = [
        ("<=12.5", ComparisonOp::LessOrEqual),
        (">=3", ComparisonOp::GreaterOrEqual),
        ("<3", ComparisonOp::Less),
        (">3", ComparisonOp::Greater),
        ("=3", ComparisonOp::Equal),
    ];

    for (expression, op) in cases {
        let parsed = parse_expression(expression, NumericKind::Float).unwrap();
        assert_eq!(parsed.op, op, "operator for {expression}");
    }
}

#[test]
fn test_float_values() {
    let parsed = parse_expression("<=12.5", NumericKind::Float).unwrap();
    assert_eq!(parsed.value, FilterValue::Float(12.5));

    let parsed = parse_expression(">=3", NumericKind::Float).unwrap();
    assert_eq!(parsed.value, FilterValue::Float(3.0));
}

#[test]
fn test_bare_numeral_defaults_to_equal() {
    let parsed = parse_expression("7", NumericKind::Integer).unwrap();
    assert_eq!(parsed.op, ComparisonOp::Equal);
    assert_eq!(parsed.value, FilterValue::Integer(7));
}

#[test]
fn test_integer_kind_truncates() {
    let parsed = parse_expression("30.0", NumericKind::Integer).unwrap();
    assert_eq!(parsed.value, FilterValue::Integer(30));

    let parsed = parse_expression(">30.9", NumericKind::Integer).unwrap();
    assert_eq!(parsed.value, FilterValue::Integer(30));
}

#[test]
fn test_malformed_input_is_none() {
    for expression in ["", "abc", "<=", ">=x", " >5", "-5", "+5", ".5", "=<5"] {
        assert_eq!(
            parse_expression(expression, NumericKind::Float),
            None,
            "expected no filter for {expression:?}"
        );
    }
}

#[test]
fn test_trailing_text_is_ignored() {
    let parsed = parse_expression(">=30min", NumericKind::Integer).unwrap();
    assert_eq!(parsed.op, ComparisonOp::GreaterOrEqual);
    assert_eq!(parsed.value, FilterValue::Integer(30));

    let parsed = parse_expression("4.5 stars", NumericKind::Float).unwrap();
    assert_eq!(parsed.op, ComparisonOp::Equal);
    assert_eq!(parsed.value, FilterValue::Float(4.5));
}

#[test]
fn test_dangling_decimal_point_keeps_integer_part() {
    let parsed = parse_expression("5.", NumericKind::Float).unwrap();
    assert_eq!(parsed.value, FilterValue::Float(5.0));
}

#[test]
fn test_operator_renders_as_sql_token() {
    assert_eq!(ComparisonOp::LessOrEqual.as_sql(), "<=");
    assert_eq!(ComparisonOp::Equal.to_string(), "=");
}
