// ABOUTME: Parses filter expressions like ">=4.5" or "30" into an operator and a typed value
// ABOUTME: Malformed or empty input yields None so the filter is skipped instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Filter expression parsing
//!
//! Grammar: an optional operator from `<=`, `>=`, `<`, `>`, `=` followed by
//! optional whitespace and an ASCII numeral `[0-9]+(\.[0-9]+)?`. The match is
//! anchored at the start of the input but not at the end, so `">=30min"`
//! parses as `>= 30`. Anything else parses to `None`.

use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;

/// Anchored prefix pattern: operator (group 1) and numeral (group 2)
///
/// Stored as Option to handle compilation failures gracefully (never fails for this static pattern)
static EXPRESSION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(<=|>=|<|>|=)?\s*([0-9]+(?:\.[0-9]+)?)").ok());

/// Comparison operator accepted in a filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`, the default when no operator is written
    Equal,
}

impl ComparisonOp {
    /// SQL token for this operator
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "<=" => Some(Self::LessOrEqual),
            ">=" => Some(Self::GreaterOrEqual),
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            "=" => Some(Self::Equal),
            _ => None,
        }
    }
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// How the numeral of an expression is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Parse as float, then truncate toward zero (`"30.9"` -> 30)
    Integer,
    /// Parse as float
    Float,
}

/// Typed comparison value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    /// Value for integer columns
    Integer(i64),
    /// Value for real columns
    Float(f64),
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A parsed filter expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Operator, `=` when the expression had none
    pub op: ComparisonOp,
    /// Right-hand value
    pub value: FilterValue,
}

/// Parse a filter expression
///
/// Returns `None` for empty input, input that does not start with the
/// expression grammar, or a numeral that is not a finite number. This
/// function never fails: a `None` means "do not filter on this field".
#[must_use]
pub fn parse_expression(expression: &str, kind: NumericKind) -> Option<Comparison> {
    if expression.is_empty() {
        return None;
    }

    let captures = EXPRESSION_PATTERN.as_ref()?.captures(expression)?;

    let op = captures
        .get(1)
        .map_or(Some(ComparisonOp::Equal), |m| ComparisonOp::from_token(m.as_str()))?;

    let number: f64 = captures.get(2)?.as_str().parse().ok()?;
    if !number.is_finite() {
        return None;
    }

    let value = match kind {
        NumericKind::Float => FilterValue::Float(number),
        NumericKind::Integer => FilterValue::Integer(number.trunc() as i64),
    };

    Some(Comparison { op, value })
}
