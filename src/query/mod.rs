// ABOUTME: Translates loosely-typed recipe filter and sort parameters into parameterized SQL
// ABOUTME: Groups the expression parser, the sort allow-list, and the query builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Query Construction
//!
//! Three layers, each pure and stateless:
//!
//! - [`expression`] parses comparison expressions such as `">=30"` into an
//!   operator and a typed value, or nothing at all for malformed input.
//! - [`sort`] resolves a sort key through a closed allow-list into an
//!   `ORDER BY` clause and rejects unknown keys.
//! - [`builder`] assembles the full `SELECT` with every user value passed as a
//!   bound parameter.
//!
//! Only text drawn from closed enums and the constants in this module is ever
//! interpolated into SQL.

/// Comparison expression parsing (`"<=12.5"`, `"7"`)
pub mod expression;

/// Sort key allow-list and ORDER BY rendering
pub mod sort;

/// Filtered SELECT assembly with bound parameters
pub mod builder;

/// Calories text with the unit stripped
macro_rules! calories_text {
    () => {
        "REPLACE(json_extract(nutrients, '$.calories'), ' kcal', '')"
    };
}

pub use builder::{
    fold_case, BindValue, FilterField, FilterOutcome, RecipeFilters, RecipeQuery,
    RecipeQueryBuilder,
};
pub use expression::{parse_expression, Comparison, ComparisonOp, FilterValue, NumericKind};
pub use sort::{SortDirection, SortField, SortSpec};

/// Calories as an integer, derived from the `nutrients` JSON text
///
/// Stored values look like `"389 kcal"` or a bare `"389"`; the `" kcal"` unit
/// is removed before the cast. Anything left that is not a numeral (missing,
/// empty, `"N/A"`) evaluates to `NULL` rather than SQLite's cast result of 0.
/// Filtering and sorting both use this exact expression.
pub const CALORIES_EXPR: &str = concat!(
    "(CASE WHEN ",
    calories_text!(),
    " GLOB '[0-9]*' AND ",
    calories_text!(),
    " NOT GLOB '*[^0-9.]*' THEN CAST(",
    calories_text!(),
    " AS INTEGER) END)"
);

/// Columns selected for every recipe row, in `Recipe` field order
pub const RECIPE_COLUMNS: &str =
    "id, title, cuisine, rating, prep_time, cook_time, total_time, description, nutrients, serves";
