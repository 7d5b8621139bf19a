// ABOUTME: Assembles filtered, sorted, limited recipe SELECTs with every user value bound
// ABOUTME: Records per filter whether it was applied or skipped for logging and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe query builder
//!
//! Predicates start from the always-true `1 = 1`, so a request with no usable
//! filters matches every row. Text filters are skipped when empty; numeric
//! filters are skipped when their expression does not parse. Either way the
//! outcome is recorded as [`FilterOutcome::Skipped`] rather than raised.

use super::expression::{parse_expression, FilterValue, NumericKind};
use super::sort::SortSpec;
use super::{CALORIES_EXPR, RECIPE_COLUMNS};
use crate::errors::QueryError;

/// Optional search filters exactly as received from the request
#[derive(Debug, Clone, Default)]
pub struct RecipeFilters {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive exact cuisine
    pub cuisine: Option<String>,
    /// Comparison expression on derived calories, e.g. `">300"`
    pub calories: Option<String>,
    /// Comparison expression on total time in minutes, e.g. `"<=45"`
    pub total_time: Option<String>,
    /// Comparison expression on rating, e.g. `">=4.5"`
    pub rating: Option<String>,
}

/// Filterable fields, in the order predicates are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// `title`
    Title,
    /// `cuisine`
    Cuisine,
    /// `total_time`
    TotalTime,
    /// `rating`
    Rating,
    /// Derived calories
    Calories,
}

impl FilterField {
    /// Request parameter name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Cuisine => "cuisine",
            Self::TotalTime => "total_time",
            Self::Rating => "rating",
            Self::Calories => "calories",
        }
    }
}

/// What happened to one filter parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// A predicate was added
    Applied,
    /// Absent, empty, or malformed; no predicate added
    Skipped,
}

/// A value bound to a numbered placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// TEXT parameter
    Text(String),
    /// INTEGER parameter
    Integer(i64),
    /// REAL parameter
    Real(f64),
}

impl From<FilterValue> for BindValue {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Integer(v) => Self::Integer(v),
            FilterValue::Float(v) => Self::Real(v),
        }
    }
}

/// A finished query: SQL text plus parameters in placeholder order
#[derive(Debug, Clone)]
pub struct RecipeQuery {
    sql: String,
    binds: Vec<BindValue>,
    outcomes: Vec<(FilterField, FilterOutcome)>,
    sort: SortSpec,
}

impl RecipeQuery {
    /// Query for the search endpoint: filters, sort, and a row cap
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidSortField`] for an unknown sort key
    pub fn search(
        filters: &RecipeFilters,
        sort: Option<&str>,
        limit: u32,
    ) -> Result<Self, QueryError> {
        Ok(RecipeQueryBuilder::new()
            .with_filters(filters)
            .with_sort(sort)?
            .build(limit, None))
    }

    /// Query for the listing endpoint: sort plus limit/offset, no filters
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidSortField`] for an unknown sort key
    pub fn page(sort: Option<&str>, limit: u32, offset: u64) -> Result<Self, QueryError> {
        Ok(RecipeQueryBuilder::new()
            .with_sort(sort)?
            .build(limit, Some(offset)))
    }

    /// SQL text with `$n` placeholders
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameters for `$1..$n`
    #[must_use]
    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }

    /// Resolved ordering
    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Outcome recorded for a filter; fields never considered count as skipped
    #[must_use]
    pub fn outcome(&self, field: FilterField) -> FilterOutcome {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(FilterOutcome::Skipped, |(_, outcome)| *outcome)
    }

    /// Filters that produced a predicate
    pub fn applied_filters(&self) -> impl Iterator<Item = FilterField> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == FilterOutcome::Applied)
            .map(|(field, _)| *field)
    }
}

/// Incremental builder behind [`RecipeQuery`]
#[derive(Debug, Default)]
pub struct RecipeQueryBuilder {
    predicates: Vec<String>,
    binds: Vec<BindValue>,
    outcomes: Vec<(FilterField, FilterOutcome)>,
    sort: SortSpec,
}

impl RecipeQueryBuilder {
    /// Empty builder: no predicates, default sort
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every search filter
    #[must_use]
    pub fn with_filters(mut self, filters: &RecipeFilters) -> Self {
        self.title(filters.title.as_deref());
        self.cuisine(filters.cuisine.as_deref());
        self.comparison(
            FilterField::TotalTime,
            "total_time",
            filters.total_time.as_deref(),
            NumericKind::Integer,
        );
        self.comparison(
            FilterField::Rating,
            "rating",
            filters.rating.as_deref(),
            NumericKind::Float,
        );
        self.comparison(
            FilterField::Calories,
            CALORIES_EXPR,
            filters.calories.as_deref(),
            NumericKind::Integer,
        );
        self
    }

    /// Resolve the sort key
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidSortField`] for an unknown sort key
    pub fn with_sort(mut self, sort: Option<&str>) -> Result<Self, QueryError> {
        self.sort = SortSpec::parse(sort)?;
        Ok(self)
    }

    /// Render the final SELECT
    #[must_use]
    pub fn build(mut self, limit: u32, offset: Option<u64>) -> RecipeQuery {
        let mut where_clause = String::from("1 = 1");
        for predicate in &self.predicates {
            where_clause.push_str(" AND ");
            where_clause.push_str(predicate);
        }

        let limit_placeholder = self.bind(BindValue::Integer(i64::from(limit)));
        let mut sql = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE {where_clause} ORDER BY {} LIMIT {limit_placeholder}",
            self.sort.order_by_clause()
        );

        if let Some(offset) = offset {
            let offset = i64::try_from(offset).unwrap_or(i64::MAX);
            let offset_placeholder = self.bind(BindValue::Integer(offset));
            sql.push_str(" OFFSET ");
            sql.push_str(&offset_placeholder);
        }

        RecipeQuery {
            sql,
            binds: self.binds,
            outcomes: self.outcomes,
            sort: self.sort,
        }
    }

    fn bind(&mut self, value: BindValue) -> String {
        self.binds.push(value);
        format!("${}", self.binds.len())
    }

    fn record(&mut self, field: FilterField, outcome: FilterOutcome) {
        self.outcomes.push((field, outcome));
    }

    fn title(&mut self, title: Option<&str>) {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            self.record(FilterField::Title, FilterOutcome::Skipped);
            return;
        };

        let pattern = format!("%{}%", escape_like(&fold_case(title)));
        let placeholder = self.bind(BindValue::Text(pattern));
        self.predicates.push(format!("title_folded LIKE {placeholder} ESCAPE '\\'"));
        self.record(FilterField::Title, FilterOutcome::Applied);
    }

    fn cuisine(&mut self, cuisine: Option<&str>) {
        let Some(cuisine) = cuisine.filter(|c| !c.is_empty()) else {
            self.record(FilterField::Cuisine, FilterOutcome::Skipped);
            return;
        };

        let placeholder = self.bind(BindValue::Text(fold_case(cuisine)));
        self.predicates.push(format!("cuisine_folded = {placeholder}"));
        self.record(FilterField::Cuisine, FilterOutcome::Applied);
    }

    /// `target` must be an allow-listed column or derived expression
    fn comparison(
        &mut self,
        field: FilterField,
        target: &'static str,
        expression: Option<&str>,
        kind: NumericKind,
    ) {
        let Some(comparison) = expression.and_then(|e| parse_expression(e, kind)) else {
            self.record(field, FilterOutcome::Skipped);
            return;
        };

        let placeholder = self.bind(comparison.value.into());
        self.predicates
            .push(format!("{target} {} {placeholder}", comparison.op.as_sql()));
        self.record(field, FilterOutcome::Applied);
    }
}

/// Unicode lowercase form stored in the `*_folded` columns
///
/// SQLite's `LOWER` only folds ASCII, so case-insensitive matching compares
/// values folded here on both the stored and the requested side.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Escape LIKE wildcards so user text matches literally under `ESCAPE '\'`
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
