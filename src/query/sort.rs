// ABOUTME: Resolves recipe sort keys through a closed allow-list into ORDER BY clauses
// ABOUTME: Unknown keys are rejected; absent keys default to rating descending, nulls last
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use super::CALORIES_EXPR;
use crate::errors::QueryError;

/// Sortable recipe fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// `title` column
    Title,
    /// `rating` column
    Rating,
    /// `total_time` column
    TotalTime,
    /// Calories derived from the nutrients text
    Calories,
}

impl SortField {
    /// Look up a sort key; `None` when it is not allow-listed
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "rating" => Some(Self::Rating),
            "total_time" => Some(Self::TotalTime),
            "calories" => Some(Self::Calories),
            _ => None,
        }
    }

    /// Public name of the key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rating => "rating",
            Self::TotalTime => "total_time",
            Self::Calories => "calories",
        }
    }

    /// Column name or derived expression to order by
    #[must_use]
    pub const fn sql_expr(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rating => "rating",
            Self::TotalTime => "total_time",
            Self::Calories => CALORIES_EXPR,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first (`-` prefix)
    Desc,
}

impl SortDirection {
    /// SQL keyword
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A resolved sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to order by
    pub field: SortField,
    /// Direction
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Rating, highest first
    fn default() -> Self {
        Self {
            field: SortField::Rating,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Resolve an optional sort key such as `"title"` or `"-calories"`
    ///
    /// Absent or empty keys resolve to the default (rating descending).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidSortField`] naming the key without its
    /// direction marker when it is not one of `title`, `rating`, `total_time`,
    /// `calories`.
    pub fn parse(sort: Option<&str>) -> Result<Self, QueryError> {
        let Some(raw) = sort.filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };

        let (direction, name) = raw
            .strip_prefix('-')
            .map_or((SortDirection::Asc, raw), |rest| (SortDirection::Desc, rest));

        let field = SortField::parse(name).ok_or_else(|| QueryError::invalid_sort_field(name))?;

        Ok(Self { field, direction })
    }

    /// `ORDER BY` body: nulls always last, ties broken by id
    #[must_use]
    pub fn order_by_clause(&self) -> String {
        format!(
            "{} {} NULLS LAST, id ASC",
            self.field.sql_expr(),
            self.direction.as_sql()
        )
    }
}

impl Display for SortSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Asc => f.write_str(self.field.as_str()),
            SortDirection::Desc => write!(f, "-{}", self.field.as_str()),
        }
    }
}
