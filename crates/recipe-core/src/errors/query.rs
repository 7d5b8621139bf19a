// ABOUTME: Query construction errors raised while resolving sort keys
// ABOUTME: Converts into AppError so handlers surface them as client-input failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Query Error Types
//!
//! Filter expressions never produce errors: a malformed expression simply
//! leaves its filter unapplied. Sort keys are validated strictly, and an
//! unknown key is reported through [`QueryError`] before any SQL is run.

use thiserror::Error;

use super::AppError;

/// Errors raised while turning request parameters into a query
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Sort key (after stripping the `-` direction marker) is not allow-listed
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),
}

impl QueryError {
    /// Create an "invalid sort field" error
    #[must_use]
    pub fn invalid_sort_field(field: impl Into<String>) -> Self {
        Self::InvalidSortField(field.into())
    }
}

impl From<QueryError> for AppError {
    fn from(error: QueryError) -> Self {
        Self::invalid_input(error.to_string())
    }
}
