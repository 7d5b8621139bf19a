// ABOUTME: Page-number pagination for recipe listing and result envelopes for list and search
// ABOUTME: Validates page/limit bounds before any query is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::limits::{
    DEFAULT_LIST_LIMIT, DEFAULT_PAGE, DEFAULT_SEARCH_LIMIT, MAX_PAGE_LIMIT, MIN_PAGE_LIMIT,
};
use crate::errors::{AppError, AppResult};

/// Validated row limit in `MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limit(u32);

impl Limit {
    /// Validate a raw limit, falling back to `default` when absent
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the limit is below 1 or above 100
    pub fn parse(raw: Option<i64>, default: i64) -> AppResult<Self> {
        let value = raw.unwrap_or(default);
        if !(MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT).contains(&value) {
            return Err(AppError::out_of_range(format!(
                "limit must be between {MIN_PAGE_LIMIT} and {MAX_PAGE_LIMIT}, got {value}"
            )));
        }
        // Bounded above by MAX_PAGE_LIMIT
        Ok(Self(value as u32))
    }

    /// Limit for the search endpoint (default 50)
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the limit is outside 1..=100
    pub fn for_search(raw: Option<i64>) -> AppResult<Self> {
        Self::parse(raw, DEFAULT_SEARCH_LIMIT)
    }

    /// Raw value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Validated 1-based page request for the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: Limit,
}

impl PageRequest {
    /// Validate raw page/limit values, applying defaults (page 1, limit 15)
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `page < 1` or the limit is outside 1..=100
    pub fn parse(page: Option<i64>, limit: Option<i64>) -> AppResult<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(AppError::out_of_range(format!(
                "page must be greater than or equal to 1, got {page}"
            )));
        }
        let page = u32::try_from(page)
            .map_err(|_| AppError::out_of_range(format!("page {page} is too large")))?;

        Ok(Self {
            page,
            limit: Limit::parse(limit, DEFAULT_LIST_LIMIT)?,
        })
    }

    /// 1-based page number
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Rows per page
    #[must_use]
    pub const fn limit(&self) -> Limit {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`
    #[must_use]
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.limit.get())
    }
}

/// Listing response: `{page, limit, total, data}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// 1-based page number echoed from the request
    pub page: u32,
    /// Page size echoed from the request
    pub limit: u32,
    /// Total rows in the catalog, independent of page and limit
    pub total: i64,
    /// Rows on this page
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Assemble a page from a validated request
    #[must_use]
    pub fn new(request: &PageRequest, total: i64, data: Vec<T>) -> Self {
        Self {
            page: request.page(),
            limit: request.limit().get(),
            total,
            data,
        }
    }
}

/// Search response: `{count, data}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Number of rows returned
    pub count: usize,
    /// Matching rows
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_defaults_apply() {
        let request = PageRequest::parse(None, None).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit().get(), 15);
        assert_eq!(request.offset(), 0);

        assert_eq!(Limit::for_search(None).unwrap().get(), 50);
    }

    #[test]
    fn test_offset_from_page() {
        let request = PageRequest::parse(Some(2), Some(15)).unwrap();
        assert_eq!(request.offset(), 15);

        let request = PageRequest::parse(Some(4), Some(100)).unwrap();
        assert_eq!(request.offset(), 300);

        let request = PageRequest::parse(Some(i64::from(u32::MAX)), Some(100)).unwrap();
        assert_eq!(request.offset(), (u64::from(u32::MAX) - 1) * 100);
    }

    #[test]
    fn test_rejects_out_of_range() {
        for (page, limit) in [
            (Some(0), None),
            (Some(-3), None),
            (None, Some(0)),
            (None, Some(-1)),
            (None, Some(101)),
        ] {
            let error = PageRequest::parse(page, limit).unwrap_err();
            assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        }
    }

    #[test]
    fn test_boundaries_accepted() {
        assert!(Limit::for_search(Some(1)).is_ok());
        assert!(Limit::for_search(Some(100)).is_ok());
    }
}
