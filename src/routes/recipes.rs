// ABOUTME: Recipe route handlers for paginated listing and filtered search
// ABOUTME: Validates page/limit/sort parameters and delegates query execution to the recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! - `GET /api/recipes`: `{page, limit, total, data}`
//! - `GET /api/recipes/search`: `{count, data}`
//!
//! Parameter problems (non-integer or out-of-range page/limit, unknown sort
//! key) are answered with 400 before any query runs. Malformed filter
//! expressions are not errors; the filter is simply not applied.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::pagination::{Limit, PageRequest};
use crate::query::RecipeFilters;
use crate::resources::ServerResources;

/// Query parameters for `GET /api/recipes`
#[derive(Debug, Default, Deserialize)]
pub struct ListRecipesQuery {
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Rows per page, 1-100 (default 15)
    pub limit: Option<i64>,
    /// Sort key, `-` prefix for descending
    pub sort: Option<String>,
}

/// Query parameters for `GET /api/recipes/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchRecipesQuery {
    /// Case-insensitive title substring
    pub title: Option<String>,
    /// Case-insensitive exact cuisine
    pub cuisine: Option<String>,
    /// Calories expression, e.g. `<=400`
    pub calories: Option<String>,
    /// Total time expression in minutes, e.g. `<60`
    pub total_time: Option<String>,
    /// Rating expression, e.g. `>=4.5`
    pub rating: Option<String>,
    /// Maximum rows, 1-100 (default 50)
    pub limit: Option<i64>,
    /// Sort key, `-` prefix for descending
    pub sort: Option<String>,
}

impl SearchRecipesQuery {
    fn filters(&self) -> RecipeFilters {
        RecipeFilters {
            title: self.title.clone(),
            cuisine: self.cuisine.clone(),
            calories: self.calories.clone(),
            total_time: self.total_time.clone(),
            rating: self.rating.clone(),
        }
    }
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::handle_list))
            .route("/api/recipes/search", get(Self::handle_search))
            .with_state(resources)
    }

    /// Handle GET /api/recipes - One page of the catalog
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<ListRecipesQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(reject_parameters)?;
        let request = PageRequest::parse(query.page, query.limit)?;

        let page = resources
            .recipes()
            .list_page(&request, query.sort.as_deref())
            .await?;

        Ok((StatusCode::OK, Json(page)).into_response())
    }

    /// Handle GET /api/recipes/search - Filtered, sorted, capped search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<SearchRecipesQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(reject_parameters)?;
        let limit = Limit::for_search(query.limit)?;

        let results = resources
            .recipes()
            .search(&query.filters(), query.sort.as_deref(), limit)
            .await?;

        Ok((StatusCode::OK, Json(results)).into_response())
    }
}

/// Map a query-string decoding failure to a 400 with a `{detail}` body
fn reject_parameters(rejection: QueryRejection) -> AppError {
    debug!(error = %rejection, "Rejected query parameters");
    AppError::invalid_input(rejection.body_text())
}
