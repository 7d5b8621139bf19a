// ABOUTME: Recipe store operations: executes built queries, counts rows, and inserts recipes
// ABOUTME: Maps SQLite rows to Recipe values and binds every query parameter positionally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use serde_json::Value;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{NewRecipe, Nutrients, Recipe};
use crate::pagination::{Limit, Page, PageRequest, SearchResults};
use crate::query::{fold_case, BindValue, RecipeFilters, RecipeQuery, RECIPE_COLUMNS};

/// Outcome of a bulk insert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InsertReport {
    /// Rows written
    pub inserted: usize,
    /// Records rejected by the store
    pub failed: usize,
}

/// Recipe storage operations over a shared pool
#[derive(Clone)]
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count all recipes, ignoring any filter
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;

        Ok(row.try_get("count")?)
    }

    /// Run a built query with its parameters bound in placeholder order
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or a row cannot be decoded
    pub async fn execute(&self, query: &RecipeQuery) -> AppResult<Vec<Recipe>> {
        debug!(
            sql = query.sql(),
            bind_count = query.binds().len(),
            "Executing recipe query"
        );

        let mut statement = sqlx::query(query.sql());
        for value in query.binds() {
            statement = match value {
                BindValue::Text(text) => statement.bind(text.as_str()),
                BindValue::Integer(int) => statement.bind(*int),
                BindValue::Real(real) => statement.bind(*real),
            };
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// One page of the catalog plus the unfiltered total
    ///
    /// The sort key is resolved before the store is touched, so an unknown key
    /// never reaches the database.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unknown sort key, or a database
    /// error if either query fails
    pub async fn list_page(
        &self,
        request: &PageRequest,
        sort: Option<&str>,
    ) -> AppResult<Page<Recipe>> {
        let query = RecipeQuery::page(sort, request.limit().get(), request.offset())?;

        let total = self.count().await?;
        let data = self.execute(&query).await?;

        debug!(
            page = request.page(),
            limit = request.limit().get(),
            total,
            returned = data.len(),
            sort = %query.sort(),
            "Listed recipes"
        );
        Ok(Page::new(request, total, data))
    }

    /// Filtered search capped at `limit` rows
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unknown sort key, or a database
    /// error if the query fails
    pub async fn search(
        &self,
        filters: &RecipeFilters,
        sort: Option<&str>,
        limit: Limit,
    ) -> AppResult<SearchResults<Recipe>> {
        let query = RecipeQuery::search(filters, sort, limit.get())?;

        let applied: Vec<&str> = query.applied_filters().map(|f| f.as_str()).collect();
        debug!(applied = ?applied, sort = %query.sort(), "Built recipe search");

        let data = self.execute(&query).await?;
        info!(rows = data.len(), "Found recipes matching search");
        Ok(SearchResults::from(data))
    }

    /// Insert one recipe and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns an error if the nutrients cannot be encoded or the insert fails
    pub async fn insert(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        let nutrients_json = serde_json::to_string(&recipe.nutrients)?;

        let result = sqlx::query(
            r"
            INSERT INTO recipes (
                title, cuisine, rating, prep_time, cook_time, total_time,
                description, nutrients, serves, title_folded, cuisine_folded
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(&recipe.title)
        .bind(&recipe.cuisine)
        .bind(recipe.rating)
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.total_time)
        .bind(&recipe.description)
        .bind(&nutrients_json)
        .bind(&recipe.serves)
        .bind(fold_case(&recipe.title))
        .bind(recipe.cuisine.as_deref().map(fold_case))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;

        Ok(recipe.clone().into_recipe(result.last_insert_rowid()))
    }

    /// Insert each recipe in its own statement
    ///
    /// A record the store rejects is logged and skipped; the rest still persist.
    pub async fn insert_many(&self, recipes: &[NewRecipe]) -> InsertReport {
        let mut report = InsertReport::default();

        for recipe in recipes {
            match self.insert(recipe).await {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    warn!(
                        title = %recipe.title,
                        error = %e,
                        "Skipping recipe that failed to insert"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            inserted = report.inserted,
            failed = report.failed,
            "Bulk recipe insert finished"
        );
        report
    }

    /// Fetch one recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, id: i64) -> AppResult<Option<Recipe>> {
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe {id}: {e}")))?;

        row.as_ref().map(row_to_recipe).transpose()
    }
}

/// Convert a database row to a `Recipe`
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let nutrients_json: Option<String> = row.try_get("nutrients")?;
    let nutrients = match nutrients_json.as_deref() {
        Some(text) if !text.is_empty() => match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => map,
            _ => Nutrients::new(),
        },
        _ => Nutrients::new(),
    };

    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        cuisine: row.try_get("cuisine")?,
        rating: row.try_get("rating")?,
        prep_time: row.try_get("prep_time")?,
        cook_time: row.try_get("cook_time")?,
        total_time: row.try_get("total_time")?,
        description: row.try_get("description")?,
        nutrients,
        serves: row.try_get("serves")?,
    })
}
