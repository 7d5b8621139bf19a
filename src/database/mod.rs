// ABOUTME: Database connection management and schema migration for the recipe store
// ABOUTME: Owns the SQLite pool injected into request handlers through server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! A [`Database`] wraps one `SQLite` connection pool. Handlers never touch a
//! global connection: they reach the pool through `ServerResources` and run
//! queries through [`RecipesManager`].

mod recipes;

pub use recipes::{InsertReport, RecipesManager};

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::fs;
use tracing::{debug, info};

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};

/// Database manager for recipe storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// File databases are created (with their parent directory) when missing.
    /// In-memory databases live only as long as their single pooled
    /// connection, so that connection is never recycled.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// connection fails
    pub async fn new(url: &DatabaseUrl, max_connections: u32) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::storage(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&url.to_connection_string())
            .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        info!(database = %url, "Database connection pool ready");
        Ok(Self { pool })
    }

    /// Connect using a loaded [`DatabaseConfig`], migrating when enabled
    ///
    /// # Errors
    ///
    /// Returns an error if connecting or migrating fails
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        let database = Self::new(&config.url, config.max_connections).await?;
        if config.auto_migrate {
            database.migrate().await?;
        }
        Ok(database)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Recipe queries and inserts over this pool
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cuisine TEXT,
                title TEXT NOT NULL,
                title_folded TEXT NOT NULL,
                rating REAL,
                prep_time INTEGER,
                cook_time INTEGER,
                total_time INTEGER,
                description TEXT,
                nutrients TEXT NOT NULL DEFAULT '{}',
                serves TEXT,
                cuisine_folded TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_rating ON recipes(rating)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create recipes index: {e}")))?;

        debug!("Recipe schema is up to date");
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
