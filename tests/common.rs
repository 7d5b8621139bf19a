// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, seeded recipe fixtures, and a test router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_catalog`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::{Arc, Once};

use axum::Router;
use recipe_catalog::{
    config::{DatabaseConfig, ServerConfig},
    database::Database,
    models::{NewRecipe, Nutrients},
    resources::ServerResources,
    server::build_router,
};
use serde_json::json;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh, migrated in-memory database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::from_config(&DatabaseConfig::in_memory())
        .await
        .unwrap()
}

/// Recipe with the given title and optional numeric fields
pub fn recipe(
    title: &str,
    cuisine: Option<&str>,
    rating: Option<f64>,
    total_time: Option<i64>,
    calories: Option<&str>,
) -> NewRecipe {
    let mut nutrients = Nutrients::new();
    if let Some(calories) = calories {
        nutrients.insert("calories".to_owned(), json!(calories));
    }

    NewRecipe {
        cuisine: cuisine.map(str::to_owned),
        rating,
        total_time,
        nutrients,
        ..NewRecipe::titled(title)
    }
}

/// Small catalog with varied cuisines, ratings, times, and calories
pub fn sample_recipes() -> Vec<NewRecipe> {
    vec![
        recipe(
            "Chicken Tikka Masala",
            Some("Indian"),
            Some(4.8),
            Some(60),
            Some("389 kcal"),
        ),
        recipe(
            "Garden Salad",
            Some("American"),
            Some(4.1),
            Some(10),
            Some("250 kcal"),
        ),
        recipe(
            "Sweet Potato Pie",
            Some("Southern Recipes"),
            Some(4.5),
            Some(115),
            Some("512 kcal"),
        ),
        recipe("Plain Rice", Some("Asian"), None, Some(25), None),
        recipe(
            "Paneer Tikka",
            Some("indian"),
            Some(3.9),
            None,
            Some("301 kcal"),
        ),
    ]
}

/// In-memory database preloaded with `recipes`
pub async fn create_seeded_database(recipes: &[NewRecipe]) -> Database {
    let database = create_test_database().await;
    let report = database.recipes().insert_many(recipes).await;
    assert_eq!(report.failed, 0);
    database
}

/// Router over a seeded in-memory database, plus the resources behind it
pub async fn create_test_app(recipes: &[NewRecipe]) -> (Router, Arc<ServerResources>) {
    let database = create_seeded_database(recipes).await;
    let config = ServerConfig {
        database: DatabaseConfig::in_memory(),
        ..ServerConfig::default()
    };
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    (build_router(Arc::clone(&resources)), resources)
}
