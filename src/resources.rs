// ABOUTME: Centralized resource container for dependency injection into HTTP handlers
// ABOUTME: Holds the database pool and loaded configuration shared by every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Handlers receive `State<Arc<ServerResources>>` and reach the pool through
//! it; nothing in the request path opens its own connection.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database::{Database, RecipesManager};

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Recipe store connection pool
    pub database: Arc<Database>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle a connected database with its configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }

    /// Recipe store operations
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        self.database.recipes()
    }
}
