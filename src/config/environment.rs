// ABOUTME: Top-level server configuration assembled from environment variables
// ABOUTME: Combines listener, CORS, and database settings and renders a secret-free summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::info;

use super::database::DatabaseConfig;
use super::network::{CorsConfig, HttpConfig};
use crate::errors::AppResult;

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listener
    pub http: HttpConfig,
    /// CORS policy
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `HOST`, `HTTP_PORT`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`,
    /// `AUTO_MIGRATE`, and `CORS_ALLOWED_ORIGINS`; unset variables fall back to
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable is set to an unusable value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http: HttpConfig::from_env()?,
            cors: CorsConfig::from_env(),
            database: DatabaseConfig::from_env()?,
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Catalog Configuration:\n\
             - Listen Address: {}\n\
             - Database: {}\n\
             - Max Connections: {}\n\
             - Auto Migrate: {}\n\
             - CORS Origins: {}",
            self.http.socket_addr(),
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite (file)"
            },
            self.database.max_connections,
            self.database.auto_migrate,
            if self.cors.allows_any_origin() {
                "*".to_owned()
            } else {
                self.cors.allowed_origins.join(", ")
            },
        )
    }
}
