// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads listener, CORS, and database settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the recipe catalog
//!
//! - **Environment**: `ServerConfig` assembled from environment variables
//! - **Network**: listener address and CORS origins
//! - **Database**: `SQLite` location, pool size, and migration switch

/// Database location and pool configuration
pub mod database;
/// Top-level server configuration
pub mod environment;
/// Listener and CORS configuration
pub mod network;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::ServerConfig;
pub use network::{CorsConfig, HttpConfig};
