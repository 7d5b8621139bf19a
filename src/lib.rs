// ABOUTME: Main library entry point for the recipe catalog service
// ABOUTME: Provides recipe ingestion, a filter/sort query builder, and the HTTP listing and search API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Catalog
//!
//! A read-oriented recipe catalog. Semi-structured recipe documents are
//! cleaned and stored in `SQLite`, then served through a paginated listing
//! endpoint and a filtered search endpoint.
//!
//! ## Features
//!
//! - **Comparison filters**: `rating=>=4.5`, `total_time=<60`, `calories=<=400`
//! - **Derived calories**: the free-text `"389 kcal"` nutrient is filterable and sortable
//! - **Allow-listed sorting**: `title`, `rating`, `total_time`, `calories`, `-` for descending
//! - **Bound parameters**: user values never become SQL text
//!
//! ## Architecture
//!
//! - **Query**: expression parsing, sort resolution, and SQL assembly
//! - **Database**: pool ownership, schema migration, and recipe queries
//! - **Ingest**: cleaning raw recipe documents for insertion
//! - **Routes**: thin axum handlers over shared server resources
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_catalog::config::ServerConfig;
//! use recipe_catalog::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe catalog configured for {}", config.http.socket_addr());
//!     Ok(())
//! }
//! ```

/// Configuration loaded from environment variables
pub mod config;

/// Application constants re-exported from `recipe-core`
pub mod constants;

/// Database pool management and the recipe store
pub mod database;

/// Unified error handling re-exported from `recipe-core`
pub mod errors;

/// Cleaning raw recipe documents for insertion
pub mod ingest;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Recipe data models re-exported from `recipe-core`
pub mod models;

/// Pagination types re-exported from `recipe-core`
pub mod pagination;

/// Filter expression parsing, sort resolution, and query building
pub mod query;

/// Shared resources injected into handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
