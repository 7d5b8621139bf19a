// ABOUTME: Route module organization for the recipe catalog HTTP endpoints
// ABOUTME: Groups handlers by domain; each domain exposes a routes() constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the recipe catalog
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the recipe store.

/// Health check, welcome, and fallback routes
pub mod health;
/// Recipe listing and search routes
pub mod recipes;

/// Health route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
