// ABOUTME: Health check and welcome route handlers for service monitoring
// ABOUTME: Provides the root greeting, a liveness endpoint, and the JSON 404 fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use axum::{http::Uri, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::messages;
use crate::errors::AppError;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn welcome_handler() -> Json<Value> {
            Json(json!({ "message": messages::WELCOME }))
        }

        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(welcome_handler))
            .route("/health", get(health_handler))
    }

    /// Fallback for unknown paths: 404 with a `{detail}` body
    pub async fn not_found(uri: Uri) -> AppError {
        AppError::not_found(format!("Route {}", uri.path()))
    }
}
