// ABOUTME: Core types and constants for the recipe catalog service
// ABOUTME: Foundation crate with error handling, recipe models, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! catalog service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and query errors
//! - **constants**: Limits, defaults, and response messages
//! - **pagination**: Page/limit validation and paginated response envelopes
//! - **models**: The persisted `Recipe` and the ingestion-side `NewRecipe`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Page-number pagination and response envelopes
pub mod pagination;

/// Recipe data models
pub mod models;
