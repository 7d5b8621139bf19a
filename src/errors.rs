// ABOUTME: Re-exports the unified error types from recipe-core
// ABOUTME: Keeps AppError/ErrorCode/QueryError the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::errors::*;
