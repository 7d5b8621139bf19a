// ABOUTME: Re-exports recipe data models from recipe-core
// ABOUTME: Recipe, NewRecipe, and Nutrients share one definition across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::models::*;
