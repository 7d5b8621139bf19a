// ABOUTME: Re-exports application constants from recipe-core
// ABOUTME: Limits, defaults, service names, and fixed response messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::constants::*;
