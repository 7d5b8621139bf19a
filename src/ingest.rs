// ABOUTME: Cleans raw recipe JSON documents into insertable NewRecipe records
// ABOUTME: Applies lenient numeric coercion and skips records without a usable title
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Ingestion
//!
//! Source documents are JSON objects keyed by arbitrary ids whose values are
//! recipe objects; a top-level array of recipe objects is accepted too.
//! Numeric fields are coerced leniently: numbers and numeric strings are
//! accepted, anything else becomes `null` rather than failing the record.

use std::path::Path;

use serde_json::{Map, Value};
use tokio::fs;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{NewRecipe, Nutrients};

/// Cleaned records plus the number of source entries dropped
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// Records ready for insertion, in source order
    pub recipes: Vec<NewRecipe>,
    /// Source entries without a usable title or not shaped like a recipe
    pub skipped: usize,
}

/// Clean every recipe in a source document
///
/// # Errors
///
/// Returns an invalid-input error when the document is neither an object nor
/// an array
pub fn clean_recipes(raw: &Value) -> AppResult<CleanReport> {
    let entries: Vec<&Value> = match raw {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => {
            return Err(AppError::invalid_input(
                "Recipe document must be a JSON object or array",
            ))
        }
    };

    let mut report = CleanReport::default();
    for entry in entries {
        let Some(record) = entry.as_object() else {
            warn!("Skipping recipe entry that is not an object");
            report.skipped += 1;
            continue;
        };

        match clean_recipe(record) {
            Some(recipe) => report.recipes.push(recipe),
            None => {
                warn!("Skipping recipe with missing title");
                report.skipped += 1;
            }
        }
    }

    info!(
        cleaned = report.recipes.len(),
        skipped = report.skipped,
        "Cleaned recipe document"
    );
    Ok(report)
}

/// Clean a single recipe object; `None` when it has no non-empty title
#[must_use]
pub fn clean_recipe(record: &Map<String, Value>) -> Option<NewRecipe> {
    let title = record
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())?;

    Some(NewRecipe {
        title: title.to_owned(),
        cuisine: text_field(record.get("cuisine")),
        rating: lenient_float(record.get("rating")),
        prep_time: lenient_int(record.get("prep_time")),
        cook_time: lenient_int(record.get("cook_time")),
        total_time: lenient_int(record.get("total_time")),
        description: text_field(record.get("description")),
        nutrients: match record.get("nutrients") {
            Some(Value::Object(map)) => map.clone(),
            _ => Nutrients::new(),
        },
        serves: match record.get("serves") {
            Some(Value::Number(n)) => Some(n.to_string()),
            other => text_field(other),
        },
    })
}

/// Read and clean a JSON recipe file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or has an
/// unsupported top-level shape
pub async fn load_file(path: impl AsRef<Path>) -> AppResult<CleanReport> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;

    let raw: Value = serde_json::from_str(&text)?;
    clean_recipes(&raw)
}

/// Number or numeric string as a finite `f64`
fn lenient_float(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Parse as float, then truncate toward zero
fn lenient_int(value: Option<&Value>) -> Option<i64> {
    if let Some(Value::Number(n)) = value {
        if let Some(int) = n.as_i64() {
            return Some(int);
        }
    }
    lenient_float(value).map(|f| f.trunc() as i64)
}

fn text_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}
