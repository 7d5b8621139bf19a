// ABOUTME: Recipe data model shared by storage, ingestion, and HTTP responses
// ABOUTME: Optional fields are Option values so absence never collides with real data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nutrient name to display string, e.g. `"calories" -> "389 kcal"`
///
/// Values are kept exactly as ingested; unit suffixes are only stripped when a
/// nutrient is used for filtering or sorting.
pub type Nutrients = Map<String, Value>;

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier
    pub id: i64,
    /// Display title, never empty
    pub title: String,
    /// Cuisine label
    pub cuisine: Option<String>,
    /// Average rating, conventionally 0-5
    pub rating: Option<f64>,
    /// Preparation time in minutes
    pub prep_time: Option<i64>,
    /// Cooking time in minutes
    pub cook_time: Option<i64>,
    /// Total time in minutes
    pub total_time: Option<i64>,
    /// Free-text description
    pub description: Option<String>,
    /// Nutrient table; empty object when the source had none
    #[serde(default)]
    pub nutrients: Nutrients,
    /// Free-form serving description
    pub serves: Option<String>,
}

/// A cleaned recipe awaiting insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Display title, never empty
    pub title: String,
    /// Cuisine label
    pub cuisine: Option<String>,
    /// Average rating
    pub rating: Option<f64>,
    /// Preparation time in minutes
    pub prep_time: Option<i64>,
    /// Cooking time in minutes
    pub cook_time: Option<i64>,
    /// Total time in minutes
    pub total_time: Option<i64>,
    /// Free-text description
    pub description: Option<String>,
    /// Nutrient table
    #[serde(default)]
    pub nutrients: Nutrients,
    /// Free-form serving description
    pub serves: Option<String>,
}

impl NewRecipe {
    /// Create a recipe with only a title set
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cuisine: None,
            rating: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            description: None,
            nutrients: Nutrients::new(),
            serves: None,
        }
    }

    /// Attach the stored identifier
    #[must_use]
    pub fn into_recipe(self, id: i64) -> Recipe {
        Recipe {
            id,
            title: self.title,
            cuisine: self.cuisine,
            rating: self.rating,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            total_time: self.total_time,
            description: self.description,
            nutrients: self.nutrients,
            serves: self.serves,
        }
    }
}
