// ABOUTME: Core data models for the recipe catalog
// ABOUTME: Re-exports the persisted Recipe row and the ingestion-side NewRecipe

//! # Data Models
//!
//! - `Recipe`: a stored catalog row, serialized as-is in API responses
//! - `NewRecipe`: a cleaned record ready for insertion
//! - `Nutrients`: nutrient name to display value (`"389 kcal"`)

mod recipe;

pub use recipe::{NewRecipe, Nutrients, Recipe};
