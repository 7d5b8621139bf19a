// ABOUTME: Integration tests for recipe document cleaning and file loading
// ABOUTME: Covers keyed and array documents, skipped titles, lenient numbers, and load failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use std::fs;

use recipe_catalog::errors::ErrorCode;
use recipe_catalog::ingest::{clean_recipe, clean_recipes, load_file};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_keyed_document_is_cleaned() {
    let raw = json!({
        "0": {
            "title": "Sweet Potato Pie",
            "cuisine": "Southern Recipes",
            "rating": 4.8,
            "prep_time": 15,
            "cook_time": 100,
            "total_time": 115,
            "description": "Classic pie",
            "nutrients": { "calories": "389 kcal", "fatContent": "21 g" },
            "serves": "8 servings"
        },
        "1": { "title": "Plain Rice" }
    });

    let report = clean_recipes(&raw).unwrap();

    assert_eq!(report.skipped, 0);
    assert_eq!(report.recipes.len(), 2);
    let pie = report
        .recipes
        .iter()
        .find(|r| r.title == "Sweet Potato Pie")
        .unwrap();
    assert_eq!(pie.cuisine.as_deref(), Some("Southern Recipes"));
    assert_eq!(pie.rating, Some(4.8));
    assert_eq!(pie.total_time, Some(115));
    assert_eq!(pie.nutrients["calories"], "389 kcal");
    assert_eq!(pie.serves.as_deref(), Some("8 servings"));

    let rice = report.recipes.iter().find(|r| r.title == "Plain Rice").unwrap();
    assert_eq!(rice.rating, None);
    assert!(rice.nutrients.is_empty());
}

#[test]
fn test_array_document_skips_unusable_entries() {
    let raw = json!([
        { "title": "Garden Salad" },
        { "title": "   " },
        { "cuisine": "Nameless" },
        { "title": 42 },
        "not a recipe",
        { "title": "Paneer Tikka" }
    ]);

    let report = clean_recipes(&raw).unwrap();

    let titles: Vec<&str> = report.recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Garden Salad", "Paneer Tikka"]);
    assert_eq!(report.skipped, 4);
}

#[test]
fn test_scalar_document_is_rejected() {
    let error = clean_recipes(&json!("recipes")).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_numbers_are_coerced_leniently() {
    let raw = json!({
        "title": "Lenient",
        "rating": "4.5",
        "prep_time": "NaN",
        "cook_time": 12.9,
        "total_time": "30",
        "nutrients": "not an object",
        "serves": 4
    });

    let recipe = clean_recipe(raw.as_object().unwrap()).unwrap();

    assert_eq!(recipe.rating, Some(4.5));
    assert_eq!(recipe.prep_time, None);
    assert_eq!(recipe.cook_time, Some(12));
    assert_eq!(recipe.total_time, Some(30));
    assert!(recipe.nutrients.is_empty());
    assert_eq!(recipe.serves.as_deref(), Some("4"));
}

#[tokio::test]
async fn test_load_file_then_insert() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(
        &path,
        r#"{"a": {"title": "Chicken Tikka Masala", "nutrients": {"calories": "389 kcal"}},
            "b": {"title": ""}}"#,
    )
    .unwrap();

    let report = load_file(&path).await.unwrap();
    assert_eq!(report.recipes.len(), 1);
    assert_eq!(report.skipped, 1);

    let database = common::create_test_database().await;
    let inserted = database.recipes().insert_many(&report.recipes).await;
    assert_eq!(inserted.inserted, 1);
    assert_eq!(database.recipes().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_load_file_failures() {
    let dir = TempDir::new().unwrap();

    let missing = load_file(dir.path().join("missing.json")).await.unwrap_err();
    assert_eq!(missing.code, ErrorCode::StorageError);

    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let broken = load_file(&path).await.unwrap_err();
    assert_eq!(broken.code, ErrorCode::SerializationError);
}
