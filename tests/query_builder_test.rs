// ABOUTME: Unit tests for sort resolution and recipe query assembly
// ABOUTME: Verifies predicate text, bound parameter order, filter outcomes, and sort validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use recipe_catalog::errors::QueryError;
use recipe_catalog::query::{
    BindValue, FilterField, FilterOutcome, RecipeFilters, RecipeQuery, SortDirection, SortField,
    SortSpec, CALORIES_EXPR,
};

// ============================================================================
// Sort resolution
// ============================================================================

#[test]
fn test_sort_ascending_and_descending() {
    let spec = SortSpec::parse(Some("rating")).unwrap();
    assert_eq!(spec.order_by_clause(), "rating ASC NULLS LAST, id ASC");

    let spec = SortSpec::parse(Some("-rating")).unwrap();
    assert_eq!(spec.order_by_clause(), "rating DESC NULLS LAST, id ASC");
}

#[test]
fn test_sort_defaults_to_rating_desc() {
    for sort in [None, Some("")] {
        let spec = SortSpec::parse(sort).unwrap();
        assert_eq!(spec.field, SortField::Rating);
        assert_eq!(spec.direction, SortDirection::Desc);
    }
}

#[test]
fn test_sort_by_calories_uses_derived_expression() {
    let spec = SortSpec::parse(Some("-calories")).unwrap();
    assert_eq!(
        spec.order_by_clause(),
        format!("{CALORIES_EXPR} DESC NULLS LAST, id ASC")
    );
    assert_eq!(spec.to_string(), "-calories");
}

#[test]
fn test_unknown_sort_is_rejected() {
    assert_eq!(
        SortSpec::parse(Some("bogus")),
        Err(QueryError::invalid_sort_field("bogus"))
    );

    let error = SortSpec::parse(Some("-bogus")).unwrap_err();
    assert_eq!(error.to_string(), "Invalid sort field: bogus");

    // Sort keys are case-sensitive and injected SQL never resolves
    assert!(SortSpec::parse(Some("Rating")).is_err());
    assert!(SortSpec::parse(Some("rating; DROP TABLE recipes")).is_err());
    assert!(SortSpec::parse(Some("--rating")).is_err());
}

// ============================================================================
// Query assembly
// ============================================================================

#[test]
fn test_no_filters_matches_everything() {
    let query = RecipeQuery::search(&RecipeFilters::default(), None, 50).unwrap();

    assert!(query.sql().contains("WHERE 1 = 1 ORDER BY"));
    assert!(query.sql().ends_with("LIMIT $1"));
    assert_eq!(query.binds(), &[BindValue::Integer(50)]);
    assert_eq!(query.applied_filters().count(), 0);
}

#[test]
fn test_all_filters_bind_in_order() {
    let filters = RecipeFilters {
        title: Some("tikka".to_owned()),
        cuisine: Some("Indian".to_owned()),
        calories: Some(">300".to_owned()),
        total_time: Some("<=60".to_owned()),
        rating: Some(">=4.5".to_owned()),
    };
    let query = RecipeQuery::search(&filters, Some("title"), 20).unwrap();

    let sql = query.sql();
    assert!(sql.contains("title_folded LIKE $1 ESCAPE '\\'"));
    assert!(sql.contains("cuisine_folded = $2"));
    assert!(sql.contains("total_time <= $3"));
    assert!(sql.contains("rating >= $4"));
    assert!(sql.contains(&format!("{CALORIES_EXPR} > $5")));
    assert!(sql.contains("ORDER BY title ASC NULLS LAST, id ASC LIMIT $6"));

    assert_eq!(
        query.binds(),
        &[
            BindValue::Text("%tikka%".to_owned()),
            BindValue::Text("indian".to_owned()),
            BindValue::Integer(60),
            BindValue::Real(4.5),
            BindValue::Integer(300),
            BindValue::Integer(20),
        ]
    );

    for field in [
        FilterField::Title,
        FilterField::Cuisine,
        FilterField::Calories,
        FilterField::TotalTime,
        FilterField::Rating,
    ] {
        assert_eq!(query.outcome(field), FilterOutcome::Applied);
    }
}

#[test]
fn test_malformed_and_empty_filters_are_skipped() {
    let filters = RecipeFilters {
        title: Some(String::new()),
        cuisine: None,
        calories: Some("lots".to_owned()),
        total_time: Some("<=".to_owned()),
        rating: Some(">4".to_owned()),
    };
    let query = RecipeQuery::search(&filters, None, 10).unwrap();

    assert_eq!(query.outcome(FilterField::Title), FilterOutcome::Skipped);
    assert_eq!(query.outcome(FilterField::Cuisine), FilterOutcome::Skipped);
    assert_eq!(query.outcome(FilterField::Calories), FilterOutcome::Skipped);
    assert_eq!(query.outcome(FilterField::TotalTime), FilterOutcome::Skipped);
    assert_eq!(query.outcome(FilterField::Rating), FilterOutcome::Applied);

    assert!(query.sql().contains("WHERE 1 = 1 AND rating > $1 ORDER BY"));
    assert_eq!(
        query.binds(),
        &[BindValue::Real(4.0), BindValue::Integer(10)]
    );
}

#[test]
fn test_user_text_is_bound_not_interpolated() {
    let filters = RecipeFilters {
        title: Some("'; DROP TABLE recipes; --".to_owned()),
        cuisine: Some("x' OR '1'='1".to_owned()),
        ..RecipeFilters::default()
    };
    let query = RecipeQuery::search(&filters, None, 10).unwrap();

    assert!(!query.sql().contains("DROP TABLE"));
    assert!(!query.sql().contains("OR '1'='1"));
    assert_eq!(
        query.binds()[1],
        BindValue::Text("x' or '1'='1".to_owned())
    );
}

#[test]
fn test_text_filters_are_unicode_case_folded() {
    let filters = RecipeFilters {
        title: Some("CRÈME".to_owned()),
        cuisine: Some("FRANÇAISE".to_owned()),
        ..RecipeFilters::default()
    };
    let query = RecipeQuery::search(&filters, None, 10).unwrap();

    assert_eq!(
        &query.binds()[..2],
        &[
            BindValue::Text("%crème%".to_owned()),
            BindValue::Text("française".to_owned()),
        ]
    );
}

#[test]
fn test_like_wildcards_in_title_are_escaped() {
    let filters = RecipeFilters {
        title: Some("100%_real".to_owned()),
        ..RecipeFilters::default()
    };
    let query = RecipeQuery::search(&filters, None, 10).unwrap();

    assert_eq!(
        query.binds()[0],
        BindValue::Text("%100\\%\\_real%".to_owned())
    );
}

#[test]
fn test_page_query_binds_limit_and_offset() {
    let query = RecipeQuery::page(Some("-total_time"), 15, 30).unwrap();

    assert!(query
        .sql()
        .ends_with("ORDER BY total_time DESC NULLS LAST, id ASC LIMIT $1 OFFSET $2"));
    assert_eq!(
        query.binds(),
        &[BindValue::Integer(15), BindValue::Integer(30)]
    );
}

#[test]
fn test_invalid_sort_fails_before_building() {
    let filters = RecipeFilters {
        rating: Some(">4".to_owned()),
        ..RecipeFilters::default()
    };

    assert!(matches!(
        RecipeQuery::search(&filters, Some("bogus"), 10),
        Err(QueryError::InvalidSortField(name)) if name == "bogus"
    ));
    assert!(RecipeQuery::page(Some("-"), 15, 0).is_err());
}
