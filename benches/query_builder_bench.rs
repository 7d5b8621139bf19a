// ABOUTME: Criterion benchmarks for filter expression parsing and recipe query assembly
// ABOUTME: Measures per-request query building cost with no, some, and all filters applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for query construction.
//!
//! Query building runs on every search request before the database is touched,
//! so it should stay well under the cost of the query itself.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recipe_catalog::query::{parse_expression, NumericKind, RecipeFilters, RecipeQuery};

fn filter_sets() -> Vec<(&'static str, RecipeFilters)> {
    vec![
        ("none", RecipeFilters::default()),
        (
            "numeric",
            RecipeFilters {
                calories: Some(">300".to_owned()),
                rating: Some(">=4.5".to_owned()),
                ..RecipeFilters::default()
            },
        ),
        (
            "all",
            RecipeFilters {
                title: Some("tikka".to_owned()),
                cuisine: Some("Indian".to_owned()),
                calories: Some("<=600".to_owned()),
                total_time: Some("<60".to_owned()),
                rating: Some(">=4.5".to_owned()),
            },
        ),
    ]
}

fn bench_parse_expression(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_expression");

    for expression in ["7", "<=12.5", ">=30min", "not a number"] {
        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            &expression,
            |b, expression| {
                b.iter(|| parse_expression(black_box(expression), NumericKind::Float));
            },
        );
    }

    group.finish();
}

fn bench_search_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_query");

    for (name, filters) in filter_sets() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &filters, |b, filters| {
            b.iter(|| RecipeQuery::search(black_box(filters), Some("-calories"), 50).unwrap());
        });
    }

    group.finish();
}

fn bench_page_query(c: &mut Criterion) {
    c.bench_function("page_query", |b| {
        b.iter(|| RecipeQuery::page(black_box(Some("total_time")), 15, 30).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse_expression,
    bench_search_query,
    bench_page_query
);
criterion_main!(benches);
