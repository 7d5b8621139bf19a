// ABOUTME: Recipe seeding utility for the recipe catalog
// ABOUTME: Cleans a raw recipe JSON document and bulk-inserts the result into the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe seeder for the recipe catalog.
//!
//! Reads a JSON document of recipes (an object keyed by id, or an array),
//! drops records without a title, coerces numeric fields, and inserts each
//! remaining record. Records the database rejects are reported and skipped.
//!
//! Usage:
//! ```bash
//! # Seed from a file (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes -- --input US_recipes.json
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --input US_recipes.json --database-url sqlite:./data/recipes.db
//!
//! # Verbose output
//! cargo run --bin seed-recipes -- --input US_recipes.json -v
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_catalog::{
    config::{DatabaseConfig, DatabaseUrl},
    database::Database,
    ingest,
    logging::LoggingConfig,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Recipe Catalog Seeder",
    long_about = "Clean a raw recipe JSON document and load it into the recipe catalog database"
)]
struct SeedArgs {
    /// Recipe JSON document to load
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging_config = LoggingConfig::from_env();
    if args.verbose {
        "debug".clone_into(&mut logging_config.level);
    }
    logging_config.init()?;

    info!("=== Recipe Catalog Seeder ===");

    let mut database_config = DatabaseConfig::from_env()?;
    if let Some(database_url) = args.database_url.as_deref() {
        database_config.url = DatabaseUrl::parse_url(database_url)?;
    }
    // Seeding always needs the schema
    database_config.auto_migrate = true;

    let report = ingest::load_file(&args.input)
        .await
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!("Connecting to database: {}", database_config.url);
    let database = Database::from_config(&database_config).await?;

    let inserted = database.recipes().insert_many(&report.recipes).await;
    let total = database.recipes().count().await?;
    database.close().await;

    info!("");
    info!("=== Seeding Complete ===");
    info!("Cleaned: {}", report.recipes.len());
    info!("Skipped while cleaning: {}", report.skipped);
    info!("Inserted: {}", inserted.inserted);
    info!("Failed to insert: {}", inserted.failed);
    info!("Recipes in catalog: {total}");

    Ok(())
}
