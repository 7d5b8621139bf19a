// ABOUTME: HTTP server binary for the recipe catalog API
// ABOUTME: Loads configuration, initializes logging, connects the database, and serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog Server Binary
//!
//! Usage:
//! ```bash
//! # Serve with configuration from the environment
//! cargo run --bin recipe-catalog-server
//!
//! # Override the HTTP port
//! cargo run --bin recipe-catalog-server -- --http-port 9000
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use recipe_catalog::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Recipe Catalog API - paginated listing and filtered search over recipes")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http.port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    info!("Starting Recipe Catalog API");
    info!("{}", config.summary());

    let database = Database::from_config(&config.database).await?;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    if let Err(e) = server::serve(resources).await {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    Ok(())
}
