// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Request limits, configuration defaults, and fixed response messages

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Pagination and result-size limits
pub mod limits {
    /// Page used when the listing request omits `page`
    pub const DEFAULT_PAGE: i64 = 1;

    /// Page size used when the listing request omits `limit`
    pub const DEFAULT_LIST_LIMIT: i64 = 15;

    /// Result cap used when the search request omits `limit`
    pub const DEFAULT_SEARCH_LIMIT: i64 = 50;

    /// Smallest accepted `limit`
    pub const MIN_PAGE_LIMIT: i64 = 1;

    /// Largest accepted `limit`
    pub const MAX_PAGE_LIMIT: i64 = 100;
}

/// Default configuration values
pub mod defaults {
    /// HTTP port when `HTTP_PORT` is not set
    pub const HTTP_PORT: u16 = 8080;

    /// Bind address when `HOST` is not set
    pub const HOST: &str = "0.0.0.0";

    /// Database location when `DATABASE_URL` is not set
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";

    /// Pool size when `DATABASE_MAX_CONNECTIONS` is not set
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;

    /// Allowed CORS origins when `CORS_ALLOWED_ORIGINS` is not set
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const RECIPE_CATALOG_SERVER: &str = "recipe-catalog-server";
}

/// Fixed strings returned to API clients
pub mod messages {
    /// Body detail for every 5xx response; the real cause is only logged
    pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

    /// Root endpoint greeting
    pub const WELCOME: &str =
        "Welcome to the Recipe API. Use /api/recipes to browse and /api/recipes/search to filter.";
}
