// ABOUTME: Network configuration types for the HTTP listener and CORS policy
// ABOUTME: Reads bind address, port, and allowed origins from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use super::database::env_var_or;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP API port
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: defaults::HTTP_PORT,
        }
    }
}

impl HttpConfig {
    /// Load listener configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` is not an IP address or `HTTP_PORT` is not a port number
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            host: env_var_or("HOST", defaults::HOST)
                .parse()
                .map_err(|e| AppError::config(format!("Invalid HOST value: {e}")))?,
            port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT value: {e}")))?,
        })
    }

    /// Socket address to bind
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; a single `"*"` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(defaults::CORS_ALLOWED_ORIGINS),
        }
    }
}

impl CorsConfig {
    /// Load CORS configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            allowed_origins: parse_origins(&env_var_or(
                "CORS_ALLOWED_ORIGINS",
                defaults::CORS_ALLOWED_ORIGINS,
            )),
        }
    }

    /// Whether every origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
