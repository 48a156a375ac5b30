//! Runtime configuration for backend access.
//!
//! # Responsibility
//! - Resolve the API base URL from the deployment environment.
//! - Normalize the value so URL joining stays deterministic.
//!
//! # Invariants
//! - A missing or blank value falls back to `/api`.
//! - The resolved base URL never ends with `/`.

/// Environment variable the deployment injects before first use.
pub const ENV_API_BASE_URL: &str = "NOTES_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "/api";

/// Resolved backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all note endpoints are joined onto.
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `NOTES_API_BASE_URL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ENV_API_BASE_URL).ok().as_deref())
    }

    /// Builds a config from an explicit base URL.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::from_value(Some(base_url.as_ref()))
    }

    /// Builds a config from an optional injected value.
    pub fn from_value(value: Option<&str>) -> Self {
        Self {
            base_url: resolve_base_url(value),
        }
    }
}

fn resolve_base_url(value: Option<&str>) -> String {
    let trimmed = value.map(str::trim).unwrap_or_default();
    let without_slash = trimmed.trim_end_matches('/');
    if without_slash.is_empty() {
        return DEFAULT_API_BASE_URL.to_string();
    }
    without_slash.to_string()
}
