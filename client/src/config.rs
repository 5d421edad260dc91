//! Client configuration resolved at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so values are baked in from
//! build-time environment variables and fall back to local-development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Backend API base URL used when `INNKEEPER_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
/// Page-load timeout used by the lazy page loader.
pub const DEFAULT_PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(10);
/// Extra attempts after a failed page load.
pub const DEFAULT_PAGE_LOAD_RETRIES: u32 = 1;
/// How long success toasts stay on screen.
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_millis(3000);
/// How long error toasts stay on screen.
pub const ERROR_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Typed client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub page_load_timeout: Duration,
    pub page_load_retries: u32,
}

impl ClientConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `INNKEEPER_API_URL`: default [`DEFAULT_API_BASE_URL`]
    pub fn from_build_env() -> Self {
        Self::with_api_url(option_env!("INNKEEPER_API_URL"))
    }

    /// Build config from an optional API URL override.
    pub fn with_api_url(raw: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(raw),
            page_load_timeout: DEFAULT_PAGE_LOAD_TIMEOUT,
            page_load_retries: DEFAULT_PAGE_LOAD_RETRIES,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    value.trim_end_matches('/').to_owned()
}
