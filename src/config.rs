//! Session configuration parsed from environment variables.
//!
//! In the browser there is no process environment, so `from_env` yields the
//! defaults there; native builds (SSR, tests) can override them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://jobify-prod.herokuapp.com/api/v1/toolkit";
pub const DEFAULT_USER_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Base URL the `/auth/*` paths are appended to, without trailing `/`.
    pub api_base_url: String,
    /// `localStorage` key holding the serialized user.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

impl SessionConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `JOBSTER_API_BASE_URL`: default [`DEFAULT_API_BASE_URL`]
    /// - `JOBSTER_USER_STORAGE_KEY`: default [`DEFAULT_USER_STORAGE_KEY`]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("JOBSTER_API_BASE_URL").ok().as_deref(),
            std::env::var("JOBSTER_USER_STORAGE_KEY").ok().as_deref(),
        )
    }

    /// Build config from raw values; blank values fall back to defaults.
    #[must_use]
    pub fn from_vars(api_base_url: Option<&str>, storage_key: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let storage_key = non_blank(storage_key).unwrap_or(DEFAULT_USER_STORAGE_KEY).to_string();
        Self { api_base_url, storage_key }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
