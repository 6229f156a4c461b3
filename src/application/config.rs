/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    API_PREFIX, DEFAULT_APP_ORIGIN, DEFAULT_TOKEN_FILE, ENV_API_BASE_URL, ENV_APP_ORIGIN,
    ENV_TOKEN_FILE,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Kavya API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Location of the persistent token file used by `FileTokenStore`
    pub token_file: PathBuf,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every resource path is appended to, e.g. `https://host/api` or `/api`
    pub base_url: String,
    /// Origin used to turn a relative base URL into an absolute one
    pub origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// `KAVYA_API_BASE_URL` is the backend root; `/api` is appended to it.
    /// When it is unset the base URL is the relative path `/api`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let root: Option<String> = get_env_or_none(ENV_API_BASE_URL);
        if root.is_none() {
            debug!("{ENV_API_BASE_URL} not set, using relative base {API_PREFIX}");
        }

        Config {
            rest_api: RestApiConfig {
                base_url: base_url_from_root(root.as_deref()),
                origin: get_env_or_default(ENV_APP_ORIGIN, String::from(DEFAULT_APP_ORIGIN)),
            },
            token_file: get_env_or_default(ENV_TOKEN_FILE, PathBuf::from(DEFAULT_TOKEN_FILE)),
        }
    }

    /// Creates a configuration pointing at an explicit backend root
    ///
    /// `/api` is appended exactly as it is for the environment value, so
    /// `with_base_url("https://host")` targets `https://host/api/...`.
    pub fn with_base_url(root: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url_from_root(Some(root)),
                origin: String::from(DEFAULT_APP_ORIGIN),
            },
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        }
    }

    /// Process-wide configuration, resolved from the environment on first use
    /// and immutable afterwards
    pub fn global() -> &'static Config {
        &GLOBAL_CONFIG
    }

    /// Concatenates the base URL with a resource path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.rest_api.base_url, path)
        } else {
            format!("{}/{}", self.rest_api.base_url, path)
        }
    }

    /// Turns a URL produced by [`Config::url_for`] into an absolute URL
    ///
    /// Absolute URLs are returned untouched; relative ones are prefixed with the origin.
    #[must_use]
    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        let origin = self.rest_api.origin.trim_end_matches('/');
        if url.starts_with('/') {
            format!("{origin}{url}")
        } else {
            format!("{origin}/{url}")
        }
    }

    /// True when the base URL carries its own scheme and host
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        let base = &self.rest_api.base_url;
        base.starts_with("http://") || base.starts_with("https://")
    }
}

fn base_url_from_root(root: Option<&str>) -> String {
    match root.map(|r| r.trim().trim_end_matches('/')) {
        Some(r) if !r.is_empty() => format!("{r}{API_PREFIX}"),
        _ => API_PREFIX.to_string(),
    }
}
