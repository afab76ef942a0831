//! Builder for `WikiConfig`
//!
//! Every field has a default, so the builder validates at `build()` instead of
//! tracking required fields in the type.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

use super::types::{WikiConfig, default_cache_path};
use crate::utils::{
    CACHE_PATH_ENV, CACHE_TTL_ENV, DEFAULT_MAX_CONCURRENT_ITEMS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, HALF_WEEK_SECONDS, ITEMS_INDEX_PATH, WIKI_BASE, normalize_base_url,
};

const MAX_CONCURRENT_ITEMS_LIMIT: usize = 100;

/// Expand a leading `~` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

pub struct WikiConfigBuilder {
    pub(crate) base_url: String,
    pub(crate) items_index_path: String,
    pub(crate) cache_path: Option<PathBuf>,
    pub(crate) cache_ttl_secs: u64,
    pub(crate) cache_enabled: bool,
    pub(crate) user_agent: String,
    pub(crate) request_timeout_secs: u64,
    pub(crate) max_concurrent_items: usize,
}

impl Default for WikiConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: WIKI_BASE.to_string(),
            items_index_path: ITEMS_INDEX_PATH.to_string(),
            cache_path: None,
            cache_ttl_secs: HALF_WEEK_SECONDS,
            cache_enabled: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_items: DEFAULT_MAX_CONCURRENT_ITEMS,
        }
    }
}

impl WikiConfig {
    /// Create a builder for configuring a `WikiConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> WikiConfigBuilder {
        WikiConfigBuilder::default()
    }

    /// Defaults with `LOLWIKI_CACHE` / `LOLWIKI_TTL` applied
    ///
    /// # Errors
    ///
    /// Returns an error if `LOLWIKI_TTL` is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        WikiConfigBuilder::default().apply_env()?.build()
    }
}

impl WikiConfigBuilder {
    /// Apply `LOLWIKI_CACHE` and `LOLWIKI_TTL` if they are set
    ///
    /// # Errors
    ///
    /// Returns an error if `LOLWIKI_TTL` is not a whole number of seconds.
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(path) = std::env::var(CACHE_PATH_ENV)
            && !path.trim().is_empty()
        {
            self.cache_path = Some(expand_home(path.trim()));
        }
        if let Ok(ttl) = std::env::var(CACHE_TTL_ENV) {
            self.cache_ttl_secs = ttl
                .trim()
                .parse()
                .map_err(|e| anyhow!("Invalid {CACHE_TTL_ENV} value '{ttl}': {e}"))?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn items_index_path(mut self, title: impl Into<String>) -> Self {
        self.items_index_path = title.into();
        self
    }

    #[must_use]
    pub fn cache_path(mut self, path: impl AsRef<Path>) -> Self {
        self.cache_path = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn cache_ttl_secs(mut self, secs: u64) -> Self {
        self.cache_ttl_secs = secs;
        self
    }

    #[must_use]
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_concurrent_items(mut self, limit: usize) -> Self {
        self.max_concurrent_items = limit;
        self
    }

    /// Validate and produce the final configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s), the index title is
    /// empty, the timeout is zero, or the concurrency limit is outside 1-100.
    pub fn build(self) -> Result<WikiConfig> {
        let base_url = normalize_base_url(&self.base_url)?;

        if self.items_index_path.trim().is_empty() {
            return Err(anyhow!("Items index path must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be at least 1 second"));
        }
        if !(1..=MAX_CONCURRENT_ITEMS_LIMIT).contains(&self.max_concurrent_items) {
            return Err(anyhow!(
                "max_concurrent_items must be between 1 and {MAX_CONCURRENT_ITEMS_LIMIT}, got {}",
                self.max_concurrent_items
            ));
        }

        Ok(WikiConfig {
            base_url,
            items_index_path: self.items_index_path,
            cache_path: self.cache_path.unwrap_or_else(default_cache_path),
            cache_ttl_secs: self.cache_ttl_secs,
            cache_enabled: self.cache_enabled,
            user_agent: self.user_agent,
            request_timeout_secs: self.request_timeout_secs,
            max_concurrent_items: self.max_concurrent_items,
        })
    }
}
