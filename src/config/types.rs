//! Core configuration types for wiki access
//!
//! This module contains the main `WikiConfig` struct that defines where pages
//! come from, how they are cached and how wide batch expansion may fan out.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::utils::{
    DEFAULT_MAX_CONCURRENT_ITEMS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    HALF_WEEK_SECONDS, ITEMS_INDEX_PATH, WIKI_BASE,
};

/// Main configuration struct for wiki operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Wiki root every page title is resolved against.
    ///
    /// **INVARIANT:** Always ends with `/` (normalized in builder), so joining
    /// a title appends to the path instead of replacing its last segment.
    pub(crate) base_url: Url,

    /// Title of the page listing every item
    pub(crate) items_index_path: String,

    /// JSON file backing the page cache
    pub(crate) cache_path: PathBuf,

    /// Age in seconds after which a cached page is refetched
    ///
    /// Default: 302400 (3.5 days), overridable through `LOLWIKI_TTL`
    pub(crate) cache_ttl_secs: u64,

    /// Route fetches through the disk cache
    pub(crate) cache_enabled: bool,

    pub(crate) user_agent: String,

    /// Timeout in seconds for a single page request
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Maximum number of item pages fetched concurrently by `expand_items`
    /// Default: 15, Range: 1-100
    pub(crate) max_concurrent_items: usize,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(WIKI_BASE).expect("BUG: WIKI_BASE constant is a valid URL"),
            items_index_path: ITEMS_INDEX_PATH.to_string(),
            cache_path: default_cache_path(),
            cache_ttl_secs: HALF_WEEK_SECONDS,
            cache_enabled: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_items: DEFAULT_MAX_CONCURRENT_ITEMS,
        }
    }
}

/// Cache location when neither the builder nor `LOLWIKI_CACHE` sets one
pub(crate) fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("lolwiki")
        .join("cache.json")
}
