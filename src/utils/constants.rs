//! Shared configuration constants for lolwiki
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Wiki root that page titles are resolved against
pub const WIKI_BASE: &str = "https://wiki.leagueoflegends.com/en-us/";

/// Title of the page listing every item
pub const ITEMS_INDEX_PATH: &str = "List of items";

/// Default cache TTL: 3.5 days
///
/// Wiki pages change with patches, roughly every two weeks. Half a week keeps
/// repeated runs cheap while still picking up balance changes quickly.
pub const HALF_WEEK_SECONDS: u64 = 3 * 24 * 60 * 60 + 12 * 60 * 60;

/// Default number of item pages fetched concurrently during expansion
pub const DEFAULT_MAX_CONCURRENT_ITEMS: usize = 15;

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every wiki request
pub const DEFAULT_USER_AGENT: &str = "lolwiki/0.1 (+https://github.com/cyrup-ai/kodegen-tools-lolwiki)";

/// Environment variable overriding the cache file location
pub const CACHE_PATH_ENV: &str = "LOLWIKI_CACHE";

/// Environment variable overriding the cache TTL (seconds)
pub const CACHE_TTL_ENV: &str = "LOLWIKI_TTL";
