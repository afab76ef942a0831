pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod utils;

pub use client::{ConcurrencyLimiter, SharedFetcher, WikiClient};
pub use config::{WikiConfig, WikiConfigBuilder};
pub use error::{WikiError, WikiResult};
pub use extractors::schema::*;
pub use extractors::{
    extract_abilities, extract_base_stats, extract_champion, extract_champion_document,
    extract_item, extract_item_index, extract_item_index_with_base, extract_item_page,
};
pub use fetcher::{CachedFetcher, DiskCache, FetchFuture, HttpFetcher, PageFetcher};
pub use utils::page_url;
