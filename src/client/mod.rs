//! Extraction orchestrator
//!
//! `WikiClient` turns page titles into records: resolve the title against the
//! configured wiki root, fetch markup through a [`PageFetcher`], hand it to
//! the matching extractor.

pub mod limiter;

use futures::future::join_all;
use std::sync::Arc;

pub use limiter::ConcurrencyLimiter;

use crate::config::WikiConfig;
use crate::error::{WikiError, WikiResult};
use crate::extractors::{
    ChampionRecord, ItemEntry, ItemRecord, ItemSummary, extract_champion, extract_item,
    extract_item_index_with_base,
};
use crate::fetcher::{CachedFetcher, DiskCache, HttpFetcher, PageFetcher};
use crate::utils::page_url;

/// Fetcher stack chosen by [`WikiClient::new`]
pub type SharedFetcher = Arc<dyn PageFetcher>;

/// Async wiki client generic over its page source.
pub struct WikiClient<F = SharedFetcher> {
    config: WikiConfig,
    fetcher: F,
    limiter: ConcurrencyLimiter,
}

impl WikiClient {
    /// Client over HTTP, fronted by the disk cache when it is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the cache file
    /// cannot be created.
    pub async fn new(config: WikiConfig) -> WikiResult<Self> {
        let http = HttpFetcher::new(&config)?;
        let fetcher: SharedFetcher = if config.cache_enabled() {
            let cache = DiskCache::open(config.cache_path(), config.cache_ttl()).await?;
            tracing::debug!(path = %config.cache_path().display(), "page cache enabled");
            Arc::new(CachedFetcher::new(http, cache))
        } else {
            Arc::new(http)
        };
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Client configured from defaults plus `LOLWIKI_CACHE` / `LOLWIKI_TTL`
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Config`] for invalid environment values, or any
    /// error from [`WikiClient::new`].
    pub async fn from_env() -> WikiResult<Self> {
        let config = WikiConfig::from_env().map_err(|e| WikiError::Config(format!("{e:#}")))?;
        Self::new(config).await
    }
}

impl<F: PageFetcher> WikiClient<F> {
    /// Client over an arbitrary fetcher
    pub fn with_fetcher(config: WikiConfig, fetcher: F) -> Self {
        let limiter = ConcurrencyLimiter::new(config.max_concurrent_items());
        Self {
            config,
            fetcher,
            limiter,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Absolute URL for a page title
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::InvalidUrl`] if the encoded title cannot be joined
    /// onto the base URL.
    pub fn page_url(&self, title: &str) -> WikiResult<String> {
        page_url(self.config.base_url(), title)
    }

    async fn fetch_page(&self, title: &str) -> WikiResult<(String, String)> {
        let url = self.page_url(title)?;
        let html = self.fetcher.fetch(&url).await?;
        Ok((url, html))
    }

    /// Fetch and extract a champion page
    ///
    /// # Errors
    ///
    /// Propagates URL and fetch failures. Missing page structure is not an
    /// error; it yields empty fields.
    pub async fn get_champion(&self, name: &str) -> WikiResult<ChampionRecord> {
        let (url, html) = self.fetch_page(name).await?;
        let record = extract_champion(name, &url, &html);
        tracing::debug!(
            champion = name,
            stats = record.base_stats.len(),
            spells = record.spells.len(),
            "extracted champion"
        );
        Ok(record)
    }

    /// Fetch and extract a single item page
    ///
    /// # Errors
    ///
    /// Propagates URL and fetch failures.
    pub async fn get_item(&self, name: &str) -> WikiResult<ItemRecord> {
        let (url, html) = self.fetch_page(name).await?;
        let record = extract_item(name, &url, &html);
        tracing::debug!(
            item = name,
            stats = record.stats.len(),
            rarity = record.rarity.as_deref().unwrap_or(""),
            "extracted item"
        );
        Ok(record)
    }

    /// Fetch the item index page and list its items
    ///
    /// # Errors
    ///
    /// Propagates URL and fetch failures for the index page.
    pub async fn list_items(&self) -> WikiResult<Vec<ItemSummary>> {
        let (_, html) = self.fetch_page(self.config.items_index_path()).await?;
        Ok(extract_item_index_with_base(&html, self.config.base_url()))
    }

    /// Fetch every summarized item, at most `max_concurrent_items` at a time.
    ///
    /// Output order matches `rows`. An item whose fetch fails is returned as
    /// [`ItemEntry::Failed`] and does not affect the others.
    pub async fn expand_items(&self, rows: Vec<ItemSummary>) -> Vec<ItemEntry> {
        let loads = rows.into_iter().map(|summary| async move {
            match self.load_item(&summary.name).await {
                Ok(record) => ItemEntry::Full(record),
                Err(e) => {
                    tracing::warn!(item = %summary.name, error = %e, "item expansion failed");
                    ItemEntry::Failed {
                        summary,
                        error: e.to_string(),
                    }
                }
            }
        });
        join_all(loads).await
    }

    /// [`list_items`](Self::list_items) followed by [`expand_items`](Self::expand_items)
    ///
    /// # Errors
    ///
    /// Fails only if the index page itself cannot be fetched.
    pub async fn list_items_expanded(&self) -> WikiResult<Vec<ItemEntry>> {
        let rows = self.list_items().await?;
        Ok(self.expand_items(rows).await)
    }

    async fn load_item(&self, name: &str) -> WikiResult<ItemRecord> {
        let _permit = self.limiter.acquire().await?;
        self.get_item(name).await
    }
}
