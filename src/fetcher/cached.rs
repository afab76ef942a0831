//! Read-through cache in front of another fetcher

use super::{DiskCache, FetchFuture, PageFetcher};
use crate::error::WikiResult;

/// Serves fresh pages from a [`DiskCache`], otherwise fetches through the
/// inner fetcher and stores the body.
///
/// A failed cache write is logged and the fetched page still returned.
pub struct CachedFetcher<F> {
    inner: F,
    cache: DiskCache,
}

impl<F: PageFetcher> CachedFetcher<F> {
    pub fn new(inner: F, cache: DiskCache) -> Self {
        Self { inner, cache }
    }

    #[must_use]
    pub fn inner(&self) -> &F {
        &self.inner
    }

    #[must_use]
    pub fn cache(&self) -> &DiskCache {
        &self.cache
    }

    async fn fetch_cached(&self, url: &str) -> WikiResult<String> {
        if let Some(html) = self.cache.get(url).await {
            tracing::debug!(url, "page cache hit");
            return Ok(html);
        }

        let html = self.inner.fetch(url).await?;
        if let Err(e) = self.cache.set(url, &html).await {
            tracing::warn!(url, error = %e, "failed to store page in cache");
        }
        Ok(html)
    }
}

impl<F: PageFetcher> PageFetcher for CachedFetcher<F> {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(self.fetch_cached(url))
    }
}
