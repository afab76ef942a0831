//! Page fetching collaborators
//!
//! The extraction layer only needs raw markup for a URL. `PageFetcher` is
//! that seam: `HttpFetcher` talks to the wiki, `CachedFetcher` puts a TTL
//! disk cache in front of any other fetcher, and tests plug in in-memory
//! fakes.

pub mod cached;
pub mod disk_cache;
pub mod http;

use std::future::Future;
use std::pin::Pin;

use crate::error::WikiResult;

pub use cached::CachedFetcher;
pub use disk_cache::DiskCache;
pub use http::HttpFetcher;

/// Boxed future returned by [`PageFetcher::fetch`]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = WikiResult<String>> + Send + 'a>>;

/// Resolves a page URL to its raw markup.
///
/// Implementations may cache or retry internally; callers treat any error as
/// fatal for that one page.
pub trait PageFetcher: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<F> {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        (**self).fetch(url)
    }
}
