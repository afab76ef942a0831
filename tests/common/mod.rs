//! Test utilities and fixtures shared by the lolwiki test suite

use kodegen_tools_lolwiki::{FetchFuture, PageFetcher, WikiConfig, WikiError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route extraction logs to the test writer; filter with `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory for cache files
#[allow(dead_code)]
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Wraps body markup in a minimal page
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// Champion page with a base stats table and a single Q ability
#[allow(dead_code)]
pub fn champion_fixture() -> String {
    create_test_html(
        "Test Champion",
        r#"
        <h2>Base Stats</h2>
        <table>
          <tr><th>Health</th><td>500</td></tr>
          <tr><th>Mana</th><td>300</td></tr>
        </table>
        <h3>Q: Test Ability</h3>
        <div><p>Cooldown: 10s</p><p>Cost: 50 Mana</p><p>Range: 600</p></div>
        "#,
    )
}

/// Index page with one item link followed by a tag chip
#[allow(dead_code)]
pub fn index_fixture() -> String {
    create_test_html(
        "List of items",
        r#"
        <a href="/Item_One">Item One</a>
        <span class="tag">Legendary</span>
        "#,
    )
}

/// Item page with a rarity category, an info-box stat and a passive
#[allow(dead_code)]
pub fn item_fixture() -> String {
    create_test_html(
        "Item One",
        r#"
        <div class="mw-normal-catlinks">
          <a>Legendary items</a>
        </div>
        <div class="pi-theme-item">
          <li>+10 Attack Damage</li>
        </div>
        <p>Passive: Grants speed</p>
        "#,
    )
}

/// Config pointing at a local test host with the disk cache off
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> WikiConfig {
    WikiConfig::builder()
        .base_url(base_url)
        .cache_enabled(false)
        .build()
        .expect("Failed to build test config")
}

/// In-memory fetcher serving canned pages by URL.
///
/// Unknown URLs fail with a 404 status error. Fetched URLs are recorded so
/// tests can assert on request counts.
#[allow(dead_code)]
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

#[allow(dead_code)]
impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// Serve a 500 for `url` even if a page is registered
    pub fn with_failure(mut self, url: impl Into<String>) -> Self {
        self.failing.insert(url.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    async fn serve(&self, url: &str) -> Result<String, WikiError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(url.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(url) {
            return Err(WikiError::Status {
                url: url.to_string(),
                status: 500,
            });
        }
        self.pages.get(url).cloned().ok_or_else(|| WikiError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

impl PageFetcher for StaticFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(self.serve(url))
    }
}
