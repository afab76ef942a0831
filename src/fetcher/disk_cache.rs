//! TTL page cache stored as a single JSON file
//!
//! Layout: `{ "<url>": { "ts": <unix seconds>, "html": "<markup>" } }`.
//! Writes go to a sibling temp file that is renamed over the original, so a
//! crash mid-write never leaves a truncated cache behind.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

use crate::error::{WikiError, WikiResult};

type CacheMap = HashMap<String, CacheEntry>;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    #[serde(default)]
    ts: f64,
    #[serde(default)]
    html: String,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration, now: f64) -> bool {
        now - self.ts < ttl.as_secs_f64()
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

/// Page cache keyed by URL with a fixed time-to-live.
///
/// A `Mutex` serializes read-modify-write cycles so concurrent item fetches
/// don't drop each other's entries.
pub struct DiskCache {
    path: PathBuf,
    ttl: Duration,
    lock: Mutex<()>,
}

impl DiskCache {
    /// Open (creating if needed) the cache file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or an empty cache file
    /// cannot be created.
    pub async fn open(path: impl Into<PathBuf>, ttl: Duration) -> WikiResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let cache = Self {
            path,
            ttl,
            lock: Mutex::new(()),
        };
        if !tokio::fs::try_exists(&cache.path).await? {
            cache.write_all(CacheMap::new()).await?;
            log::debug!("Created page cache at {}", cache.path.display());
        }
        Ok(cache)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached markup for `key`, unless missing, empty or older than the TTL.
    pub async fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().await;
        let mut data = self.read_all().await;
        let entry = data.remove(key)?;
        (entry.is_fresh(self.ttl, unix_now()) && !entry.html.is_empty()).then_some(entry.html)
    }

    /// Store `html` under `key`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file cannot be written.
    pub async fn set(&self, key: &str, html: &str) -> WikiResult<()> {
        let _guard = self.lock.lock().await;
        let mut data = self.read_all().await;
        data.insert(
            key.to_string(),
            CacheEntry {
                ts: unix_now(),
                html: html.to_string(),
            },
        );
        self.write_all(data).await
    }

    /// Whole cache contents; unreadable or corrupt files read as empty.
    async fn read_all(&self) -> CacheMap {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("Page cache {} unreadable: {e}", self.path.display());
                return CacheMap::new();
            }
        };

        let parsed = tokio::task::spawn_blocking(move || serde_json::from_slice::<CacheMap>(&bytes))
            .await;
        match parsed {
            Ok(Ok(data)) => data,
            Ok(Err(e)) => {
                log::debug!("Page cache {} corrupt, starting empty: {e}", self.path.display());
                CacheMap::new()
            }
            Err(e) => {
                log::debug!("Page cache parse task failed: {e}");
                CacheMap::new()
            }
        }
    }

    async fn write_all(&self, data: CacheMap) -> WikiResult<()> {
        // Serialization can be large (full page markup), keep it off the runtime.
        let bytes = tokio::task::spawn_blocking(move || serde_json::to_vec(&data))
            .await
            .map_err(|e| WikiError::Other(format!("Cache serialization task failed: {e}")))??;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
