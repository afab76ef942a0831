//! Counting-permit limiter for batch page fetches
//!
//! Bounds how many item pages are in flight at once so a full index
//! expansion doesn't hammer the wiki.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error::{WikiError, WikiResult};

/// Cloneable handle over a shared semaphore.
#[derive(Debug, Clone)]
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    max_permits: usize,
}

impl ConcurrencyLimiter {
    /// Create a limiter allowing `max_permits` concurrent holders (minimum 1)
    #[must_use]
    pub fn new(max_permits: usize) -> Self {
        let max_permits = max_permits.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(max_permits)),
            max_permits,
        }
    }

    /// Wait for a permit. It is released when the returned guard drops.
    ///
    /// # Errors
    ///
    /// Returns an error only if the semaphore was closed.
    pub async fn acquire(&self) -> WikiResult<OwnedSemaphorePermit> {
        self.semaphore.clone().acquire_owned().await.map_err(|e| {
            log::error!("Concurrency limiter semaphore closed unexpectedly: {e}");
            WikiError::Other(format!("concurrency limiter closed: {e}"))
        })
    }

    #[must_use]
    pub fn max_permits(&self) -> usize {
        self.max_permits
    }

    /// Permits not currently held
    #[must_use]
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn permits_are_returned_on_drop() {
        let limiter = ConcurrencyLimiter::new(2);
        let first = limiter.acquire().await.expect("permit");
        let _second = limiter.acquire().await.expect("permit");
        assert_eq!(limiter.available(), 0);
        drop(first);
        assert_eq!(limiter.available(), 1);
    }

    #[test]
    fn zero_is_raised_to_one() {
        assert_eq!(ConcurrencyLimiter::new(0).max_permits(), 1);
    }
}
