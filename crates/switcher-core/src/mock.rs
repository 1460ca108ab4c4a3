//! Mock item source.
//!
//! Resolves the canonical catalog after an artificial delay, standing in
//! for a network fetch. The delay suspends only the caller awaiting the
//! fetch; nothing else blocks on it.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::SourceError;
use crate::item::{demo_items, DemoItem};
use crate::source::ItemSource;

/// Delay applied by [`MockItemSource::new`].
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(800);

/// In-memory [`ItemSource`] that simulates a slow backend.
#[derive(Debug, Clone)]
pub struct MockItemSource {
    delay: Duration,
}

impl MockItemSource {
    /// Creates a source with the default 800ms delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FETCH_DELAY)
    }

    /// Creates a source with a specific delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured artificial delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockItemSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemSource for MockItemSource {
    async fn fetch_items(&self) -> Result<Vec<DemoItem>, SourceError> {
        sleep(self.delay).await;
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "mock fetch resolved");
        Ok(demo_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_resolves_to_canonical_catalog() {
        let source = MockItemSource::new();
        let items = source.fetch_items().await.expect("mock source cannot fail");
        assert_eq!(items, demo_items());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_configured_delay() {
        let source = MockItemSource::with_delay(Duration::from_millis(800));
        let mut fetch = source.fetch_items();

        // Not ready strictly before the delay elapses.
        tokio::select! {
            _ = &mut fetch => panic!("fetch resolved before the delay elapsed"),
            _ = sleep(Duration::from_millis(799)) => {}
        }

        let items = fetch.await.expect("mock source cannot fail");
        assert_eq!(items.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_is_stable_across_calls() {
        let source = MockItemSource::with_delay(Duration::from_millis(10));
        let first = source.fetch_items().await.unwrap();
        let second = source.fetch_items().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_fetch_cancels_it() {
        let source = MockItemSource::new();
        drop(source.fetch_items());
        // Nothing to assert beyond not hanging: the sleep is cancel-safe.
    }
}
