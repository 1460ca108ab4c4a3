//! Item source abstraction.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::item::DemoItem;

/// Async source of showcase content.
///
/// The demo ships with [`crate::MockItemSource`]; a real backend would
/// implement this trait and be handed to the UI in its place. Fetches are
/// plain futures, so cancellation is dropping the future before it
/// resolves.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetches the full item catalog, in display order.
    async fn fetch_items(&self) -> Result<Vec<DemoItem>, SourceError>;
}
