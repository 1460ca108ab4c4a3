//! Data hooks shared by page components.

use dioxus::prelude::*;
use switcher_core::{DemoItem, ItemSource, MockItemSource, SourceError};

use crate::settings;

/// Fetches the showcase catalog through the mock item source.
///
/// The resource is `None` while the artificial delay runs (the loading
/// state), then resolves to the fixed four-item catalog. Only the grid
/// awaiting this resource suspends; the rest of the page renders
/// immediately. Dropping the resource cancels the in-flight fetch.
pub fn use_demo_items() -> Resource<Result<Vec<DemoItem>, SourceError>> {
    use_resource(move || async move {
        let source = MockItemSource::with_delay(settings::fetch_delay());
        let items = source.fetch_items().await;
        match &items {
            Ok(items) => {
                tracing::debug!(count = items.len(), "demo items loaded");
            }
            Err(err) => {
                tracing::error!("demo item fetch failed: {err}");
            }
        }
        items
    })
}
