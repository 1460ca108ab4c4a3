//! # Switcher Core
//!
//! Content model and item sources for the multi-theme switcher demo.
//!
//! The demo UI renders a small showcase of [`DemoItem`] records. This crate
//! owns those records and the [`ItemSource`] seam they are fetched through,
//! so the UI never depends on where the content comes from.
//!
//! ## Key Types
//!
//! - [`DemoItem`]: a single showcase entry (title, blurb, features, rating)
//! - [`ItemSource`]: async fetch abstraction over a content backend
//! - [`MockItemSource`]: the in-memory source used by the demo, which
//!   resolves a fixed catalog after an artificial delay

pub mod error;
pub mod item;
pub mod mock;
pub mod source;

// Re-export main types
pub use error::*;
pub use item::*;
pub use mock::*;
pub use source::*;
