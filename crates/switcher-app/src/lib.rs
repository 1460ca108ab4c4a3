//! Multi-theme switcher demo
//!
//! This crate provides a Dioxus desktop application that renders the same
//! three pages (demo showcase, theme gallery, contact) under three complete
//! visual themes. Switching theme swaps layout, typography, palette, and
//! animation style while the content stays identical.

pub mod components;
pub mod hooks;
pub mod settings;
pub mod state;
pub mod theme;
