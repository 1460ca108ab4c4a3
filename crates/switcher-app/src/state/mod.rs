//! Session state for the demo application.

pub mod navigation;

pub use navigation::*;
