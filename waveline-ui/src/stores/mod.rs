//! Page state types
//!
//! These hold UI state owned by the web pages. They are plain values
//! wrapped in signals by the page that owns them.

pub mod artist_search;

pub use artist_search::*;
