//! waveline-ui - Shared UI types and components for waveline
//!
//! Contains display types, page state types, formatting utilities and the
//! pure view components used by the web dashboard. Nothing in this crate
//! touches the network; pages feed data in through props.

pub mod components;
pub mod display_types;
pub mod format;
pub mod stores;

pub use components::*;
pub use display_types::*;
