//! Pure view components
//!
//! All components here are props-based: data comes in through props and
//! interactions flow out through `EventHandler` callbacks.

pub mod artist_overview;
pub mod charts;
pub mod icons;
pub mod search_form;
pub mod status;
pub mod tabs;

pub use artist_overview::*;
pub use charts::*;
pub use icons::*;
pub use search_form::*;
pub use status::*;
pub use tabs::*;
