//! Write-once SVG charts for the dashboard
//!
//! Both charts are drawn from props exactly once; there is no update or
//! interactivity path. Geometry is computed by pure functions so the
//! layouts are unit-testable without a renderer.

pub mod bars;
pub mod radar;

pub use bars::ListeningClockChart;
pub use radar::MoodRadarChart;
