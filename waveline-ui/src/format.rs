//! Formatting utilities for display values

/// Format a count in compact form: 2_500_000 -> "2.5M", 1_500 -> "1.5K",
/// anything below a thousand as the plain integer.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Extract the year portion of a release date like "2011-06-17" or "2011".
/// Empty input yields an empty year.
pub fn release_year(date: &str) -> &str {
    date.split('-').next().unwrap_or("")
}
