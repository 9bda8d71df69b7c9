//! Tabbed top-list navigation
//!
//! The set of (section, period) pairs is enumerated once into a
//! `TabRegistry`, validated for uniqueness at construction, and the
//! per-section selection lives in `ActiveTabs` owned by the page.
//! Selection flows through callbacks, not ambient scope.

use crate::display_types::{Period, RankedEntry, TabSection};
use dioxus::prelude::*;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A single tab: one section showing one time period
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabKey {
    pub section: TabSection,
    pub period: Period,
}

impl TabKey {
    pub fn new(section: TabSection, period: Period) -> Self {
        Self { section, period }
    }

    /// Identifier string, e.g. "tracks-medium"
    pub fn id(&self) -> String {
        format!("{}-{}", self.section.id(), self.period.id())
    }
}

/// Registry construction failure
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TabRegistryError {
    /// The same (section, period) pair was listed twice
    Duplicate(TabKey),
}

impl fmt::Display for TabRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabRegistryError::Duplicate(key) => write!(f, "duplicate tab {}", key.id()),
        }
    }
}

impl std::error::Error for TabRegistryError {}

/// Enumerated set of tabs, built once when the page constructs
#[derive(Clone, Debug, PartialEq)]
pub struct TabRegistry {
    keys: Vec<TabKey>,
}

impl TabRegistry {
    /// Build from explicit pairs, rejecting duplicates
    pub fn new(keys: Vec<TabKey>) -> Result<Self, TabRegistryError> {
        let mut seen = std::collections::HashSet::new();
        for key in &keys {
            if !seen.insert(*key) {
                return Err(TabRegistryError::Duplicate(*key));
            }
        }
        Ok(Self { keys })
    }

    /// The standard dashboard layout: every section crossed with every period
    pub fn standard() -> Self {
        let keys = TabSection::ALL
            .iter()
            .flat_map(|&section| {
                Period::ALL
                    .iter()
                    .map(move |&period| TabKey::new(section, period))
            })
            .collect();
        Self::new(keys).expect("standard tab layout has no duplicates")
    }

    pub fn contains(&self, key: TabKey) -> bool {
        self.keys.contains(&key)
    }

    /// Sections in first-listed order, deduplicated
    pub fn sections(&self) -> Vec<TabSection> {
        let mut sections = Vec::new();
        for key in &self.keys {
            if !sections.contains(&key.section) {
                sections.push(key.section);
            }
        }
        sections
    }

    /// Periods listed for one section, in registry order
    pub fn periods_for(&self, section: TabSection) -> Vec<Period> {
        self.keys
            .iter()
            .filter(|k| k.section == section)
            .map(|k| k.period)
            .collect()
    }
}

/// Which period is active in each section; exactly one per section
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveTabs {
    active: HashMap<TabSection, Period>,
}

impl ActiveTabs {
    /// Every section starts on its first-listed period (the short term,
    /// in the standard layout)
    pub fn defaults(registry: &TabRegistry) -> Self {
        let active = registry
            .sections()
            .into_iter()
            .map(|section| {
                let period = registry
                    .periods_for(section)
                    .first()
                    .copied()
                    .unwrap_or_default();
                (section, period)
            })
            .collect();
        Self { active }
    }

    /// Activate one tab, replacing the section's previous choice.
    /// Other sections are untouched.
    pub fn select(&mut self, key: TabKey) {
        debug!(tab = %key.id(), "tab selected");
        self.active.insert(key.section, key.period);
    }

    pub fn active_period(&self, section: TabSection) -> Period {
        self.active.get(&section).copied().unwrap_or_default()
    }

    pub fn is_active(&self, key: TabKey) -> bool {
        self.active_period(key.section) == key.period
    }
}

/// Row of period buttons for one section, one marked active
#[component]
pub fn TabStrip(
    section: TabSection,
    periods: Vec<Period>,
    active: Period,
    on_select: EventHandler<TabKey>,
) -> Element {
    rsx! {
        div { class: "flex gap-1 bg-gray-800/50 rounded-lg p-1 mb-4 w-fit",
            for period in periods {
                button {
                    class: if period == active {
                        "px-3 py-1.5 text-sm rounded-md bg-emerald-600 text-white"
                    } else {
                        "px-3 py-1.5 text-sm rounded-md text-gray-400 hover:text-white"
                    },
                    onclick: move |_| on_select.call(TabKey::new(section, period)),
                    "{period.display_name()}"
                }
            }
        }
    }
}

/// Panel listing the ranked entries of the active tab
#[component]
pub fn RankedList(entries: Vec<RankedEntry>) -> Element {
    rsx! {
        if entries.is_empty() {
            p { class: "text-gray-500", "Nothing here for this period." }
        } else {
            ol { class: "space-y-2",
                for (idx , entry) in entries.iter().enumerate() {
                    li { class: "flex items-baseline gap-3 bg-gray-800 rounded px-4 py-2",
                        span { class: "text-gray-500 text-sm w-6 text-right", "{idx + 1}" }
                        span { class: "text-white", "{entry.label}" }
                        if let Some(sub) = &entry.sublabel {
                            span { class: "text-gray-400 text-sm truncate", "{sub}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_rejects_duplicates() {
        let key = TabKey::new(TabSection::Tracks, Period::Medium);
        let err = TabRegistry::new(vec![key, key]).unwrap_err();
        assert_eq!(err, TabRegistryError::Duplicate(key));
    }

    #[test]
    fn test_standard_registry_covers_all_pairs() {
        let registry = TabRegistry::standard();
        assert_eq!(registry.sections(), TabSection::ALL.to_vec());
        for section in TabSection::ALL {
            assert_eq!(registry.periods_for(section), Period::ALL.to_vec());
        }
        assert!(registry.contains(TabKey::new(TabSection::Genres, Period::Long)));
    }

    #[test]
    fn test_defaults_start_on_short_term() {
        let registry = TabRegistry::standard();
        let active = ActiveTabs::defaults(&registry);
        for section in TabSection::ALL {
            assert_eq!(active.active_period(section), Period::Short);
        }
    }

    #[test]
    fn test_select_activates_exactly_one_per_section() {
        let registry = TabRegistry::standard();
        let mut active = ActiveTabs::defaults(&registry);

        active.select(TabKey::new(TabSection::Tracks, Period::Medium));

        // Exactly one period is active in the tracks section, and it is
        // the one just selected
        let active_in_tracks: Vec<Period> = Period::ALL
            .into_iter()
            .filter(|&p| active.is_active(TabKey::new(TabSection::Tracks, p)))
            .collect();
        assert_eq!(active_in_tracks, vec![Period::Medium]);

        // Other sections keep their previous selection
        assert_eq!(active.active_period(TabSection::Artists), Period::Short);
        assert_eq!(active.active_period(TabSection::Genres), Period::Short);
    }

    #[test]
    fn test_tab_key_id() {
        assert_eq!(
            TabKey::new(TabSection::Tracks, Period::Medium).id(),
            "tracks-medium"
        );
        assert_eq!(
            TabKey::new(TabSection::Artists, Period::Short).id(),
            "artists-short"
        );
    }
}
