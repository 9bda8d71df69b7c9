//! Artist search page state

use crate::display_types::ArtistOverview;

/// Phase of the two-step search flow.
///
/// Each phase fully replaces the previous one in the results area; there
/// is no partial-result preservation across stages.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchPhase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Search request in flight
    Searching,
    /// Search resolved to a match; detail request in flight
    LoadingDetail,
    /// Detail resolved and mapped for display
    Loaded(ArtistOverview),
    /// Search resolved with an empty result list
    NoMatches,
    /// A stage failed; the message replaces the results area
    Failed(String),
}

impl SearchPhase {
    /// Whether a request is currently in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, SearchPhase::Searching | SearchPhase::LoadingDetail)
    }
}

/// Monotonic counter distinguishing the newest submitted search from
/// stale in-flight ones.
///
/// Submitting a search advances the generation and hands the task a
/// ticket; a response may only touch shared state while its ticket is
/// still current. This makes overlapping searches last-submitted-wins
/// rather than last-resolved-wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Advance to a new generation, returning its ticket
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `ticket` is still the most recently issued one
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_busy() {
        assert!(!SearchPhase::Idle.is_busy());
        assert!(SearchPhase::Searching.is_busy());
        assert!(SearchPhase::LoadingDetail.is_busy());
        assert!(!SearchPhase::NoMatches.is_busy());
        assert!(!SearchPhase::Failed("x".to_string()).is_busy());
    }

    #[test]
    fn test_stale_ticket_loses_to_newer_submission() {
        let mut generation = RequestGeneration::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        // A second search is submitted while the first is in flight
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
