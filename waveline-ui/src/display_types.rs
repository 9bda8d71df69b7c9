//! Display types for UI components
//!
//! These types are render-ready values mapped from the API payloads or the
//! embedded dashboard fixture. Every optional field has a fallback at
//! render time, so views never fail on missing data.

use serde::Deserialize;

/// Artist profile display info
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    /// Preferred image, if the backend supplied any
    pub image_url: Option<String>,
    pub followers: u64,
    /// Popularity score, 0-100
    pub popularity: u8,
    pub genres: Vec<String>,
    /// External profile link; views fall back to "#" when absent
    pub profile_url: Option<String>,
}

/// Top track display info
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopTrack {
    pub name: String,
    pub album_name: String,
    pub cover_url: Option<String>,
}

/// Album display info
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlbumSummary {
    pub name: String,
    /// Release date as reported upstream ("2011-06-17", or just "2011")
    pub release_date: String,
    pub total_tracks: u32,
    pub cover_url: Option<String>,
}

/// Composite result of a completed artist lookup
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistOverview {
    pub artist: ArtistProfile,
    pub top_tracks: Vec<TopTrack>,
    pub albums: Vec<AlbumSummary>,
}

impl ArtistOverview {
    /// Whether the top-tracks section renders at all
    pub fn has_top_tracks(&self) -> bool {
        !self.top_tracks.is_empty()
    }

    /// Whether the albums section renders at all
    pub fn has_albums(&self) -> bool {
        !self.albums.is_empty()
    }
}

/// Six mood scores on a 0-100 scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct MoodScores {
    pub energy: f64,
    pub danceability: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub valence: f64,
    pub tempo: f64,
}

impl MoodScores {
    /// Axis labels, in the order `values` returns them
    pub const AXIS_LABELS: [&'static str; 6] = [
        "Energy",
        "Danceability",
        "Acousticness",
        "Instrumentalness",
        "Valence",
        "Tempo",
    ];

    pub fn values(&self) -> [f64; 6] {
        [
            self.energy,
            self.danceability,
            self.acousticness,
            self.instrumentalness,
            self.valence,
            self.tempo,
        ]
    }
}

/// Play counts for the eight fixed time-of-day buckets
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct HourBuckets {
    pub early_morning: u32,
    pub morning: u32,
    pub late_morning: u32,
    pub noon: u32,
    pub afternoon: u32,
    pub evening: u32,
    pub night: u32,
    pub late_night: u32,
}

impl HourBuckets {
    /// Bucket labels, in the order `counts` returns them
    pub const BUCKET_LABELS: [&'static str; 8] =
        ["12am", "3am", "6am", "9am", "12pm", "3pm", "6pm", "9pm"];

    pub fn counts(&self) -> [u32; 8] {
        [
            self.early_morning,
            self.morning,
            self.late_morning,
            self.noon,
            self.afternoon,
            self.evening,
            self.night,
            self.late_night,
        ]
    }
}

/// A ranked row in a top-list panel (an artist, track or genre)
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    /// Secondary text: the artist for a track, the share for a genre
    #[serde(default)]
    pub sublabel: Option<String>,
}

/// Top lists for one section across the three time periods
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PeriodLists {
    #[serde(default)]
    pub short: Vec<RankedEntry>,
    #[serde(default)]
    pub medium: Vec<RankedEntry>,
    #[serde(default)]
    pub long: Vec<RankedEntry>,
}

impl PeriodLists {
    pub fn for_period(&self, period: Period) -> &[RankedEntry] {
        match period {
            Period::Short => &self.short,
            Period::Medium => &self.medium,
            Period::Long => &self.long,
        }
    }
}

/// Dashboard metrics, supplied whole at page load and never mutated
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardMetrics {
    pub mood: MoodScores,
    pub hours: HourBuckets,
    /// How far the listener's taste sits from the mainstream, 0-100
    #[serde(default)]
    pub obscurity_score: f64,
    #[serde(default)]
    pub top_artists: PeriodLists,
    #[serde(default)]
    pub top_tracks: PeriodLists,
    #[serde(default)]
    pub top_genres: PeriodLists,
}

impl DashboardMetrics {
    pub fn lists_for(&self, section: TabSection) -> &PeriodLists {
        match section {
            TabSection::Artists => &self.top_artists,
            TabSection::Tracks => &self.top_tracks,
            TabSection::Genres => &self.top_genres,
        }
    }
}

/// Dashboard top-list sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TabSection {
    Artists,
    Tracks,
    Genres,
}

impl TabSection {
    pub const ALL: [TabSection; 3] = [TabSection::Artists, TabSection::Tracks, TabSection::Genres];

    pub fn display_name(&self) -> &'static str {
        match self {
            TabSection::Artists => "Top Artists",
            TabSection::Tracks => "Top Tracks",
            TabSection::Genres => "Top Genres",
        }
    }

    /// Stable identifier used in tab ids, e.g. "tracks" in "tracks-medium"
    pub fn id(&self) -> &'static str {
        match self {
            TabSection::Artists => "artists",
            TabSection::Tracks => "tracks",
            TabSection::Genres => "genres",
        }
    }
}

/// Listening-history time period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Period {
    #[default]
    Short,
    Medium,
    Long,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Short, Period::Medium, Period::Long];

    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Short => "Last 4 Weeks",
            Period::Medium => "Last 6 Months",
            Period::Long => "All Time",
        }
    }

    /// Stable identifier used in tab ids, e.g. "medium" in "tracks-medium"
    pub fn id(&self) -> &'static str {
        match self {
            Period::Short => "short",
            Period::Medium => "medium",
            Period::Long => "long",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_gates() {
        let mut overview = ArtistOverview::default();
        assert!(!overview.has_top_tracks());
        assert!(!overview.has_albums());

        overview.top_tracks.push(TopTrack::default());
        assert!(overview.has_top_tracks());
        assert!(!overview.has_albums());
    }

    #[test]
    fn test_metrics_deserialize() {
        let metrics: DashboardMetrics = serde_json::from_str(
            r#"{
                "mood": {
                    "energy": 72.0, "danceability": 65.0, "acousticness": 24.0,
                    "instrumentalness": 12.0, "valence": 59.0, "tempo": 61.0
                },
                "hours": {
                    "early_morning": 3, "morning": 11, "late_morning": 24, "noon": 38,
                    "afternoon": 45, "evening": 61, "night": 72, "late_night": 29
                }
            }"#,
        )
        .unwrap();

        assert_eq!(metrics.mood.values().len(), 6);
        assert_eq!(metrics.hours.counts(), [3, 11, 24, 38, 45, 61, 72, 29]);
        // Supplementary fields are optional in the fixture
        assert_eq!(metrics.obscurity_score, 0.0);
        assert!(metrics.top_artists.short.is_empty());
    }

    #[test]
    fn test_period_lists_lookup() {
        let lists = PeriodLists {
            short: vec![RankedEntry {
                label: "Velvet Static".to_string(),
                sublabel: None,
            }],
            medium: vec![],
            long: vec![],
        };
        assert_eq!(lists.for_period(Period::Short).len(), 1);
        assert!(lists.for_period(Period::Medium).is_empty());
    }
}
