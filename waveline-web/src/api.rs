//! Client for the two dashboard JSON endpoints
//!
//! Both endpoints are trusted-but-partial: any field may be absent, and a
//! body-level `error` field wins over the HTTP status. Mapping into
//! display types applies the fallbacks the views expect, so a sparse
//! payload renders with placeholders rather than failing.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use waveline_ui::display_types::{AlbumSummary, ArtistOverview, ArtistProfile, TopTrack};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The backend reported an error in the response body
    #[error("{0}")]
    Upstream(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Trimmed, non-empty query, or None when there is nothing to search for
pub fn validate_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn search_url(query: &str) -> String {
    format!("/api/search-artist?query={}", urlencoding::encode(query))
}

fn artist_detail_url(artist_id: &str) -> String {
    format!("/api/artist/{artist_id}")
}

// -- Search envelope --

#[derive(Deserialize)]
struct SearchEnvelope {
    error: Option<String>,
    artists: Option<ArtistItems>,
}

#[derive(Deserialize)]
struct ArtistItems {
    #[serde(default)]
    items: Vec<ArtistHit>,
}

/// Summary row from the search endpoint
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ArtistHit {
    pub id: String,
    pub name: String,
}

impl SearchEnvelope {
    /// A body-level error wins; otherwise flatten the nested item list
    fn into_hits(self) -> Result<Vec<ArtistHit>, ApiError> {
        if let Some(msg) = self.error {
            return Err(ApiError::Upstream(msg));
        }
        Ok(self.artists.map(|a| a.items).unwrap_or_default())
    }
}

/// Only the first search hit is ever acted on; there is no
/// disambiguation UI.
pub fn first_hit(hits: Vec<ArtistHit>) -> Option<ArtistHit> {
    hits.into_iter().next()
}

/// Search for artists by free-text query (already validated non-empty)
pub async fn search_artists(query: &str) -> Result<Vec<ArtistHit>, ApiError> {
    let url = search_url(query);
    debug!(%url, "searching artists");
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let envelope: SearchEnvelope = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_hits()
}

// -- Artist detail envelope --

#[derive(Deserialize)]
struct DetailEnvelope {
    error: Option<String>,
    artist: Option<ArtistPayload>,
    top_tracks: Option<TrackList>,
    albums: Option<AlbumItems>,
}

#[derive(Default, Deserialize)]
struct ArtistPayload {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    images: Vec<ImageRef>,
    followers: Option<Followers>,
    popularity: Option<u8>,
    #[serde(default)]
    genres: Vec<String>,
    external_urls: Option<ExternalUrls>,
}

#[derive(Deserialize)]
struct ImageRef {
    url: String,
}

#[derive(Deserialize)]
struct Followers {
    total: Option<u64>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Deserialize)]
struct TrackList {
    #[serde(default)]
    tracks: Vec<TrackPayload>,
}

#[derive(Deserialize)]
struct TrackPayload {
    #[serde(default)]
    name: String,
    album: Option<AlbumRef>,
}

#[derive(Default, Deserialize)]
struct AlbumRef {
    #[serde(default)]
    name: String,
    #[serde(default)]
    images: Vec<ImageRef>,
}

#[derive(Deserialize)]
struct AlbumItems {
    #[serde(default)]
    items: Vec<AlbumPayload>,
}

#[derive(Deserialize)]
struct AlbumPayload {
    #[serde(default)]
    name: String,
    release_date: Option<String>,
    total_tracks: Option<u32>,
    #[serde(default)]
    images: Vec<ImageRef>,
}

/// Images arrive ordered by preference; take the first
fn first_image(images: Vec<ImageRef>) -> Option<String> {
    images.into_iter().next().map(|i| i.url)
}

impl DetailEnvelope {
    fn into_overview(self) -> Result<ArtistOverview, ApiError> {
        if let Some(msg) = self.error {
            return Err(ApiError::Upstream(msg));
        }

        let a = self.artist.unwrap_or_default();
        let artist = ArtistProfile {
            id: a.id,
            name: a.name,
            image_url: first_image(a.images),
            followers: a.followers.and_then(|f| f.total).unwrap_or(0),
            popularity: a.popularity.unwrap_or(0),
            genres: a.genres,
            profile_url: a.external_urls.and_then(|u| u.spotify),
        };

        let top_tracks = self
            .top_tracks
            .map(|t| t.tracks)
            .unwrap_or_default()
            .into_iter()
            .map(|t| {
                let album = t.album.unwrap_or_default();
                TopTrack {
                    name: t.name,
                    album_name: album.name,
                    cover_url: first_image(album.images),
                }
            })
            .collect();

        let albums = self
            .albums
            .map(|a| a.items)
            .unwrap_or_default()
            .into_iter()
            .map(|al| AlbumSummary {
                name: al.name,
                release_date: al.release_date.unwrap_or_default(),
                total_tracks: al.total_tracks.unwrap_or(0),
                cover_url: first_image(al.images),
            })
            .collect();

        Ok(ArtistOverview {
            artist,
            top_tracks,
            albums,
        })
    }
}

/// Fetch full detail for one artist
pub async fn fetch_artist(artist_id: &str) -> Result<ArtistOverview, ApiError> {
    let url = artist_detail_url(artist_id);
    debug!(%url, "fetching artist detail");
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let envelope: DetailEnvelope = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_overview()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_search(body: &str) -> Result<Vec<ArtistHit>, ApiError> {
        serde_json::from_str::<SearchEnvelope>(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .into_hits()
    }

    fn parse_detail(body: &str) -> Result<ArtistOverview, ApiError> {
        serde_json::from_str::<DetailEnvelope>(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .into_overview()
    }

    #[test]
    fn test_validate_query() {
        assert_eq!(validate_query("  nirvana  "), Some("nirvana".to_string()));
        assert_eq!(validate_query(""), None);
        assert_eq!(validate_query("   \t "), None);
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("AC/DC & friends"),
            "/api/search-artist?query=AC%2FDC%20%26%20friends"
        );
    }

    #[test]
    fn test_first_hit_feeds_detail_url() {
        let hits = parse_search(r#"{"artists":{"items":[{"id":"42","name":"X"}]}}"#).unwrap();
        let hit = first_hit(hits).unwrap();
        assert_eq!(hit.name, "X");
        assert_eq!(artist_detail_url(&hit.id), "/api/artist/42");
    }

    #[test]
    fn test_empty_items_is_not_an_error() {
        let hits = parse_search(r#"{"artists":{"items":[]}}"#).unwrap();
        assert!(first_hit(hits).is_none());

        // A missing artists object behaves the same way
        let hits = parse_search("{}").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_body_error_short_circuits_both_stages() {
        let err = parse_search(r#"{"error":"rate limited"}"#).unwrap_err();
        assert_eq!(err, ApiError::Upstream("rate limited".to_string()));

        let err = parse_detail(r#"{"error":"rate limited"}"#).unwrap_err();
        assert_eq!(err, ApiError::Upstream("rate limited".to_string()));
    }

    #[test]
    fn test_detail_mapping_with_full_payload() {
        let overview = parse_detail(
            r#"{
                "artist": {
                    "id": "42",
                    "name": "Velvet Static",
                    "images": [{"url": "https://img/a.jpg"}, {"url": "https://img/b.jpg"}],
                    "followers": {"total": 2500000},
                    "popularity": 81,
                    "genres": ["synthwave", "dream pop"],
                    "external_urls": {"spotify": "https://open.example/artist/42"}
                },
                "top_tracks": {
                    "tracks": [
                        {"name": "Afterglow", "album": {"name": "Night Drive", "images": [{"url": "https://img/t.jpg"}]}}
                    ]
                },
                "albums": {
                    "items": [
                        {"name": "Night Drive", "release_date": "2019-10-04", "total_tracks": 11, "images": []}
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(overview.artist.name, "Velvet Static");
        assert_eq!(overview.artist.image_url.as_deref(), Some("https://img/a.jpg"));
        assert_eq!(overview.artist.followers, 2_500_000);
        assert_eq!(overview.artist.popularity, 81);
        assert_eq!(
            overview.artist.profile_url.as_deref(),
            Some("https://open.example/artist/42")
        );
        assert_eq!(overview.top_tracks[0].album_name, "Night Drive");
        assert_eq!(overview.albums[0].release_date, "2019-10-04");
        assert!(overview.albums[0].cover_url.is_none());
    }

    #[test]
    fn test_detail_mapping_applies_fallbacks() {
        // Everything optional missing: still renders, with defaults
        let overview = parse_detail(r#"{"artist": {"name": "Sparse"}}"#).unwrap();
        assert_eq!(overview.artist.name, "Sparse");
        assert!(overview.artist.image_url.is_none());
        assert_eq!(overview.artist.followers, 0);
        assert_eq!(overview.artist.popularity, 0);
        assert!(overview.artist.genres.is_empty());
        assert!(overview.artist.profile_url.is_none());
        assert!(!overview.has_top_tracks());
        assert!(!overview.has_albums());
    }

    #[test]
    fn test_empty_track_list_omits_section() {
        let overview =
            parse_detail(r#"{"artist": {"name": "X"}, "top_tracks": {"tracks": []}}"#).unwrap();
        assert!(!overview.has_top_tracks());
    }
}
