//! Artist overview view - profile, top tracks and albums for one artist

use crate::components::icons::{ExternalLinkIcon, ImageIcon};
use crate::display_types::{AlbumSummary, ArtistOverview, TopTrack};
use crate::format::{format_count, release_year};
use dioxus::prelude::*;

/// Full artist result: profile header, then top tracks and albums.
///
/// The track and album sections are omitted entirely when their lists
/// are empty. Missing optional fields render as fallbacks, never errors.
#[component]
pub fn ArtistOverviewView(overview: ArtistOverview) -> Element {
    let artist = overview.artist.clone();
    let profile_url = artist.profile_url.clone().unwrap_or_else(|| "#".to_string());
    let followers = format_count(artist.followers);

    rsx! {
        div { class: "flex items-center gap-6 mb-8",
            if let Some(url) = &artist.image_url {
                img {
                    class: "w-32 h-32 rounded-full object-cover",
                    src: "{url}",
                    alt: "{artist.name}",
                }
            } else {
                div { class: "w-32 h-32 rounded-full bg-gray-700 flex items-center justify-center",
                    ImageIcon { class: "w-10 h-10 text-gray-500" }
                }
            }
            div { class: "min-w-0",
                h2 { class: "text-3xl font-bold text-white mb-2 truncate", "{artist.name}" }
                div { class: "flex gap-6 text-gray-300 mb-3",
                    div {
                        strong { class: "text-white", "{followers}" }
                        " followers"
                    }
                    div {
                        strong { class: "text-white", "{artist.popularity}%" }
                        " popularity"
                    }
                }
                if !artist.genres.is_empty() {
                    div { class: "flex flex-wrap gap-2 mb-3",
                        for genre in &artist.genres {
                            span { class: "bg-gray-800 text-emerald-400 text-sm rounded-full px-3 py-1", "{genre}" }
                        }
                    }
                }
                a {
                    class: "inline-flex items-center gap-2 text-emerald-400 hover:text-emerald-300",
                    href: "{profile_url}",
                    target: "_blank",
                    "Open profile"
                    ExternalLinkIcon { class: "w-4 h-4" }
                }
            }
        }

        if overview.has_top_tracks() {
            h3 { class: "text-xl font-bold text-white mb-4", "Top Tracks" }
            div { class: "grid gap-2 mb-8",
                for track in &overview.top_tracks {
                    TrackRow { track: track.clone() }
                }
            }
        }

        if overview.has_albums() {
            h3 { class: "text-xl font-bold text-white mb-4", "Albums" }
            div { class: "grid gap-2",
                for album in &overview.albums {
                    AlbumRow { album: album.clone() }
                }
            }
        }
    }
}

#[component]
fn TrackRow(track: TopTrack) -> Element {
    rsx! {
        div { class: "flex items-center gap-4 bg-gray-800 rounded px-3 py-2",
            CoverThumb { url: track.cover_url.clone(), alt: track.name.clone() }
            div { class: "min-w-0",
                h4 { class: "text-white truncate", "{track.name}" }
                p { class: "text-gray-400 text-sm truncate", "{track.album_name}" }
            }
        }
    }
}

#[component]
fn AlbumRow(album: AlbumSummary) -> Element {
    let year = release_year(&album.release_date).to_string();

    rsx! {
        div { class: "flex items-center gap-4 bg-gray-800 rounded px-3 py-2",
            CoverThumb { url: album.cover_url.clone(), alt: album.name.clone() }
            div { class: "min-w-0",
                h4 { class: "text-white truncate", "{album.name}" }
                p { class: "text-gray-400 text-sm", "{year} · {album.total_tracks} tracks" }
            }
        }
    }
}

/// Small square cover image with an icon fallback when the URL is absent
#[component]
fn CoverThumb(url: Option<String>, alt: String) -> Element {
    rsx! {
        if let Some(url) = &url {
            img {
                class: "w-12 h-12 rounded object-cover flex-shrink-0",
                src: "{url}",
                alt: "{alt}",
            }
        } else {
            div { class: "w-12 h-12 rounded bg-gray-700 flex items-center justify-center flex-shrink-0",
                ImageIcon { class: "w-5 h-5 text-gray-500" }
            }
        }
    }
}
