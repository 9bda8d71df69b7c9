use crate::api;
use dioxus::prelude::*;
use tracing::{debug, warn};
use waveline_ui::components::artist_overview::ArtistOverviewView;
use waveline_ui::components::search_form::SearchForm;
use waveline_ui::components::status::{StatusKind, StatusMessage};
use waveline_ui::stores::{RequestGeneration, SearchPhase};

#[component]
pub fn ArtistSearch() -> Element {
    let mut phase = use_signal(|| SearchPhase::Idle);
    // Guards against overlapping searches: only the most recently
    // submitted one may update the phase.
    let mut generation = use_signal(RequestGeneration::default);

    let submit = move |raw: String| {
        let Some(query) = api::validate_query(&raw) else {
            warn!("ignoring empty search query");
            return;
        };

        let ticket = generation.write().next();
        phase.set(SearchPhase::Searching);

        spawn(async move {
            let hits = match api::search_artists(&query).await {
                Ok(hits) => hits,
                Err(e) => {
                    if generation.peek().is_current(ticket) {
                        phase.set(SearchPhase::Failed(e.to_string()));
                    }
                    return;
                }
            };
            if !generation.peek().is_current(ticket) {
                debug!("dropping stale search response");
                return;
            }

            let Some(hit) = api::first_hit(hits) else {
                phase.set(SearchPhase::NoMatches);
                return;
            };
            debug!(artist = %hit.name, id = %hit.id, "search matched");
            phase.set(SearchPhase::LoadingDetail);

            let result = api::fetch_artist(&hit.id).await;
            if !generation.peek().is_current(ticket) {
                debug!("dropping stale detail response");
                return;
            }
            match result {
                Ok(overview) => phase.set(SearchPhase::Loaded(overview)),
                Err(e) => phase.set(SearchPhase::Failed(e.to_string())),
            }
        });
    };

    let busy = phase.read().is_busy();

    rsx! {
        div { class: "container mx-auto py-10 px-4 max-w-3xl",
            h1 { class: "text-3xl font-bold text-white mb-8", "Artist Search" }
            SearchForm { on_submit: submit, busy }
            {
                match &*phase.read() {
                    SearchPhase::Idle => rsx! {},
                    SearchPhase::Searching => rsx! {
                        StatusMessage {
                            kind: StatusKind::Loading,
                            message: "Searching for artists...".to_string(),
                        }
                    },
                    SearchPhase::LoadingDetail => rsx! {
                        StatusMessage {
                            kind: StatusKind::Loading,
                            message: "Loading artist details...".to_string(),
                        }
                    },
                    SearchPhase::NoMatches => rsx! {
                        StatusMessage {
                            kind: StatusKind::Info,
                            message: "No artists found matching your search.".to_string(),
                        }
                    },
                    SearchPhase::Failed(msg) => rsx! {
                        StatusMessage {
                            kind: StatusKind::Error,
                            message: format!("Error: {msg}"),
                        }
                    },
                    SearchPhase::Loaded(overview) => rsx! {
                        ArtistOverviewView { overview: overview.clone() }
                    },
                }
            }
        }
    }
}
