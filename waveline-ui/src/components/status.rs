//! Inline status messages for the search results area

use dioxus::prelude::*;

/// Kind of status shown in place of results
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatusKind {
    /// A request is in flight
    Loading,
    /// Informational, e.g. an empty result list
    Info,
    /// A stage failed
    Error,
}

/// Status block that replaces the results area for one stage
#[component]
pub fn StatusMessage(kind: StatusKind, message: String) -> Element {
    match kind {
        StatusKind::Loading => rsx! {
            div { class: "flex justify-center items-center py-12 text-gray-300",
                div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-emerald-500" }
                p { class: "ml-4", "{message}" }
            }
        },
        StatusKind::Info => rsx! {
            div { class: "bg-gray-800 text-gray-300 px-4 py-3 rounded",
                p { "{message}" }
            }
        },
        StatusKind::Error => rsx! {
            div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded",
                p { "{message}" }
            }
        },
    }
}
