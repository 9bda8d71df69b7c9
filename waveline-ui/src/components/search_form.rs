//! Artist search form - pure view with a submit callback

use crate::components::icons::SearchIcon;
use dioxus::prelude::*;

/// Search form with a single text input and submit button.
///
/// Submits the raw input value; empty-query rejection is the caller's
/// concern so the page can log and no-op without a render.
#[component]
pub fn SearchForm(on_submit: EventHandler<String>, #[props(default)] busy: bool) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        form {
            class: "flex gap-2 mb-8",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(query());
            },
            input {
                r#type: "text",
                class: "flex-1 bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-emerald-500/50 text-gray-300 placeholder-gray-500",
                placeholder: "Search for an artist...",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            button {
                r#type: "submit",
                class: "flex items-center gap-2 bg-emerald-600 hover:bg-emerald-500 text-white font-medium rounded-lg px-4 py-2",
                disabled: busy,
                SearchIcon { class: "w-4 h-4" }
                "Search"
            }
        }
    }
}
