use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let entries = [
        ("Dashboard", Route::Dashboard {}),
        ("Artist Search", Route::ArtistSearch {}),
    ];

    rsx! {
        div { class: "h-screen flex flex-col",
            nav { class: "flex items-center gap-6 px-6 py-4 bg-gray-900 border-b border-gray-800",
                span { class: "text-emerald-500 font-bold text-lg", "waveline" }
                for (label , route) in entries {
                    NavButton {
                        label,
                        is_active: route == current_route,
                        route,
                    }
                }
            }
            div { class: "flex-1 overflow-y-auto", Outlet::<Route> {} }
        }
    }
}

#[component]
fn NavButton(label: &'static str, is_active: bool, route: Route) -> Element {
    rsx! {
        button {
            class: if is_active { "text-white font-medium" } else { "text-gray-400 hover:text-white" },
            onclick: move |_| {
                navigator().push(route.clone());
            },
            "{label}"
        }
    }
}
