use crate::dashboard_data;
use dioxus::prelude::*;
use waveline_ui::components::charts::{ListeningClockChart, MoodRadarChart};
use waveline_ui::components::tabs::{ActiveTabs, RankedList, TabKey, TabRegistry, TabStrip};
use waveline_ui::display_types::{Period, TabSection};

#[component]
pub fn Dashboard() -> Element {
    let metrics = dashboard_data::metrics();
    let registry = use_hook(TabRegistry::standard);
    let mut active = use_signal({
        let registry = registry.clone();
        move || ActiveTabs::defaults(&registry)
    });

    let obscurity = metrics.obscurity_score.round() as u32;

    rsx! {
        div { class: "container mx-auto py-10 px-4",
            h1 { class: "text-3xl font-bold text-white mb-8", "Your Listening Dashboard" }

            div { class: "grid md:grid-cols-2 gap-6 mb-10",
                div { class: "bg-gray-900 rounded-lg p-6",
                    h2 { class: "text-xl font-bold text-white mb-4", "Mood Profile" }
                    MoodRadarChart { mood: metrics.mood }
                }
                div { class: "bg-gray-900 rounded-lg p-6",
                    h2 { class: "text-xl font-bold text-white mb-4", "Listening Clock" }
                    ListeningClockChart { hours: metrics.hours }
                }
            }

            div { class: "bg-gray-900 rounded-lg p-6 mb-10 flex items-baseline gap-4",
                span { class: "text-gray-400", "Obscurity score" }
                span { class: "text-3xl font-bold text-emerald-500", "{obscurity}" }
                span { class: "text-gray-500 text-sm", "how far your taste sits from the mainstream" }
            }

            for section in registry.sections() {
                TopListSection {
                    section,
                    periods: registry.periods_for(section),
                    active_period: active.read().active_period(section),
                    on_select: move |key: TabKey| active.write().select(key),
                }
            }
        }
    }
}

/// One tabbed section: heading, period strip, and the active panel
#[component]
fn TopListSection(
    section: TabSection,
    periods: Vec<Period>,
    active_period: Period,
    on_select: EventHandler<TabKey>,
) -> Element {
    let metrics = dashboard_data::metrics();
    let entries = metrics
        .lists_for(section)
        .for_period(active_period)
        .to_vec();

    rsx! {
        section { class: "mb-10",
            h2 { class: "text-xl font-bold text-white mb-4", "{section.display_name()}" }
            TabStrip {
                section,
                periods,
                active: active_period,
                on_select,
            }
            RankedList { entries }
        }
    }
}
