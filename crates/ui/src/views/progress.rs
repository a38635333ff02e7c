use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressVm, map_progress};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let record = progress.get_progress().await;
            Ok::<_, ViewError>(map_progress(&record))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Your Progress" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    ProgressStats { data }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ProgressStats(data: ProgressVm) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatTile { label: "Current Streak", value: "{data.current_streak} days" }
            StatTile { label: "Facts Today", value: "{data.facts_viewed_today}" }
            StatTile { label: "Facts All Time", value: "{data.total_facts_viewed}" }
            StatTile { label: "Sessions Completed", value: "{data.session_completions}" }
        }

        if let Some(topic) = data.most_explored {
            p { class: "most-explored", "Most explored topic: " b { "{topic}" } }
        } else {
            p { class: "most-explored", "Start scrolling to build your stats." }
        }

        if let Some(date) = data.last_visit {
            p { class: "last-visit", "Last visit: {date}" }
        }

        ul { class: "category-stats",
            for (category, count) in data.per_category {
                li { key: "{category}",
                    span { class: "category-stats__icon", "{category.metadata().icon}" }
                    span { class: "category-stats__name", "{category.display_name()}" }
                    span { class: "category-stats__count", "{count}" }
                }
            }
        }
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-tile",
            p { class: "stat-tile__value", "{value}" }
            p { class: "stat-tile__label", "{label}" }
        }
    }
}
