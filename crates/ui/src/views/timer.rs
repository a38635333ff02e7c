use dioxus::prelude::*;
use dioxus_router::use_navigator;

use bloom_core::model::{
    Category, DEFAULT_SESSION_MINUTES, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES,
};

use crate::routes::Route;

/// Duration picker shown between choosing a topic and entering the feed.
#[component]
pub fn TimerView(category: Category) -> Element {
    let navigator = use_navigator();
    let mut minutes = use_signal(|| DEFAULT_SESSION_MINUTES);
    let meta = category.metadata();

    rsx! {
        div { class: "page page--hero",
            button {
                class: "back-button",
                onclick: move |_| {
                    navigator.push(Route::Home {});
                },
                "←"
            }
            div { class: "category-badge",
                span { class: "category-badge__icon", "{meta.icon}" }
                p { class: "category-badge__name", "{meta.name}" }
            }
            h2 { class: "hero-title", "How long should our focus session be?" }
            div { class: "duration-display",
                span { class: "duration-display__value", "{minutes}" }
                span { class: "duration-display__unit", "minutes" }
            }
            div { class: "duration-slider",
                input {
                    r#type: "range",
                    min: "{MIN_SESSION_MINUTES}",
                    max: "{MAX_SESSION_MINUTES}",
                    step: "1",
                    value: "{minutes}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            minutes.set(value);
                        }
                    },
                }
                div { class: "duration-slider__bounds",
                    span { "{MIN_SESSION_MINUTES} min" }
                    span { "{MAX_SESSION_MINUTES} min" }
                }
            }
            button {
                class: "primary-button",
                onclick: move |_| {
                    navigator.push(Route::Feed {
                        category,
                        duration: minutes(),
                    });
                },
                "Begin Session"
            }
        }
    }
}
