use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::views::CategoryGrid;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page page--hero",
            div { class: "brand",
                span { class: "brand__icon", "🌿" }
                h1 { class: "brand__name", "Bloom Scroll" }
            }
            h2 { class: "hero-title", "What would you like to explore?" }
            CategoryGrid {
                on_select: move |category| {
                    navigator.push(Route::Timer { category });
                },
            }
            p { class: "tagline", "Learn calmly." }
        }
    }
}
