use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use bloom_core::model::Category;

use crate::views::{ExploreView, FeedView, HomeView, ProgressView, SettingsView, TimerView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/timer/:category", TimerView)] Timer { category: Category },
        #[route("/feed/:category?:duration", FeedView)] Feed { category: Category, duration: u32 },
        #[route("/explore", ExploreView)] Explore {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/settings", SettingsView)] Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            BottomNav {}
        }
    }
}

#[component]
fn BottomNav() -> Element {
    rsx! {
        nav { class: "bottom-nav",
            Link { class: "bottom-nav__item", to: Route::Home {}, "Home" }
            Link { class: "bottom-nav__item", to: Route::Explore {}, "Explore" }
            Link { class: "bottom-nav__item", to: Route::Progress {}, "Progress" }
            Link { class: "bottom-nav__item", to: Route::Settings {}, "Settings" }
        }
    }
}
