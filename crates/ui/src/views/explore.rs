use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::views::CategoryGrid;
use crate::vm::SessionVm;

/// Topic switcher. With a session open, a pick re-enters the feed directly;
/// otherwise it goes through the duration picker first.
#[component]
pub fn ExploreView() -> Element {
    let navigator = use_navigator();
    let session = use_context::<Signal<SessionVm>>();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Explore Topics" }
                p { class: "page-header__sub", "Choose a category to continue your learning journey" }
            }
            CategoryGrid {
                on_select: move |category| {
                    let vm = session.read();
                    if vm.state().is_open() {
                        navigator.push(Route::Feed {
                            category,
                            duration: vm.settings().duration_minutes,
                        });
                    } else {
                        navigator.push(Route::Timer { category });
                    }
                },
            }
        }
    }
}
