use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::vm::SessionVm;

#[component]
pub fn App() -> Element {
    // One session per window, shared by the feed, explore, and settings
    // views through context.
    let session = use_signal(SessionVm::new);
    use_context_provider(|| session);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Bloom Scroll" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
