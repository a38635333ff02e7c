use dioxus::prelude::*;

use bloom_core::model::Category;

/// Two-column grid of category tiles, shared by the home and explore views.
#[component]
pub fn CategoryGrid(on_select: EventHandler<Category>) -> Element {
    rsx! {
        div { class: "category-grid",
            for category in Category::ALL {
                button {
                    key: "{category}",
                    class: "category-tile",
                    onclick: move |_| on_select.call(category),
                    span { class: "category-tile__icon", "{category.metadata().icon}" }
                    span { class: "category-tile__name", "{category.display_name()}" }
                }
            }
        }
    }
}
