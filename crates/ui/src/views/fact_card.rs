use dioxus::prelude::*;

use bloom_core::model::{Fact, MediaKind};

/// One fact card in the feed. Zen mode strips everything but the text.
#[component]
pub fn FactCard(fact: Fact, zen_mode: bool) -> Element {
    if zen_mode {
        return rsx! {
            article { class: "fact-card fact-card--zen",
                p { class: "fact-card__text", "{fact.text()}" }
            }
        };
    }

    let meta = fact.category().metadata();

    rsx! {
        article { class: "fact-card {meta.color_token}",
            header { class: "fact-card__header",
                span { class: "fact-card__icon", "{meta.icon}" }
                div {
                    p { class: "fact-card__category", "{meta.name} Fact" }
                    p { class: "fact-card__number", "#{fact.fact_number()}" }
                }
            }
            div { class: "fact-card__body",
                p { class: "fact-card__text", "{fact.text()}" }
                if let Some(media) = fact.media() {
                    match media.kind {
                        MediaKind::Image => rsx! {
                            img { class: "fact-card__media", src: "{media.url}" }
                        },
                        MediaKind::Video => rsx! {
                            video { class: "fact-card__media", src: "{media.url}", controls: true }
                        },
                    }
                }
            }
            footer { class: "fact-card__footer",
                if let Some(url) = fact.source_url() {
                    a { class: "fact-card__source", href: "{url}", target: "_blank",
                        "Source: {fact.source()}"
                    }
                } else {
                    p { class: "fact-card__source", "Source: {fact.source()}" }
                }
            }
        }
    }
}
