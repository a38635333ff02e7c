use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use bloom_core::catalog;
use bloom_core::model::{Category, SessionPhase, Tick};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::FactCard;
use crate::vm::{SessionVm, format_clock};

mod scripts;

const FEED_BATCH_SIZE: usize = 10;

/// The snap-scrolling fact feed.
///
/// Keyed by category so switching topics remounts the content with a fresh
/// scroll position while the running session carries over.
#[component]
pub fn FeedView(category: Category, duration: u32) -> Element {
    rsx! {
        FeedContent { key: "{category}", category, duration }
    }
}

#[component]
fn FeedContent(category: Category, duration: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<SessionVm>>();
    let navigator = use_navigator();

    let facts = catalog::facts_by_category(category);
    let mut loaded_count = use_signal(|| FEED_BATCH_SIZE.min(facts.len()));
    let mut current_index = use_signal(|| 0_usize);

    // Entering the feed starts the session; switching topics mid-session
    // keeps the running clock.
    use_effect(move || {
        if !session.peek().state().is_open() {
            let minutes = if duration == 0 {
                session.peek().settings().duration_minutes
            } else {
                duration
            };
            session.write().begin(minutes);
        }
    });

    // The tick task exists only while the clock is running. Pause, finish,
    // end, and navigation all cancel it here rather than leaving it to
    // skip ticks.
    let ticking = use_memo(move || session.read().state().is_ticking());
    let tick_task = use_hook(|| Rc::new(RefCell::new(None::<Task>)));
    {
        let progress = ctx.progress();
        let tick_task = Rc::clone(&tick_task);
        use_effect(move || {
            if let Some(task) = tick_task.borrow_mut().take() {
                task.cancel();
            }
            if ticking() {
                let progress = progress.clone();
                let task = spawn(async move {
                    loop {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        match session.write().tick() {
                            Tick::Advanced => {}
                            Tick::Finished => {
                                progress.complete_session().await;
                                break;
                            }
                            Tick::Skipped => break,
                        }
                    }
                });
                *tick_task.borrow_mut() = Some(task);
            }
        });
    }

    // Each card the user lands on counts once per visit.
    {
        let progress = ctx.progress();
        use_effect(move || {
            let index = current_index();
            let Some(fact) = facts.get(index) else {
                return;
            };
            if session.write().mark_viewed(fact) {
                let progress = progress.clone();
                let id = fact.id().clone();
                let fact_category = fact.category();
                spawn(async move {
                    progress.update_progress(&id, fact_category).await;
                });
            }
        });
    }

    // Scroll tracking lives in the webview; indexes stream back here.
    use_future(move || async move {
        let mut eval = document::eval(scripts::FEED_SCROLL_SCRIPT);
        loop {
            match eval.recv::<usize>().await {
                Ok(index) => current_index.set(index),
                Err(_) => break,
            }
        }
    });

    let auto_mode = use_memo(move || session.read().settings().auto_mode);
    use_effect(move || {
        let _ = document::eval(&scripts::feed_config_script(auto_mode()));
    });

    let state = session.read().state();
    let settings = session.read().settings();
    let phase = state.phase();
    let percent = state.progress_fraction() * 100.0;
    let clock_label = format!(
        "{} / {}",
        format_clock(state.elapsed_seconds()),
        format_clock(state.target_seconds())
    );
    let loaded = loaded_count().min(facts.len());
    let viewed = session.read().viewed_count();

    rsx! {
        div { class: "feed-page",
            header { class: "feed-header",
                div { class: "feed-header__row",
                    label { class: "feed-header__toggle",
                        input {
                            r#type: "checkbox",
                            checked: settings.auto_mode,
                            onchange: move |evt| {
                                session.write().settings_mut().auto_mode = evt.checked();
                            },
                        }
                        "Auto Mode"
                    }
                    span { class: "feed-header__clock", "{clock_label}" }
                    if phase == SessionPhase::Running {
                        button {
                            class: "feed-header__pause",
                            onclick: move |_| session.write().pause(),
                            "Pause"
                        }
                    } else if phase == SessionPhase::Paused {
                        button {
                            class: "feed-header__pause",
                            onclick: move |_| session.write().resume(),
                            "Resume"
                        }
                    }
                }
                div { class: "feed-progress",
                    div { class: "feed-progress__bar", style: "width: {percent}%" }
                }
            }

            div { id: "feed-scroll", class: "feed-scroll",
                for fact in facts.iter().take(loaded) {
                    div { key: "{fact.id()}", class: "feed-slide",
                        FactCard { fact: fact.clone(), zen_mode: settings.zen_mode }
                    }
                }

                if loaded < facts.len() {
                    div { class: "feed-slide feed-slide--cta",
                        p { class: "feed-cta__title", "You've reached your batch." }
                        button {
                            class: "primary-button",
                            onclick: move |_| {
                                loaded_count
                                    .set((loaded_count() + FEED_BATCH_SIZE).min(facts.len()));
                            },
                            "Load More"
                        }
                        p { class: "feed-cta__sub", "{viewed} facts explored" }
                    }
                } else {
                    div { class: "feed-slide feed-slide--cta",
                        p { class: "feed-cta__emoji", "🎉" }
                        p { class: "feed-cta__title",
                            "You've explored all facts in this category!"
                        }
                        button {
                            class: "primary-button",
                            onclick: move |_| {
                                navigator.push(Route::Explore {});
                            },
                            "Explore More Topics"
                        }
                    }
                }
            }

            if phase == SessionPhase::Finished {
                div { class: "dialog-backdrop",
                    div { class: "dialog",
                        h3 { "Session Complete" }
                        p {
                            "You've reached your session goal. Would you like to continue exploring?"
                        }
                        div { class: "dialog__actions",
                            button {
                                class: "secondary-button",
                                onclick: move |_| {
                                    session.write().end();
                                    navigator.push(Route::Home {});
                                },
                                "End Session"
                            }
                            button {
                                class: "primary-button",
                                onclick: move |_| session.write().continue_session(),
                                "Continue (10 more min)"
                            }
                        }
                    }
                }
            }
        }
    }
}
