use dioxus::prelude::*;

use bloom_core::model::{MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};

use crate::context::AppContext;
use crate::vm::SessionVm;

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<SessionVm>>();

    let mut show_duration_dialog = use_signal(|| false);
    let mut show_reset_dialog = use_signal(|| false);
    let mut draft_minutes = use_signal(|| session.peek().settings().duration_minutes);
    let mut reset_done = use_signal(|| false);

    let settings = session.read().settings();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Settings" }
                p { class: "page-header__sub", "Customize your learning experience" }
            }

            section { class: "settings-card",
                h2 { "Experience" }
                SettingsToggle {
                    label: "Zen Mode",
                    help: "Ultra-minimal cards for maximum calm",
                    checked: settings.zen_mode,
                    on_change: move |checked| {
                        session.write().settings_mut().zen_mode = checked;
                    },
                }
                SettingsToggle {
                    label: "Automatic Mode",
                    help: "Auto-advance through facts",
                    checked: settings.auto_mode,
                    on_change: move |checked| {
                        session.write().settings_mut().auto_mode = checked;
                    },
                }
                SettingsToggle {
                    label: "Captions",
                    help: "Show captions for video content",
                    checked: settings.captions,
                    on_change: move |checked| {
                        session.write().settings_mut().captions = checked;
                    },
                }
            }

            section { class: "settings-card",
                h2 { "Session" }
                button {
                    class: "secondary-button",
                    onclick: move |_| {
                        draft_minutes.set(session.peek().settings().duration_minutes);
                        show_duration_dialog.set(true);
                    },
                    "Change Default Session Length"
                }
            }

            section { class: "settings-card",
                h2 { "Privacy" }
                button {
                    class: "danger-button",
                    onclick: move |_| show_reset_dialog.set(true),
                    "Reset All Data"
                }
                if reset_done() {
                    p { class: "settings-note", "All progress has been cleared." }
                }
            }

            if show_duration_dialog() {
                div { class: "dialog-backdrop",
                    div { class: "dialog",
                        h3 { "Default Session Length" }
                        div { class: "duration-display",
                            span { class: "duration-display__value", "{draft_minutes}" }
                            span { class: "duration-display__unit", "minutes" }
                        }
                        input {
                            r#type: "range",
                            min: "{MIN_SESSION_MINUTES}",
                            max: "{MAX_SESSION_MINUTES}",
                            step: "1",
                            value: "{draft_minutes}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<u32>() {
                                    draft_minutes.set(value);
                                }
                            },
                        }
                        div { class: "dialog__actions",
                            button {
                                class: "primary-button",
                                onclick: move |_| {
                                    session.write().settings_mut().duration_minutes =
                                        draft_minutes();
                                    show_duration_dialog.set(false);
                                },
                                "Save"
                            }
                        }
                    }
                }
            }

            if show_reset_dialog() {
                div { class: "dialog-backdrop",
                    div { class: "dialog",
                        h3 { "Reset All Data" }
                        p {
                            "This will clear all your progress. This action cannot be undone."
                        }
                        div { class: "dialog__actions",
                            button {
                                class: "secondary-button",
                                onclick: move |_| show_reset_dialog.set(false),
                                "Cancel"
                            }
                            button {
                                class: "danger-button",
                                onclick: {
                                    let ctx = ctx.clone();
                                    move |_| {
                                        let progress = ctx.progress();
                                        spawn(async move {
                                            progress.reset_progress().await;
                                        });
                                        show_reset_dialog.set(false);
                                        reset_done.set(true);
                                    }
                                },
                                "Reset Data"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsToggle(
    label: &'static str,
    help: &'static str,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "settings-row",
            div { class: "settings-row__label",
                p { class: "settings-row__title", "{label}" }
                p { class: "settings-row__help", "{help}" }
            }
            input {
                r#type: "checkbox",
                checked,
                onchange: move |evt| on_change.call(evt.checked()),
            }
        }
    }
}
