/// Watches the snap container and reports the visible card index through
/// `dioxus.send`. Also owns the auto-advance interval; whether it actually
/// scrolls is controlled by the flag in `feed_config_script`.
pub(super) const FEED_SCROLL_SCRIPT: &str = r#"(function() {
    const container = document.getElementById("feed-scroll");
    if (!container) {
        return;
    }
    const state = window.__bloomFeed || (window.__bloomFeed = {
        index: -1,
        auto: false,
        autoId: null,
    });
    state.index = -1;
    const cardIndex = () => {
        const height = container.clientHeight;
        if (!height) {
            return 0;
        }
        return Math.round(container.scrollTop / height);
    };
    const report = () => {
        const next = cardIndex();
        if (next !== state.index) {
            state.index = next;
            dioxus.send(next);
        }
    };
    container.addEventListener("scroll", report, { passive: true });
    report();
    if (state.autoId) {
        clearInterval(state.autoId);
    }
    state.autoId = setInterval(() => {
        if (!document.getElementById("feed-scroll")) {
            clearInterval(state.autoId);
            state.autoId = null;
            return;
        }
        if (!state.auto) {
            return;
        }
        // 8 seconds per card leaves room for comfortable reading.
        const height = container.clientHeight;
        container.scrollTo({
            top: (cardIndex() + 1) * height,
            behavior: "smooth",
        });
    }, 8000);
})();"#;

/// Flips the auto-advance flag read by the installed watcher.
pub(super) fn feed_config_script(auto_mode: bool) -> String {
    format!(
        r#"(function() {{
    const state = window.__bloomFeed || (window.__bloomFeed = {{
        index: -1,
        auto: false,
        autoId: null,
    }});
    state.auto = {auto_mode};
}})();"#
    )
}
