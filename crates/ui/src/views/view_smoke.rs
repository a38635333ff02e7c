use bloom_core::model::{Category, FactId};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_category_grid() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Bloom Scroll"), "missing brand in {html}");
    assert!(
        html.contains("What would you like to explore?"),
        "missing heading in {html}"
    );
    for category in Category::ALL {
        assert!(
            html.contains(category.display_name()),
            "missing {category} tile in {html}"
        );
    }
}

#[tokio::test(flavor = "current_thread")]
async fn explore_view_smoke_renders_topics() {
    let mut harness = setup_view_harness(ViewKind::Explore);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Explore Topics"), "missing title in {html}");
    assert!(html.contains("Space"), "missing tile in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_seeded_stats() {
    let mut harness = setup_view_harness(ViewKind::Progress);
    harness
        .progress
        .update_progress(&FactId::new("space-1"), Category::Space)
        .await;
    harness
        .progress
        .update_progress(&FactId::new("space-2"), Category::Space)
        .await;

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Your Progress"), "missing title in {html}");
    assert!(html.contains("Current Streak"), "missing streak in {html}");
    assert!(
        html.contains("Most explored topic"),
        "missing topic line in {html}"
    );
    assert!(html.contains("Space"), "missing topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_renders_sections() {
    let mut harness = setup_view_harness(ViewKind::Settings);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Zen Mode"), "missing zen toggle in {html}");
    assert!(
        html.contains("Change Default Session Length"),
        "missing session button in {html}"
    );
    assert!(html.contains("Reset All Data"), "missing reset in {html}");
}
