use std::sync::Arc;

use bloom_core::catalog;
use bloom_core::model::{Category, SessionState, Tick};
use bloom_core::time::fixed_clock;
use services::{ProgressService, SessionTracker};
use storage::repository::{InMemoryKvStore, KvStore};

#[tokio::test]
async fn a_full_session_updates_progress_and_completes_once() {
    let kv: Arc<dyn KvStore> = Arc::new(InMemoryKvStore::new());
    let progress = ProgressService::new(fixed_clock(), Arc::clone(&kv));

    let mut session = SessionState::new();
    let mut tracker = SessionTracker::new();
    session.start(5);

    // Scroll through the first three space facts, revisiting the first one.
    let facts = catalog::facts_by_category(Category::Space);
    for fact in facts.iter().take(3).chain(facts.iter().take(1)) {
        if tracker.mark_viewed(fact.id()) {
            progress.update_progress(fact.id(), fact.category()).await;
        }
    }

    // Run the clock out; the finish tick records the completion.
    let mut completions = 0;
    for _ in 0..(5 * 60 + 10) {
        if session.tick() == Tick::Finished {
            progress.complete_session().await;
            completions += 1;
        }
    }
    assert_eq!(completions, 1);

    let record = progress.get_progress().await;
    assert_eq!(record.total_facts_viewed(), 3);
    assert_eq!(record.facts_in_category(Category::Space), 3);
    assert_eq!(record.session_completions(), 1);
    assert_eq!(record.current_streak(), 1);
    assert_eq!(record.most_explored_topic(), Some("Space"));
}

#[tokio::test]
async fn continuing_past_the_target_records_a_second_completion() {
    let kv: Arc<dyn KvStore> = Arc::new(InMemoryKvStore::new());
    let progress = ProgressService::new(fixed_clock(), Arc::clone(&kv));

    let mut session = SessionState::new();
    session.start(1);

    let mut completions = 0;
    for _ in 0..90 {
        if session.tick() == Tick::Finished {
            progress.complete_session().await;
            completions += 1;
        }
    }
    assert_eq!(completions, 1);

    session.continue_session(1);
    for _ in 0..90 {
        if session.tick() == Tick::Finished {
            progress.complete_session().await;
            completions += 1;
        }
    }
    assert_eq!(completions, 2);

    let record = progress.get_progress().await;
    assert_eq!(record.session_completions(), 2);
}
