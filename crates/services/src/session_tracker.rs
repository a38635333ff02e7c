use std::collections::HashSet;

use bloom_core::model::FactId;

/// Per-feed-visit set of already-counted fact ids.
///
/// `ProgressService::update_progress` counts every call, so the feed runs
/// each visible fact through this tracker first and only persists views
/// that are new within the visit.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    viewed: HashSet<FactId>,
}

impl SessionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fact as viewed. Returns true the first time an id is seen
    /// this visit, false on every repeat.
    pub fn mark_viewed(&mut self, fact_id: &FactId) -> bool {
        self.viewed.insert(fact_id.clone())
    }

    #[must_use]
    pub fn viewed_count(&self) -> usize {
        self.viewed.len()
    }

    /// Forget everything; used when a new feed visit begins.
    pub fn clear(&mut self) {
        self.viewed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_view_is_new_repeat_is_not() {
        let mut tracker = SessionTracker::new();
        let id = FactId::new("space-1");

        assert!(tracker.mark_viewed(&id));
        assert!(!tracker.mark_viewed(&id));
        assert_eq!(tracker.viewed_count(), 1);
    }

    #[test]
    fn scrolling_back_does_not_recount() {
        let mut tracker = SessionTracker::new();
        let first = FactId::new("space-1");
        let second = FactId::new("space-2");

        assert!(tracker.mark_viewed(&first));
        assert!(tracker.mark_viewed(&second));
        assert!(!tracker.mark_viewed(&first));
        assert_eq!(tracker.viewed_count(), 2);
    }

    #[test]
    fn clear_starts_a_fresh_visit() {
        let mut tracker = SessionTracker::new();
        let id = FactId::new("music-3");
        tracker.mark_viewed(&id);
        tracker.clear();

        assert_eq!(tracker.viewed_count(), 0);
        assert!(tracker.mark_viewed(&id));
    }
}
