use chrono::NaiveDate;

use bloom_core::model::{Category, UserProgress};

/// Display-ready snapshot of the progress record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub current_streak: u32,
    pub facts_viewed_today: u32,
    pub total_facts_viewed: u32,
    pub session_completions: u32,
    pub last_visit: Option<NaiveDate>,
    pub most_explored: Option<&'static str>,
    pub per_category: Vec<(Category, u32)>,
}

#[must_use]
pub fn map_progress(progress: &UserProgress) -> ProgressVm {
    ProgressVm {
        current_streak: progress.current_streak(),
        facts_viewed_today: progress.facts_viewed_today(),
        total_facts_viewed: progress.total_facts_viewed(),
        session_completions: progress.session_completions(),
        last_visit: progress.last_visit_date(),
        most_explored: progress.most_explored_topic(),
        per_category: Category::ALL
            .iter()
            .map(|category| (*category, progress.facts_in_category(*category)))
            .collect(),
    }
}
