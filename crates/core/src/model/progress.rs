use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Category;

/// Durable progress aggregate, one record per installation.
///
/// Field names and the date format are the persisted storage layout:
/// camelCase keys, ISO 8601 calendar dates, empty string for "never
/// visited". `facts_by_category` carries the full fixed category key set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    total_facts_viewed: u32,
    facts_viewed_today: u32,
    current_streak: u32,
    session_completions: u32,
    #[serde(with = "visit_date")]
    last_visit_date: Option<NaiveDate>,
    facts_by_category: BTreeMap<Category, u32>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            total_facts_viewed: 0,
            facts_viewed_today: 0,
            current_streak: 0,
            session_completions: 0,
            last_visit_date: None,
            facts_by_category: Category::ALL.iter().map(|c| (*c, 0)).collect(),
        }
    }
}

impl UserProgress {
    #[must_use]
    pub fn total_facts_viewed(&self) -> u32 {
        self.total_facts_viewed
    }

    #[must_use]
    pub fn facts_viewed_today(&self) -> u32 {
        self.facts_viewed_today
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub fn session_completions(&self) -> u32 {
        self.session_completions
    }

    #[must_use]
    pub fn last_visit_date(&self) -> Option<NaiveDate> {
        self.last_visit_date
    }

    #[must_use]
    pub fn facts_in_category(&self, category: Category) -> u32 {
        self.facts_by_category.get(&category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn facts_by_category(&self) -> &BTreeMap<Category, u32> {
        &self.facts_by_category
    }

    /// Restore the fixed category key set on a record loaded from storage.
    ///
    /// Records written before a category existed miss its key; missing
    /// keys read as zero.
    pub fn normalize(&mut self) {
        for category in Category::ALL {
            self.facts_by_category.entry(category).or_insert(0);
        }
    }

    /// Apply the day rollover if the record was last visited before `today`.
    ///
    /// Resets the daily counter and recomputes the streak: a visit yesterday
    /// continues the streak, a gap of two or more days breaks it, and a
    /// first-ever visit leaves the streak at zero until a fact is viewed.
    /// Returns true if the record changed and must be persisted.
    pub fn roll_forward(&mut self, today: NaiveDate) -> bool {
        if self.last_visit_date == Some(today) {
            return false;
        }

        self.facts_viewed_today = 0;
        match self.last_visit_date {
            Some(last) if Some(last) == today.checked_sub_days(Days::new(1)) => {
                self.current_streak += 1;
            }
            Some(_) => {
                self.current_streak = 0;
            }
            None => {}
        }
        self.last_visit_date = Some(today);
        true
    }

    /// Count one newly viewed fact.
    ///
    /// The first fact of the day stamps the visit date and starts a streak
    /// if none is running. Callers deduplicate fact ids per feed visit;
    /// this method counts every call.
    pub fn record_fact_view(&mut self, category: Category, today: NaiveDate) {
        self.total_facts_viewed += 1;
        self.facts_viewed_today += 1;
        *self.facts_by_category.entry(category).or_insert(0) += 1;

        if self.facts_viewed_today == 1 {
            self.last_visit_date = Some(today);
            if self.current_streak == 0 {
                self.current_streak = 1;
            }
        }
    }

    /// Count one completed session.
    pub fn record_session_completion(&mut self) {
        self.session_completions += 1;
    }

    /// The category with the highest view count, as a display name.
    ///
    /// Returns `None` when every count is zero. Ties resolve to the first
    /// category in canonical order, so repeated calls agree.
    #[must_use]
    pub fn most_explored_topic(&self) -> Option<&'static str> {
        let mut best: Option<(Category, u32)> = None;
        for (category, count) in &self.facts_by_category {
            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ if *count == 0 => {}
                _ => best = Some((*category, *count)),
            }
        }
        best.map(|(category, _)| category.display_name())
    }
}

/// Serde mapping for the visit date: `YYYY-MM-DD`, empty string when unset.
mod visit_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_record_is_all_zero_with_full_key_set() {
        let progress = UserProgress::default();
        assert_eq!(progress.total_facts_viewed(), 0);
        assert_eq!(progress.facts_viewed_today(), 0);
        assert_eq!(progress.current_streak(), 0);
        assert_eq!(progress.session_completions(), 0);
        assert_eq!(progress.last_visit_date(), None);
        assert_eq!(progress.facts_by_category().len(), Category::ALL.len());
    }

    #[test]
    fn first_fact_view_starts_a_streak() {
        let today = date(2024, 3, 5);
        let mut progress = UserProgress::default();
        progress.record_fact_view(Category::Animals, today);

        assert_eq!(progress.total_facts_viewed(), 1);
        assert_eq!(progress.facts_viewed_today(), 1);
        assert_eq!(progress.current_streak(), 1);
        assert_eq!(progress.last_visit_date(), Some(today));
        assert_eq!(progress.facts_in_category(Category::Animals), 1);
    }

    #[test]
    fn counts_track_every_call_per_category() {
        let today = date(2024, 3, 5);
        let mut progress = UserProgress::default();
        for _ in 0..3 {
            progress.record_fact_view(Category::Space, today);
        }
        progress.record_fact_view(Category::Music, today);

        assert_eq!(progress.total_facts_viewed(), 4);
        assert_eq!(progress.facts_in_category(Category::Space), 3);
        assert_eq!(progress.facts_in_category(Category::Music), 1);
    }

    #[test]
    fn rollover_from_yesterday_extends_streak() {
        let today = date(2024, 3, 6);
        let mut progress = UserProgress::default();
        progress.record_fact_view(Category::Health, today.checked_sub_days(Days::new(1)).unwrap());
        let streak = progress.current_streak();

        assert!(progress.roll_forward(today));
        assert_eq!(progress.current_streak(), streak + 1);
        assert_eq!(progress.facts_viewed_today(), 0);
        assert_eq!(progress.last_visit_date(), Some(today));
    }

    #[test]
    fn rollover_after_gap_breaks_streak() {
        let today = date(2024, 3, 9);
        let mut progress = UserProgress::default();
        for day in 0..5 {
            let d = date(2024, 3, 1).checked_add_days(Days::new(day)).unwrap();
            progress.roll_forward(d);
            progress.record_fact_view(Category::Physics, d);
        }
        assert_eq!(progress.current_streak(), 5);

        // Last visit was 2024-03-05, four days before `today`.
        assert!(progress.roll_forward(today));
        assert_eq!(progress.current_streak(), 0);
    }

    #[test]
    fn rollover_is_spent_once_per_day() {
        let today = date(2024, 3, 6);
        let mut progress = UserProgress::default();
        progress.record_fact_view(Category::Energy, date(2024, 3, 5));

        assert!(progress.roll_forward(today));
        assert!(!progress.roll_forward(today));
    }

    #[test]
    fn first_ever_rollover_leaves_streak_untouched() {
        let mut progress = UserProgress::default();
        assert!(progress.roll_forward(date(2024, 3, 6)));
        assert_eq!(progress.current_streak(), 0);
    }

    #[test]
    fn most_explored_topic_breaks_ties_in_canonical_order() {
        let today = date(2024, 3, 6);
        let mut progress = UserProgress::default();
        for _ in 0..3 {
            progress.record_fact_view(Category::Animals, today);
        }
        for _ in 0..5 {
            progress.record_fact_view(Category::Space, today);
        }
        for _ in 0..5 {
            progress.record_fact_view(Category::Music, today);
        }

        assert_eq!(progress.most_explored_topic(), Some("Music"));
        assert_eq!(progress.most_explored_topic(), Some("Music"));
    }

    #[test]
    fn most_explored_topic_is_none_when_all_zero() {
        assert_eq!(UserProgress::default().most_explored_topic(), None);
    }

    #[test]
    fn serde_roundtrip_preserves_storage_field_names() {
        let today = date(2024, 3, 6);
        let mut progress = UserProgress::default();
        progress.record_fact_view(Category::Chemistry, today);
        progress.record_session_completion();

        let json = serde_json::to_string(&progress).unwrap();
        assert!(json.contains("\"totalFactsViewed\":1"));
        assert!(json.contains("\"factsViewedToday\":1"));
        assert!(json.contains("\"currentStreak\":1"));
        assert!(json.contains("\"sessionCompletions\":1"));
        assert!(json.contains("\"lastVisitDate\":\"2024-03-06\""));
        assert!(json.contains("\"chemistry\":1"));

        let back: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
    }

    #[test]
    fn empty_visit_date_serializes_as_empty_string() {
        let json = serde_json::to_string(&UserProgress::default()).unwrap();
        assert!(json.contains("\"lastVisitDate\":\"\""));
        let back: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back.last_visit_date(), None);
    }

    #[test]
    fn normalize_restores_missing_categories() {
        let json = r#"{
            "totalFactsViewed": 2,
            "factsViewedToday": 0,
            "currentStreak": 1,
            "sessionCompletions": 0,
            "lastVisitDate": "2024-03-06",
            "factsByCategory": {"space": 2}
        }"#;
        let mut progress: UserProgress = serde_json::from_str(json).unwrap();
        progress.normalize();

        assert_eq!(progress.facts_by_category().len(), Category::ALL.len());
        assert_eq!(progress.facts_in_category(Category::Space), 2);
        assert_eq!(progress.facts_in_category(Category::Animals), 0);
    }
}
