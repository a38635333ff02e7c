use std::sync::Arc;

use tracing::{debug, warn};

use bloom_core::Clock;
use bloom_core::model::{Category, FactId, UserProgress};
use storage::repository::KvStore;

/// Fixed key the progress record is stored under.
pub const PROGRESS_KEY: &str = "bloom-scroll-progress";

/// The persisted progress aggregate behind a load → mutate → save cycle.
///
/// Every operation degrades gracefully: a missing, corrupt, or unreachable
/// record reads as the all-zero default, and failed writes are logged and
/// dropped. Callers never see a storage error.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    kv: Arc<dyn KvStore>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, kv: Arc<dyn KvStore>) -> Self {
        Self { clock, kv }
    }

    /// Load the record, rolled forward to today.
    ///
    /// The first read on a new day resets the daily counter, recomputes the
    /// streak, stamps today's date, and persists — before any fact has been
    /// viewed. Merely opening the app advances streak bookkeeping; that
    /// matches the product behavior ("visiting counts").
    pub async fn get_progress(&self) -> UserProgress {
        let mut progress = self.load().await;
        if progress.roll_forward(self.clock.today()) {
            self.save(&progress).await;
        }
        progress
    }

    /// Count one newly viewed fact and persist.
    ///
    /// No deduplication happens here; the feed tracks which fact ids it has
    /// already counted this visit.
    pub async fn update_progress(&self, fact_id: &FactId, category: Category) -> UserProgress {
        let mut progress = self.get_progress().await;
        progress.record_fact_view(category, self.clock.today());
        self.save(&progress).await;
        debug!(fact = %fact_id, category = %category, "recorded fact view");
        progress
    }

    /// Count one completed session and persist.
    pub async fn complete_session(&self) -> UserProgress {
        let mut progress = self.get_progress().await;
        progress.record_session_completion();
        self.save(&progress).await;
        debug!(
            completions = progress.session_completions(),
            "recorded session completion"
        );
        progress
    }

    /// Erase the persisted record; the next read recreates defaults.
    pub async fn reset_progress(&self) {
        if let Err(err) = self.kv.delete(PROGRESS_KEY).await {
            warn!(error = %err, "failed to reset progress record");
        }
    }

    async fn load(&self) -> UserProgress {
        match self.kv.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<UserProgress>(&raw) {
                Ok(mut progress) => {
                    progress.normalize();
                    progress
                }
                Err(err) => {
                    warn!(error = %err, "corrupt progress record, starting from defaults");
                    UserProgress::default()
                }
            },
            Ok(None) => UserProgress::default(),
            Err(err) => {
                warn!(error = %err, "progress storage unavailable, using defaults");
                UserProgress::default()
            }
        }
    }

    async fn save(&self, progress: &UserProgress) {
        let raw = match serde_json::to_string(progress) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to serialize progress record, update dropped");
                return;
            }
        };
        if let Err(err) = self.kv.set(PROGRESS_KEY, &raw).await {
            warn!(error = %err, "failed to persist progress record, update dropped");
        }
    }
}
