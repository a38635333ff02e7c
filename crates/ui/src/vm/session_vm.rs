use bloom_core::model::{
    CONTINUE_SESSION_MINUTES, Fact, SessionSettings, SessionState, Tick,
};
use services::SessionTracker;

/// View-layer session holder: the session clock, the per-visit seen-set,
/// and the viewing preferences, shared across views through a signal.
///
/// Commands delegate to the pure `SessionState` transitions; the feed view
/// owns the tick scheduling and the persistence calls.
#[derive(Debug, Default)]
pub struct SessionVm {
    state: SessionState,
    tracker: SessionTracker,
    settings: SessionSettings,
}

impl SessionVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SessionSettings {
        &mut self.settings
    }

    /// Start a fresh session, clamping the duration into the picker range
    /// and starting a new seen-set.
    pub fn begin(&mut self, minutes: u32) {
        self.tracker.clear();
        self.state.start(SessionSettings::clamp_duration(minutes));
    }

    pub fn pause(&mut self) {
        self.state.pause();
    }

    pub fn resume(&mut self) {
        self.state.resume();
    }

    /// Keep going past the target with the standard extension.
    pub fn continue_session(&mut self) {
        self.state.continue_session(CONTINUE_SESSION_MINUTES);
    }

    pub fn end(&mut self) {
        self.state.end();
    }

    pub fn tick(&mut self) -> Tick {
        self.state.tick()
    }

    /// True when this fact has not been counted yet this visit.
    pub fn mark_viewed(&mut self, fact: &Fact) -> bool {
        self.tracker.mark_viewed(fact.id())
    }

    #[must_use]
    pub fn viewed_count(&self) -> usize {
        self.tracker.viewed_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::model::{Category, FactId, SessionPhase};

    fn sample_fact() -> Fact {
        Fact::new(FactId::new("space-1"), Category::Space, "text", "NASA", 1)
    }

    #[test]
    fn begin_clamps_and_clears_the_seen_set() {
        let mut vm = SessionVm::new();
        assert!(vm.mark_viewed(&sample_fact()));

        vm.begin(90);
        assert_eq!(vm.state().target_seconds(), 30 * 60);
        assert_eq!(vm.viewed_count(), 0);
        assert!(vm.mark_viewed(&sample_fact()));
        assert!(!vm.mark_viewed(&sample_fact()));
    }

    #[test]
    fn continue_session_extends_by_the_standard_grant() {
        let mut vm = SessionVm::new();
        vm.begin(5);
        while vm.state().phase() != SessionPhase::Finished {
            vm.tick();
        }

        vm.continue_session();
        assert_eq!(
            vm.state().target_seconds(),
            (5 + CONTINUE_SESSION_MINUTES) * 60
        );
        assert_eq!(vm.state().phase(), SessionPhase::Running);
    }
}
