/// Phase of the session clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

/// Outcome of delivering one tick to the session clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The clock was not running; nothing changed.
    Skipped,
    /// One second elapsed, target not yet reached.
    Advanced,
    /// The target was reached on this tick. Reported exactly once per
    /// target; the caller records the session completion.
    Finished,
}

/// The session clock: counts elapsed seconds up to a target duration.
///
/// All commands are pure state transitions; the 1-second scheduling lives
/// with the caller, which runs a tick task only while `is_ticking` and
/// cancels it otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    target_seconds: u32,
    elapsed_seconds: u32,
    phase: SessionPhase,
    completion_recorded: bool,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn target_seconds(&self) -> u32 {
        self.target_seconds
    }

    /// Fraction of the target already elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.target_seconds == 0 {
            return 0.0;
        }
        f64::from(self.elapsed_seconds) / f64::from(self.target_seconds)
    }

    /// True while the tick task should be scheduled.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// True from `start` until `end`, including the paused and finished
    /// phases.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != SessionPhase::Idle
    }

    /// Begin a new session. Duration bounds are the caller's concern.
    pub fn start(&mut self, duration_minutes: u32) {
        self.target_seconds = duration_minutes * 60;
        self.elapsed_seconds = 0;
        self.phase = SessionPhase::Running;
        self.completion_recorded = false;
    }

    /// Suspend ticking; elapsed time is preserved.
    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Running {
            self.phase = SessionPhase::Paused;
        }
    }

    /// Resume ticking from the preserved elapsed time.
    pub fn resume(&mut self) {
        if self.phase == SessionPhase::Paused {
            self.phase = SessionPhase::Running;
        }
    }

    /// Extend the target and keep going without losing elapsed time.
    ///
    /// Re-arms the completion report, so reaching the new target emits a
    /// second completion.
    pub fn continue_session(&mut self, additional_minutes: u32) {
        self.target_seconds += additional_minutes * 60;
        self.phase = SessionPhase::Running;
        self.completion_recorded = false;
    }

    /// Tear the session down entirely.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Deliver one second of wall-clock time.
    ///
    /// Elapsed never exceeds the target. The transition into `Finished`
    /// reports `Tick::Finished` exactly once per target, even if further
    /// ticks are delivered before the task is cancelled.
    pub fn tick(&mut self) -> Tick {
        if self.phase != SessionPhase::Running {
            return Tick::Skipped;
        }

        if self.elapsed_seconds < self.target_seconds {
            self.elapsed_seconds += 1;
        }

        if self.elapsed_seconds >= self.target_seconds {
            self.phase = SessionPhase::Finished;
            if !self.completion_recorded {
                self.completion_recorded = true;
                return Tick::Finished;
            }
            return Tick::Skipped;
        }

        Tick::Advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(state: &mut SessionState, n: u32) -> u32 {
        let mut completions = 0;
        for _ in 0..n {
            if state.tick() == Tick::Finished {
                completions += 1;
            }
        }
        completions
    }

    #[test]
    fn start_arms_the_clock() {
        let mut state = SessionState::new();
        state.start(10);
        assert_eq!(state.phase(), SessionPhase::Running);
        assert_eq!(state.target_seconds(), 600);
        assert_eq!(state.elapsed_seconds(), 0);
    }

    #[test]
    fn full_run_finishes_with_exactly_one_completion() {
        let mut state = SessionState::new();
        state.start(2);

        let completions = run_ticks(&mut state, 120);
        assert_eq!(completions, 1);
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.elapsed_seconds(), 120);

        // Extra ticks after the target are clamped and stay silent.
        let extra = run_ticks(&mut state, 30);
        assert_eq!(extra, 0);
        assert_eq!(state.elapsed_seconds(), 120);
    }

    #[test]
    fn ticks_while_paused_leave_elapsed_unchanged() {
        let mut state = SessionState::new();
        state.start(5);
        run_ticks(&mut state, 30);
        state.pause();

        assert_eq!(run_ticks(&mut state, 60), 0);
        assert_eq!(state.elapsed_seconds(), 30);
        assert_eq!(state.phase(), SessionPhase::Paused);

        state.resume();
        assert_eq!(state.phase(), SessionPhase::Running);
        run_ticks(&mut state, 1);
        assert_eq!(state.elapsed_seconds(), 31);
    }

    #[test]
    fn continue_after_finish_rearms_completion() {
        let mut state = SessionState::new();
        state.start(1);
        assert_eq!(run_ticks(&mut state, 60), 1);
        assert_eq!(state.phase(), SessionPhase::Finished);

        state.continue_session(1);
        assert_eq!(state.phase(), SessionPhase::Running);
        assert_eq!(state.target_seconds(), 120);
        assert_eq!(state.elapsed_seconds(), 60);

        assert_eq!(run_ticks(&mut state, 60), 1);
        assert_eq!(state.phase(), SessionPhase::Finished);
    }

    #[test]
    fn end_resets_everything() {
        let mut state = SessionState::new();
        state.start(5);
        run_ticks(&mut state, 42);
        state.end();

        assert_eq!(state, SessionState::default());
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert_eq!(run_ticks(&mut state, 10), 0);
        assert_eq!(state.elapsed_seconds(), 0);
    }

    #[test]
    fn progress_fraction_tracks_elapsed_over_target() {
        let mut state = SessionState::new();
        assert_eq!(state.progress_fraction(), 0.0);

        state.start(1);
        run_ticks(&mut state, 30);
        assert!((state.progress_fraction() - 0.5).abs() < f64::EPSILON);
    }
}
