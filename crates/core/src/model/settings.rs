/// Shortest session the duration picker offers, in minutes.
pub const MIN_SESSION_MINUTES: u32 = 5;
/// Longest session the duration picker offers, in minutes.
pub const MAX_SESSION_MINUTES: u32 = 30;
/// Preselected session length, in minutes.
pub const DEFAULT_SESSION_MINUTES: u32 = 10;
/// Extra minutes granted when the user continues past the target.
pub const CONTINUE_SESSION_MINUTES: u32 = 10;

/// Per-visit viewing preferences. Not persisted; carried in view state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub duration_minutes: u32,
    pub zen_mode: bool,
    pub auto_mode: bool,
    pub captions: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_SESSION_MINUTES,
            zen_mode: false,
            auto_mode: false,
            captions: false,
        }
    }
}

impl SessionSettings {
    /// Clamp a requested duration into the supported range.
    ///
    /// The session core does not validate durations; the UI constrains
    /// input with this helper before starting a session.
    #[must_use]
    pub fn clamp_duration(minutes: u32) -> u32 {
        minutes.clamp(MIN_SESSION_MINUTES, MAX_SESSION_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_picker() {
        let settings = SessionSettings::default();
        assert_eq!(settings.duration_minutes, 10);
        assert!(!settings.zen_mode);
        assert!(!settings.auto_mode);
        assert!(!settings.captions);
    }

    #[test]
    fn clamp_keeps_durations_in_range() {
        assert_eq!(SessionSettings::clamp_duration(0), MIN_SESSION_MINUTES);
        assert_eq!(SessionSettings::clamp_duration(12), 12);
        assert_eq!(SessionSettings::clamp_duration(90), MAX_SESSION_MINUTES);
    }
}
