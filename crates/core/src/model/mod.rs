mod category;
mod fact;
mod progress;
mod session;
mod settings;

pub use category::{Category, CategoryMetadata, ParseCategoryError};
pub use fact::{Fact, FactId, MediaKind, MediaRef};
pub use progress::UserProgress;
pub use session::{SessionPhase, SessionState, Tick};
pub use settings::{
    CONTINUE_SESSION_MINUTES, DEFAULT_SESSION_MINUTES, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES,
    SessionSettings,
};
