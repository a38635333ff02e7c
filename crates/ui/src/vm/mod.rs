mod progress_vm;
mod session_vm;
mod time_fmt;

pub use progress_vm::{ProgressVm, map_progress};
pub use session_vm::SessionVm;
pub use time_fmt::format_clock;
