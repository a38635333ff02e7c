#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod session_tracker;

pub use bloom_core::Clock;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use progress_service::{PROGRESS_KEY, ProgressService};
pub use session_tracker::SessionTracker;
