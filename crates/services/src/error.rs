//! Shared error types for the services crate.
//!
//! Progress tracking itself never surfaces errors: `ProgressService`
//! degrades to defaults and logs. Only service bootstrap is fallible.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
