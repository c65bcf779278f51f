//! Errors returned by this crate

use thiserror::Error;

use crate::category::CategoryId;
use crate::task::TaskId;

/// Errors raised by [`TaskStore`](crate::TaskStore) mutations.
///
/// All of them are recoverable: a failed mutation leaves the store untouched and notifies no observer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("no task with id {0}")]
    TaskNotFound(TaskId),
    #[error("no category with id {0}")]
    CategoryNotFound(CategoryId),
    /// A position in the filtered view that does not exist (the view is shorter than that)
    #[error("no task at position {0} of the filtered view")]
    NoTaskAtPosition(usize),
}

/// Errors raised when loading [`Settings`](crate::config::Settings)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown locale {0:?}")]
    UnknownLocale(String),
}
