//! This crate provides the in-memory core of a to-do list app.
//!
//! A [`TaskStore`] holds tasks and categories, remembers which status filter and category the task list currently shows,
//! and computes the derived views the UI displays (the filtered list, the pending tasks of a given day). \
//! Every change made to a store is synchronously reported to its subscribers, see [`observer`].
//!
//! The [`calendar`] module computes the fixed-size month grids a calendar view is drawn from.
//!
//! Nothing is persisted: a new store always starts from the default categories of the [`config`] module.

pub mod calendar;
pub use calendar::{is_same_day, month_grid_days, weekday_header_labels, CalendarLocale, MonthGrid};
mod category;
pub use category::{Category, CategoryId};
mod task;
pub use task::{CompletionStatus, Task, TaskId, TaskUpdate};
mod filter;
pub use filter::StatusFilter;
pub mod observer;
pub use observer::{StoreEvent, SubscriptionId};
mod store;
pub use store::TaskStore;

pub mod error;
pub use error::StoreError;
pub mod config;
pub mod utils;
