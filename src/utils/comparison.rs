//! Utilities to compare custom types
//!
//! These can be used to sort results, e.g. with `sort_by` on the output of [`crate::TaskStore::filtered_tasks`]

use std::cmp::Ordering;

use crate::task::Task;

/// Compare tasks alphabetically, ignoring case
pub fn compare_tasks_alpha(left: &&Task, right: &&Task) -> Ordering {
    Ord::cmp(&left.name().to_lowercase(), &right.name().to_lowercase())
}

/// Compare tasks by due date, then alphabetically
pub fn compare_tasks_by_due_date(left: &&Task, right: &&Task) -> Ordering {
    Ord::cmp(left.due_date(), right.due_date())
        .then_with(|| compare_tasks_alpha(left, right))
}
