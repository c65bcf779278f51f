//! Status filters for the task list

use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Flags to tell which tasks should be listed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Return all tasks
    All,
    /// Return only tasks that are not completed yet
    Pending,
    /// Return only completed tasks
    Completed,
}

impl StatusFilter {
    /// Every filter, in the order a filter picker would show them
    pub const ALL_FILTERS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => task.completed() == false,
            StatusFilter::Completed => task.completed(),
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Pending => write!(f, "Pending"),
            StatusFilter::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(StatusFilter::All),
            "Pending" => Ok(StatusFilter::Pending),
            "Completed" => Ok(StatusFilter::Completed),
            other => Err(format!("Unknown filter {:?}", other)),
        }
    }
}
