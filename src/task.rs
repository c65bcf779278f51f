//! To-do tasks

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDateTime, Utc};


/// The identity of a [`Task`]. It is picked at random when the task is created and is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId {
    content: Uuid,
}
impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}


/// Whether a task is done. A completed task may remember when it has been completed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CompletionStatus {
    Completed(Option<DateTime<Utc>>),
    Uncompleted,
}
impl CompletionStatus {
    pub fn is_completed(&self) -> bool {
        match self {
            CompletionStatus::Completed(_) => true,
            _ => false,
        }
    }
}
impl Default for CompletionStatus {
    fn default() -> Self {
        CompletionStatus::Uncompleted
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,

    /// The display name of the task. This may be empty, it is up to the UI to forbid it
    name: String,
    /// When this task is due. Only its calendar day is meaningful
    due_date: NaiveDateTime,
    /// The name of the category this task belongs to.
    /// This is not checked against the known categories
    category: String,
    completion_status: CompletionStatus,
    /// Free-text notes
    details: Option<String>,

    creation_date: DateTime<Utc>,
    /// The last time this item was modified
    last_modified: DateTime<Utc>,
}

impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new (random) task ID.
    pub fn new(name: String, due_date: NaiveDateTime, category: String, details: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::random(),
            name,
            due_date,
            category,
            completion_status: CompletionStatus::Uncompleted,
            details,
            creation_date: now,
            last_modified: now,
        }
    }

    pub fn id(&self) -> &TaskId         { &self.id          }
    pub fn name(&self) -> &str          { &self.name        }
    pub fn due_date(&self) -> &NaiveDateTime { &self.due_date }
    pub fn category(&self) -> &str      { &self.category    }
    pub fn details(&self) -> Option<&str> { self.details.as_deref() }
    pub fn completed(&self) -> bool     { self.completion_status.is_completed() }
    pub fn completion_status(&self) -> &CompletionStatus { &self.completion_status }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }

    fn update_last_modified(&mut self) {
        self.last_modified = Utc::now();
    }

    /// Rename a task.
    /// This updates its "last modified" field
    pub fn set_name(&mut self, new_name: String) {
        self.update_last_modified();
        self.name = new_name;
    }

    pub fn set_due_date(&mut self, new_due_date: NaiveDateTime) {
        self.update_last_modified();
        self.due_date = new_due_date;
    }

    pub fn set_details(&mut self, new_details: Option<String>) {
        self.update_last_modified();
        self.details = new_details;
    }

    pub fn set_category(&mut self, new_category: String) {
        self.update_last_modified();
        self.category = new_category;
    }

    /// Set the completion status
    pub fn set_completion_status(&mut self, new_completion_status: CompletionStatus) {
        self.update_last_modified();
        self.completion_status = new_completion_status;
    }

    /// Flip the completion status, and return whether the task is now completed
    pub fn toggle_completion(&mut self) -> bool {
        let new_status = match self.completed() {
            true => CompletionStatus::Uncompleted,
            false => CompletionStatus::Completed(Some(Utc::now())),
        };
        self.set_completion_status(new_status);
        self.completed()
    }
}


/// A set of changes to apply to a task with [`TaskStore::update_task`](crate::TaskStore::update_task).
///
/// Fields that are left to `None` are not changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    /// `Some(None)` removes the notes of the task
    pub details: Option<Option<String>>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(Some(details.into()));
        self
    }

    pub fn clear_details(mut self) -> Self {
        self.details = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.due_date.is_none() && self.details.is_none()
    }

    /// Apply these changes to a task
    pub(crate) fn apply_to(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.set_name(name);
        }
        if let Some(due_date) = self.due_date {
            task.set_due_date(due_date);
        }
        if let Some(details) = self.details {
            task.set_details(details);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn some_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn new_task_is_uncompleted() {
        let task = Task::new("Buy milk".to_string(), some_date(), "Personal".to_string(), None);
        assert_eq!(task.completed(), false);
        assert_eq!(task.details(), None);
        assert_eq!(task.creation_date(), task.last_modified());
    }

    #[test]
    fn toggling_records_completion_date() {
        let mut task = Task::new("Buy milk".to_string(), some_date(), "Personal".to_string(), None);
        assert!(task.toggle_completion());
        match task.completion_status() {
            CompletionStatus::Completed(Some(_)) => (),
            other => panic!("Unexpected status {:?}", other),
        }
        assert_eq!(task.toggle_completion(), false);
        assert_eq!(task.completion_status(), &CompletionStatus::Uncompleted);
    }

    #[test]
    fn partial_update() {
        let mut task = Task::new("Report".to_string(), some_date(), "Work".to_string(), Some("draft".to_string()));
        TaskUpdate::new().name("Final report").apply_to(&mut task);
        assert_eq!(task.name(), "Final report");
        assert_eq!(task.details(), Some("draft"));
        assert_eq!(task.due_date(), &some_date());

        TaskUpdate::new().clear_details().apply_to(&mut task);
        assert_eq!(task.details(), None);
        assert_eq!(task.name(), "Final report");
    }
}
