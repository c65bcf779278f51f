//! The in-memory store that holds tasks and categories

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::calendar::{is_same_day, CalendarDay};
use crate::category::{Category, CategoryId};
use crate::config::Settings;
use crate::error::StoreError;
use crate::filter::StatusFilter;
use crate::observer::{Observers, StoreEvent, SubscriptionId};
use crate::task::{Task, TaskId, TaskUpdate};


/// Holds the tasks and categories of the app, as well as what the task list currently shows.
///
/// Tasks and categories are kept in insertion order. Derived views ([`filtered_tasks`](Self::filtered_tasks),
/// [`pending_tasks_on`](Self::pending_tasks_on)) are computed on every call and never alter the collections.
///
/// Every successful mutation notifies the subscribed observers before returning.
/// A store is meant to be used from a single thread. Hosts that share it between threads must serialize accesses
/// to it (e.g. behind a `Mutex`), which is why it is neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    selected_filter: StatusFilter,
    /// `None` means "all categories"
    selected_category: Option<String>,

    observers: Observers,
}

impl TaskStore {
    /// Create a store with no task, and the default categories from the [`config`](crate::config)
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            tasks: Vec::new(),
            categories: settings.seed_categories.iter().cloned().map(Category::new).collect(),
            selected_filter: StatusFilter::default(),
            selected_category: None,
            observers: Observers::default(),
        }
    }

    pub fn tasks(&self) -> &[Task]                      { &self.tasks }
    pub fn categories(&self) -> &[Category]             { &self.categories }
    pub fn selected_filter(&self) -> StatusFilter       { self.selected_filter }
    pub fn selected_category(&self) -> Option<&str>     { self.selected_category.as_deref() }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id() == id)
    }

    /// Register a function that will be called after every change made to this store.
    ///
    /// Listeners only receive the event: the store is still mutably borrowed while they run.
    /// They should read the store once the mutating call has returned, which is when its derived views are up to date.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.observers.subscribe(Box::new(listener))
    }

    /// Returns `false` if this subscription did not exist (anymore)
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Append a new, uncompleted task
    pub fn add_task(&mut self, name: String, due_date: NaiveDateTime, category: String, details: Option<String>) -> TaskId {
        let task = Task::new(name, due_date, category, details);
        let id = *task.id();
        log::debug!("Adding task {} ({:?}) in category {:?}", id, task.name(), task.category());
        self.tasks.push(task);
        self.observers.notify(StoreEvent::TaskAdded(id));
        id
    }

    /// Append a new category. Names do not have to be unique
    pub fn add_category(&mut self, name: String) -> CategoryId {
        let category = Category::new(name);
        let id = *category.id();
        log::debug!("Adding category {} ({:?})", id, category.name());
        self.categories.push(category);
        self.observers.notify(StoreEvent::CategoryAdded(id));
        id
    }

    /// Flip the completion status of a task, and return whether it is now completed
    pub fn toggle_completion(&mut self, id: &TaskId) -> Result<bool, StoreError> {
        let task = self.task_mut(id)?;
        let completed = task.toggle_completion();
        log::debug!("Task {} is now {}", id, if completed { "completed" } else { "pending" });
        self.observers.notify(StoreEvent::TaskToggled{ id: *id, completed });
        Ok(completed)
    }

    /// Apply changes to a task. Fields that are not set in `changes` are left untouched
    pub fn update_task(&mut self, id: &TaskId, changes: TaskUpdate) -> Result<(), StoreError> {
        let task = self.task_mut(id)?;
        if changes.is_empty() {
            log::debug!("Empty update of task {}", id);
        } else {
            changes.apply_to(task);
            log::debug!("Task {} updated", id);
        }
        self.observers.notify(StoreEvent::TaskUpdated(*id));
        Ok(())
    }

    /// Remove tasks from the store, and return them (in their former order).
    ///
    /// This is all-or-nothing: if any of the IDs is unknown, nothing is removed.
    /// Observers are not notified when `ids` is empty, since nothing changes.
    pub fn delete_tasks(&mut self, ids: &[TaskId]) -> Result<Vec<Task>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        if let Some(missing) = ids.iter().find(|id| self.task(id).is_none()) {
            log::warn!("Cannot delete unknown task {}", missing);
            return Err(StoreError::TaskNotFound(*missing));
        }

        let to_delete: HashSet<&TaskId> = ids.iter().collect();
        let (deleted, kept): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| to_delete.contains(task.id()));
        self.tasks = kept;

        let deleted_ids: Vec<TaskId> = deleted.iter().map(|task| *task.id()).collect();
        log::debug!("Deleted {} task(s)", deleted_ids.len());
        self.observers.notify(StoreEvent::TasksDeleted(deleted_ids));
        Ok(deleted)
    }

    /// Remove tasks given their positions in the current [`filtered_tasks`](Self::filtered_tasks) view.
    ///
    /// Positions are resolved to tasks before anything is removed, so that position 0 is the first task the user sees,
    /// whatever filter is active. This is all-or-nothing: an out-of-range position removes nothing.
    pub fn delete_filtered(&mut self, positions: &[usize]) -> Result<Vec<Task>, StoreError> {
        let ids = {
            let visible = self.filtered_tasks();
            positions.iter()
                .map(|&pos| match visible.get(pos) {
                    Some(task) => Ok(*task.id()),
                    None => {
                        log::warn!("No task at position {} of the filtered view ({} visible)", pos, visible.len());
                        Err(StoreError::NoTaskAtPosition(pos))
                    },
                })
                .collect::<Result<Vec<TaskId>, StoreError>>()?
        };
        self.delete_tasks(&ids)
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        log::debug!("Filter set to {}", filter);
        self.selected_filter = filter;
        self.observers.notify(StoreEvent::FilterChanged(filter));
    }

    /// Only show tasks of this category, or of every category when `None`
    pub fn set_selected_category(&mut self, category: Option<String>) {
        log::debug!("Selected category set to {:?}", category);
        self.selected_category = category.clone();
        self.observers.notify(StoreEvent::SelectedCategoryChanged(category));
    }

    /// Rename a category.
    ///
    /// Since tasks refer to categories by name, tasks (and the current category selection) that used the former name follow
    /// the rename. This does not happen when another category still carries the former name: they keep pointing at it.
    pub fn rename_category(&mut self, id: &CategoryId, new_name: String) -> Result<(), StoreError> {
        let old_name = match self.categories.iter_mut().find(|cat| cat.id() == id) {
            None => {
                log::warn!("Cannot rename unknown category {}", id);
                return Err(StoreError::CategoryNotFound(*id));
            },
            Some(category) => {
                let old_name = category.name().to_string();
                category.set_name(new_name.clone());
                old_name
            },
        };

        let name_still_used = self.categories.iter().any(|cat| cat.name() == old_name);
        if name_still_used == false {
            for task in self.tasks.iter_mut().filter(|task| task.category() == old_name) {
                task.set_category(new_name.clone());
            }
            if self.selected_category.as_deref() == Some(old_name.as_str()) {
                self.selected_category = Some(new_name.clone());
            }
        }

        log::debug!("Category {} renamed from {:?} to {:?}", id, old_name, new_name);
        self.observers.notify(StoreEvent::CategoryRenamed{ id: *id, old_name, new_name });
        Ok(())
    }

    /// The tasks to list, according to the selected filter and category, in insertion order
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.iter()
            .filter(|task| self.selected_filter.matches(task))
            .filter(|task| match &self.selected_category {
                Some(category) => task.category() == category,
                None => true,
            })
            .collect()
    }

    /// The tasks that are not completed yet and are due on the same day as `day`.
    ///
    /// This ignores the selected filter and category.
    pub fn pending_tasks_on<D: CalendarDay>(&self, day: D) -> Vec<&Task> {
        let day = day.calendar_day();
        self.tasks.iter()
            .filter(|task| task.completed() == false && is_same_day(task.due_date(), day))
            .collect()
    }

    /// Whether a calendar should draw a "pending tasks" indicator on this day
    pub fn has_pending_tasks_on<D: CalendarDay>(&self, day: D) -> bool {
        let day = day.calendar_day();
        self.tasks.iter()
            .any(|task| task.completed() == false && is_same_day(task.due_date(), day))
    }

    fn task_mut(&mut self, id: &TaskId) -> Result<&mut Task, StoreError> {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => Ok(task),
            None => {
                log::warn!("No task with id {}", id);
                Err(StoreError::TaskNotFound(*id))
            },
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
