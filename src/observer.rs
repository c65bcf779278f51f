//! Change notifications sent by a [`TaskStore`](crate::TaskStore)

use std::fmt::{Display, Error, Formatter};

use crate::category::CategoryId;
use crate::filter::StatusFilter;
use crate::task::TaskId;

/// A change that has just been applied to a store
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    TaskAdded(TaskId),
    CategoryAdded(CategoryId),
    TaskToggled{ id: TaskId, completed: bool },
    TaskUpdated(TaskId),
    /// Tasks have been removed (in their former collection order)
    TasksDeleted(Vec<TaskId>),
    FilterChanged(StatusFilter),
    SelectedCategoryChanged(Option<String>),
    CategoryRenamed{ id: CategoryId, old_name: String, new_name: String },
}

impl Display for StoreEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            StoreEvent::TaskAdded(id) => write!(f, "Task {} added", id),
            StoreEvent::CategoryAdded(id) => write!(f, "Category {} added", id),
            StoreEvent::TaskToggled{id, completed} => match completed {
                true => write!(f, "Task {} completed", id),
                false => write!(f, "Task {} marked as pending", id),
            },
            StoreEvent::TaskUpdated(id) => write!(f, "Task {} updated", id),
            StoreEvent::TasksDeleted(ids) => write!(f, "{} task(s) deleted", ids.len()),
            StoreEvent::FilterChanged(filter) => write!(f, "Filter set to {}", filter),
            StoreEvent::SelectedCategoryChanged(None) => write!(f, "Showing all categories"),
            StoreEvent::SelectedCategoryChanged(Some(name)) => write!(f, "Showing category {}", name),
            StoreEvent::CategoryRenamed{old_name, new_name, ..} => write!(f, "Category {} renamed to {}", old_name, new_name),
        }
    }
}


/// Returned by [`TaskStore::subscribe`](crate::TaskStore::subscribe), used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// The listeners registered on a store
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Observers {
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let n_before = self.listeners.len();
        self.listeners.retain(|(sub_id, _)| *sub_id != id);
        self.listeners.len() != n_before
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Send an event to every listener, in subscription order
    pub fn notify(&mut self, event: StoreEvent) {
        log::trace!("Notifying {} listener(s): {}", self.listeners.len(), event);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_order_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        let seen_a = Rc::clone(&seen);
        let a = observers.subscribe(Box::new(move |_: &StoreEvent| seen_a.borrow_mut().push("a")));
        let seen_b = Rc::clone(&seen);
        observers.subscribe(Box::new(move |_: &StoreEvent| seen_b.borrow_mut().push("b")));

        observers.notify(StoreEvent::FilterChanged(StatusFilter::Pending));
        assert_eq!(*seen.borrow(), vec!["a", "b"]);

        assert!(observers.unsubscribe(a));
        assert_eq!(observers.unsubscribe(a), false);
        observers.notify(StoreEvent::FilterChanged(StatusFilter::All));
        assert_eq!(*seen.borrow(), vec!["a", "b", "b"]);
        assert_eq!(observers.len(), 1);
    }
}
