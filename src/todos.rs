//! Todo List Reducer
//!
//! Ordered list of completable items driven by a closed set of actions.
//! `TodoList::reduce` is pure: fresh ids are resolved when an action is
//! built, not when it is applied.

use serde::{Deserialize, Serialize};

pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
}

/// Source of fresh todo ids
pub trait IdSource {
    fn next_id(&mut self) -> TodoId;
}

/// Counter starting at 1
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: TodoId,
}

#[cfg(test)]
impl Default for SequentialIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TodoId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Wall-clock milliseconds, bumped so ids keep increasing when several
/// are taken within the same millisecond
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: TodoId,
}

impl TimestampIds {
    pub fn next_after(&mut self, now_ms: TodoId) -> TodoId {
        self.last = now_ms.max(self.last + 1);
        self.last
    }
}

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> TodoId {
        self.next_after(js_sys::Date::now() as TodoId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TodoAction {
    Add { id: TodoId, text: String },
    Toggle { id: TodoId },
    ClearDone,
    ClearAll,
    /// Any action type this reducer does not know
    #[serde(other)]
    Unknown,
}

impl TodoAction {
    /// Build an `Add` with a fresh id
    pub fn add(text: impl Into<String>, ids: &mut impl IdSource) -> Self {
        TodoAction::Add { id: ids.next_id(), text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: TodoAction) -> Self {
        match action {
            TodoAction::Add { id, text } => {
                let text = text.trim();
                if text.is_empty() || self.contains(id) {
                    return self;
                }
                self.items.push(Todo { id, text: text.to_string(), done: false });
            }
            TodoAction::Toggle { id } => {
                if let Some(todo) = self.items.iter_mut().find(|t| t.id == id) {
                    todo.done = !todo.done;
                }
            }
            TodoAction::ClearDone => self.items.retain(|t| !t.done),
            TodoAction::ClearAll => self.items.clear(),
            TodoAction::Unknown => {}
        }
        self
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.iter().any(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.iter().filter(|t| t.done).count()
    }
}
