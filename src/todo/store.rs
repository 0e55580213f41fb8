use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Volatile to-do list. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self { inner: Mutex::new(Inner { todos: Vec::new(), next_id: 1 }) }
    }

    // Every critical section leaves `Inner` consistent; poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list(&self) -> Vec<Todo> {
        self.lock().todos.clone()
    }

    pub fn get(&self, id: u64) -> Option<Todo> {
        self.lock().todos.iter().find(|t| t.id == id).cloned()
    }

    pub fn create(&self, text: &str) -> Todo {
        let mut inner = self.lock();
        let todo = Todo { id: inner.next_id, text: text.trim().to_string(), completed: false };
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        todo
    }

    pub fn update(&self, id: u64, patch: TodoPatch) -> Option<Todo> {
        let mut inner = self.lock();
        let todo = inner.todos.iter_mut().find(|t| t.id == id)?;
        if let Some(text) = patch.text {
            todo.text = text;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    pub fn delete(&self, id: u64) -> Option<Todo> {
        let mut inner = self.lock();
        let index = inner.todos.iter().position(|t| t.id == id)?;
        Some(inner.todos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let store = TodoStore::new();
        let first = store.create("first");
        let second = store.create("  second  ");
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(second.text, "second");

        store.delete(2).unwrap();
        assert_eq!(store.create("third").id, 3);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn update_applies_only_given_fields() {
        let store = TodoStore::new();
        let todo = store.create("Buy milk");

        let updated = store
            .update(todo.id, TodoPatch { text: None, completed: Some(true) })
            .unwrap();
        assert_eq!(updated.text, "Buy milk");
        assert!(updated.completed);

        assert!(store.update(99, TodoPatch::default()).is_none());
    }

    #[test]
    fn delete_missing_returns_none() {
        let store = TodoStore::new();
        assert!(store.delete(1).is_none());
        assert!(store.get(1).is_none());
    }
}
