use indexmap::IndexMap;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::models::Todo;

#[derive(Debug, Default)]
struct Inner {
    todos: IndexMap<String, Todo>,
    last_id: u64,
}

/// In-memory todo store shared by all handlers
///
/// Records keep insertion order. Ids come from a counter that only moves
/// forward, so an id freed by a delete is never handed out again.
#[derive(Debug, Default)]
pub struct TodoStore {
    inner: RwLock<Inner>,
    create_delay: Duration,
}

impl TodoStore {
    /// Creates an empty store whose `create` waits `create_delay` before inserting
    pub fn new(create_delay: Duration) -> Self {
        TodoStore {
            inner: RwLock::new(Inner::default()),
            create_delay,
        }
    }

    /// All todos in insertion order
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.todos.values().cloned().collect()
    }

    /// Stores a new todo and returns its id along with the stored value
    ///
    /// The simulated latency elapses before the write lock is taken; id
    /// allocation and insertion happen in one critical section.
    pub async fn create(&self, todo: Todo) -> (String, Todo) {
        if !self.create_delay.is_zero() {
            tokio::time::sleep(self.create_delay).await;
        }

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id.to_string();
        inner.todos.insert(id.clone(), todo.clone());
        (id, todo)
    }

    pub async fn get(&self, id: &str) -> Option<Todo> {
        self.inner.read().await.todos.get(id).cloned()
    }

    /// Replaces the todo stored under `id`, keeping its position
    ///
    /// Returns `None` without inserting anything when `id` is unknown.
    pub async fn update(&self, id: &str, todo: Todo) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let slot = inner.todos.get_mut(id)?;
        *slot = todo.clone();
        Some(todo)
    }

    /// Removes and returns the todo stored under `id`
    pub async fn delete(&self, id: &str) -> Option<Todo> {
        self.inner.write().await.todos.shift_remove(id)
    }

    /// Empties the store and restarts ids at "1"
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.todos.clear();
        inner.last_id = 0;
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    fn store() -> TodoStore {
        TodoStore::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = store();
        let (first, _) = store.create(Todo::new("a")).await;
        let (second, _) = store.create(Todo::new("b")).await;
        assert_eq!(first, "1");
        assert_eq!(second, "2");
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = store();
        store.create(Todo::new("a")).await;
        store.create(Todo::new("b")).await;
        assert_eq!(store.delete("1").await, Some(Todo::new("a")));

        let (id, _) = store.create(Todo::new("c")).await;
        assert_eq!(id, "3");
        assert_eq!(store.get("2").await, Some(Todo::new("b")));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = store();
        for name in ["a", "b", "c", "d"] {
            store.create(Todo::new(name)).await;
        }
        store
            .update(
                "2",
                Todo {
                    name: "B".to_string(),
                    completed: true,
                },
            )
            .await
            .unwrap();
        store.delete("3").await.unwrap();

        let names: Vec<String> = store.list().await.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a", "B", "d"]);
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let store = store();
        assert_eq!(store.update("999", Todo::new("x")).await, None);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = store();
        store.create(Todo::new("a")).await;
        assert!(store.delete("1").await.is_some());
        assert!(store.delete("1").await.is_none());
        assert!(store.get("1").await.is_none());
    }

    #[tokio::test]
    async fn test_lookup_is_exact_string_match() {
        let store = store();
        store.create(Todo::new("a")).await;
        assert!(store.get("01").await.is_none());
        assert!(store.get(" 1").await.is_none());
    }

    #[tokio::test]
    async fn test_clear_resets_ids() {
        let store = store();
        store.create(Todo::new("a")).await;
        store.create(Todo::new("b")).await;
        store.clear().await;

        assert!(store.list().await.is_empty());
        let (id, _) = store.create(Todo::new("c")).await;
        assert_eq!(id, "1");
    }

    #[tokio::test]
    async fn test_create_waits_for_delay() {
        let store = TodoStore::new(Duration::from_millis(50));
        let started = Instant::now();
        store.create(Todo::new("slow")).await;
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(TodoStore::new(Duration::from_millis(10)));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(Todo::new(format!("t{i}"))).await.0 })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_by_key(|id| id.parse::<u64>().unwrap());
        assert_eq!(ids, (1..=8).map(|n| n.to_string()).collect::<Vec<_>>());
        assert_eq!(store.len().await, 8);
    }
}
