use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TodoError, TodoResult};
use crate::models::{Todo, TodoId, TodoOrder};

/// Repository trait for Todo persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Get a todo by ID
    async fn find_by_id(&self, id: TodoId) -> TodoResult<Option<Todo>>;

    /// List every todo in the given order
    async fn find_all_sorted(&self, order: TodoOrder) -> TodoResult<Vec<Todo>>;

    /// Insert a todo without an id (assigning one), or overwrite the
    /// mutable fields of an existing todo. Returns the persisted form.
    async fn save(&self, todo: Todo) -> TodoResult<Todo>;

    /// Delete a todo by ID
    async fn delete_by_id(&self, id: TodoId) -> TodoResult<()>;

    /// Check whether a todo exists
    async fn exists_by_id(&self, id: TodoId) -> TodoResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    todos: BTreeMap<TodoId, Todo>,
    last_id: TodoId,
}

/// In-memory implementation of TodoRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_by_id(&self, id: TodoId) -> TodoResult<Option<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.get(&id).cloned())
    }

    async fn find_all_sorted(&self, order: TodoOrder) -> TodoResult<Vec<Todo>> {
        let store = self.store.read().await;

        let mut result: Vec<Todo> = store.todos.values().cloned().collect();
        result.sort_by(|a, b| order.compare(a, b));

        Ok(result)
    }

    async fn save(&self, mut todo: Todo) -> TodoResult<Todo> {
        let mut store = self.store.write().await;

        match todo.id {
            None => {
                store.last_id += 1;
                let id = store.last_id;
                todo.id = Some(id);
                store.todos.insert(id, todo.clone());
                tracing::info!(todo_id = %id, "Created todo");
            }
            Some(id) => {
                let existing = store.todos.get_mut(&id).ok_or(TodoError::NotFound(id))?;
                *existing = todo.clone();
                tracing::info!(todo_id = %id, "Updated todo");
            }
        }

        Ok(todo)
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoResult<()> {
        let mut store = self.store.write().await;

        if store.todos.remove(&id).is_none() {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = %id, "Deleted todo");
        Ok(())
    }

    async fn exists_by_id(&self, id: TodoId) -> TodoResult<bool> {
        let store = self.store.read().await;
        Ok(store.todos.contains_key(&id))
    }
}
