use std::sync::Arc;

use crate::error::{TodoError, TodoResult};
use crate::models::{Todo, TodoId, TodoOrder, TodoRequest, TodoResponse};
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and persist a new todo
    #[tracing::instrument(skip(self, request))]
    pub async fn create(&self, request: TodoRequest) -> TodoResult<TodoResponse> {
        let fields = request.into_fields().map_err(TodoError::Validation)?;

        let saved = self.repository.save(Todo::new(fields)).await?;
        TodoResponse::try_from(saved)
    }

    /// All todos, highest priority first and then by title
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> TodoResult<Vec<TodoResponse>> {
        self.repository
            .find_all_sorted(TodoOrder::default())
            .await?
            .into_iter()
            .map(TodoResponse::try_from)
            .collect()
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: TodoId) -> TodoResult<TodoResponse> {
        let todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))?;

        TodoResponse::try_from(todo)
    }

    /// Replace all four fields of an existing todo.
    ///
    /// An unknown id is reported before the payload is validated.
    #[tracing::instrument(skip(self, request))]
    pub async fn update(&self, id: TodoId, request: TodoRequest) -> TodoResult<TodoResponse> {
        let mut todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))?;

        let fields = request.into_fields().map_err(TodoError::Validation)?;
        todo.apply(fields);

        let saved = self.repository.save(todo).await?;
        TodoResponse::try_from(saved)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: TodoId) -> TodoResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(TodoError::NotFound(id));
        }

        self.repository.delete_by_id(id).await
    }
}
