use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldErrors};
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::TodoId;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Invalid input: {0:?}")]
    Validation(FieldErrors),

    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// Raised by repository implementations only
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl From<DbErr> for TodoError {
    fn from(err: DbErr) -> Self {
        TodoError::Storage(format!("Database error: {}", err))
    }
}

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(fields) => AppError::Validation(fields),
            TodoError::NotFound(id) => {
                AppError::NotFound(format!("Todo with id {} was not found", id))
            }
            TodoError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
