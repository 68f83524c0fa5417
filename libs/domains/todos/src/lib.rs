//! Todos Domain
//!
//! Create, list, fetch, replace and delete todo items.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status codes, Location header
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found checks, ordering policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Persistence port (in-memory + PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo entity, request/response shapes, sort order
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{handlers, InMemoryTodoRepository, TodoService};
//!
//! let service = TodoService::new(InMemoryTodoRepository::new());
//! let router = axum::Router::new().nest("/todos", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use models::{
    SortDirection, SortField, SortKey, Todo, TodoFields, TodoId, TodoOrder, TodoRequest,
    TodoResponse,
};
pub use postgres::PgTodoRepository;
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoService;
