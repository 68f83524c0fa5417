use axum::{Router, routing::get};
use domain_todos::{PgTodoRepository, TodoService, handlers};

pub mod health;

use crate::state::AppState;

/// Todo routes backed by PostgreSQL, with state already applied.
pub fn routes(state: &AppState) -> Router {
    let service = TodoService::new(PgTodoRepository::new(state.db.clone()));

    Router::new().nest("/todos", handlers::router(service))
}

/// `GET /ready`, which pings the database.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
