use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::models::Todo;

/// Sea-ORM Entity for the todos table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Todo {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            description: model.description,
            completed: model.completed,
            priority: model.priority,
        }
    }
}

// An unsaved todo leaves the id to the sequence; a saved one pins it
impl From<Todo> for ActiveModel {
    fn from(todo: Todo) -> Self {
        ActiveModel {
            id: todo.id.map_or(NotSet, Unchanged),
            title: Set(todo.title),
            description: Set(todo.description),
            completed: Set(todo.completed),
            priority: Set(todo.priority),
        }
    }
}
