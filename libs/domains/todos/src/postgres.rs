use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryOrder,
};

use crate::{
    entity,
    error::{TodoError, TodoResult},
    models::{SortDirection, SortField, Todo, TodoId, TodoOrder},
    repository::TodoRepository,
};

/// PostgreSQL implementation of TodoRepository
#[derive(Clone)]
pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn sea_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn find_by_id(&self, id: TodoId) -> TodoResult<Option<Todo>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all_sorted(&self, order: TodoOrder) -> TodoResult<Vec<Todo>> {
        let mut query = entity::Entity::find();

        for key in order.keys() {
            query = match key.field {
                SortField::Priority => {
                    query.order_by(entity::Column::Priority, sea_order(key.direction))
                }
                // Byte order regardless of the database locale
                SortField::Title => query.order_by(
                    Expr::cust(r#""todos"."title" COLLATE "C""#),
                    sea_order(key.direction),
                ),
            };
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        tracing::debug!(order = %order, count = models.len(), "Listed todos");
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, todo: Todo) -> TodoResult<Todo> {
        let id = todo.id;
        let active_model: entity::ActiveModel = todo.into();

        let model = match id {
            None => active_model.insert(&self.db).await?,
            Some(id) => active_model.update(&self.db).await.map_err(|e| match e {
                // Row vanished between lookup and write
                DbErr::RecordNotUpdated => TodoError::NotFound(id),
                other => other.into(),
            })?,
        };

        match id {
            None => tracing::info!(todo_id = %model.id, "Created todo"),
            Some(_) => tracing::info!(todo_id = %model.id, "Updated todo"),
        }
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = %id, "Deleted todo");
        Ok(())
    }

    async fn exists_by_id(&self, id: TodoId) -> TodoResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
