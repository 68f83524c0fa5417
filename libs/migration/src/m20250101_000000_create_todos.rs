use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(big_integer(Todos::Id).auto_increment().primary_key())
                    .col(string_len(Todos::Title, 100))
                    .col(string_len(Todos::Description, 255))
                    .col(boolean(Todos::Completed).default(false))
                    .col(integer(Todos::Priority))
                    .to_owned(),
            )
            .await?;

        // Matches the list ORDER BY, including the byte-wise title collation
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_todos_priority_title
                    ON todos (priority DESC, title COLLATE "C")
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE todos
                    ADD CONSTRAINT todos_priority_range CHECK (priority BETWEEN 0 AND 5)
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    Title,
    Description,
    Completed,
    Priority,
}
