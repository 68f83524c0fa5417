use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, RetryPolicy, retry_with_backoff};

/// Open a connection pool with the given settings.
pub async fn connect(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.into_connect_options()).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Open a connection pool, retrying while the server is unreachable.
///
/// ```ignore
/// let db = connect_with_retry(PostgresConfig::from_env()?, RetryPolicy::default()).await?;
/// ```
pub async fn connect_with_retry(
    config: PostgresConfig,
    policy: RetryPolicy,
) -> Result<DatabaseConnection, DatabaseError> {
    retry_with_backoff(&policy, || connect(config.clone()))
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Apply every pending migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    info!("Running database migrations...");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Migrations completed");
    Ok(())
}
