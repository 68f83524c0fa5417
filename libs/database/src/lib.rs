//! PostgreSQL connection management for the Todo API
//!
//! # Features
//!
//! - `postgres` (default) - connector, health check and migration runner on SeaORM
//! - `config` - `PostgresConfig::from_env` through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryPolicy;
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_with_retry(config, RetryPolicy::default()).await?;
//! postgres::run_migrations::<Migrator>(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
