//! Persistence backends for the booking service.
//!
//! - [`PgStore`]: PostgreSQL through `sqlx`, the production database.
//! - [`LocalStore`]: a single JSON document on local disk.
//!
//! Both implement [`ahlam_core::store::Store`].

pub mod local;
pub mod models;
pub mod pg_store;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use local::LocalStore;
pub use pg_store::PgStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
