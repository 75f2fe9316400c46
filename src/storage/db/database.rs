use std::sync::Arc;

use sqlx::pool::PoolOptions;

// Database connection to PostgreSQL + type definitions for database types.

pub type DbError = sqlx::Error;
pub type DbPool = sqlx::PgPool;

pub type DatabaseConnectionRef = Arc<DatabaseConnection>;

const SCHEMA: &str = include_str!("../../../migrations/schema.sql");

pub struct DatabaseConnection {
    pool: DbPool,
}

impl DatabaseConnection {
    pub fn connect(url: &str) -> Result<Self, DbError> {
        Ok(Self {
            pool: PoolOptions::new().connect_lazy(url)?,
        })
    }

    /// Creates the tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        sqlx::raw_sql(SCHEMA).execute(self.as_pool()).await?;

        Ok(())
    }

    pub fn as_pool(&self) -> &DbPool {
        &self.pool
    }
}
