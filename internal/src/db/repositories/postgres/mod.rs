//! Postgres repository implementation using Diesel.
//!
//! This module implements the repository trait against a Postgres database.
//! Queries run on the blocking thread pool; connections come from an r2d2
//! pool and pending migrations are applied once at startup.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;
use tokio::task;

use crate::db::repository::{CrudRepository, RepositoryError, RepositoryResult};
use crate::entity::Message;

mod models;
mod schema;

use models::{MessageRow, NewMessageRow};
use schema::messages;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
    /// - `PG_POOL_MAX`: Maximum pool size (default: 10)
    /// - `PG_POOL_MIN`: Minimum pool size (default: 1)
    /// - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
    /// - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let min_pool_size = std::env::var("PG_POOL_MIN")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_sec = std::env::var("PG_IDLE_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        Ok(Self {
            database_url,
            max_pool_size,
            min_pool_size,
            connection_timeout_sec,
            idle_timeout_sec,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    ///
    /// # Arguments
    /// * `config` - Database configuration
    ///
    /// # Returns
    /// * `Ok(PostgresRepository)` on success
    /// * `Err(RepositoryError)` if connection or migration fails
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true) // Validate connections before use
            .build(manager)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        // Run migrations once during initialization
        {
            let mut conn = pool.get()?;
            Self::run_migrations(&mut conn)?;
        }

        Ok(Self { pool })
    }

    /// Run pending database migrations.
    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| RepositoryError::InternalError(format!("Migration failed: {}", e)))?;

        Ok(())
    }

    /// Execute a database operation on the blocking thread pool.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::InternalError(format!("Task join error: {}", e)))?
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    RepositoryError::from(err)
}

#[async_trait]
impl CrudRepository for PostgresRepository {
    type Entity = Message;

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn save(&self, entity: Message) -> RepositoryResult<Message> {
        self.with_conn(move |conn| {
            let row: MessageRow = match entity.id {
                // The creation timestamp column is never part of an update.
                Some(id) => diesel::update(messages::table.filter(messages::id.eq(id)))
                    .set(messages::message.eq(&entity.message))
                    .returning(MessageRow::as_returning())
                    .get_result(conn)
                    .map_err(map_diesel_error)?,
                None => {
                    let new_row = NewMessageRow {
                        message: entity.message.clone(),
                    };
                    diesel::insert_into(messages::table)
                        .values(&new_row)
                        .returning(MessageRow::as_returning())
                        .get_result(conn)
                        .map_err(map_diesel_error)?
                }
            };
            Ok(row.into())
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Message>> {
        self.with_conn(move |conn| {
            let row: Option<MessageRow> = messages::table
                .filter(messages::id.eq(id))
                .select(MessageRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;

            Ok(row.map(Into::into))
        })
        .await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Message>> {
        self.with_conn(|conn| {
            let rows: Vec<MessageRow> = messages::table
                .order(messages::id.asc())
                .select(MessageRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;

            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.with_conn(move |conn| {
            let deleted = diesel::delete(messages::table.filter(messages::id.eq(id)))
                .execute(conn)
                .map_err(map_diesel_error)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound(format!(
                    "Message {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await
    }
}
