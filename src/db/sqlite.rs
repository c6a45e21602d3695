use crate::db::schema::SQLITE_INIT;
use crate::error::RegistryError;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

/// A value bound to a `?` placeholder. Values never reach the SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
    Null,
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

/// Outcome of an INSERT / UPDATE / DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    pub last_insert_id: i64,
    pub rows_affected: u64,
}

/// Explicit storage handle, cloned into every request.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url` with foreign keys enforced.
    ///
    /// In-memory databases live only as long as their connection, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn connect(database_url: &str) -> Result<Self, RegistryError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_opts = SqlitePoolOptions::new();
        if is_in_memory(database_url) {
            pool_opts = pool_opts
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }
        let pool = pool_opts.connect_with(connect_opts).await?;
        info!(database_url = %database_url, "database connected");
        Ok(Self::new(pool))
    }

    /// Create both tables if absent. Runs in one transaction so a failure
    /// leaves no partial schema behind.
    pub async fn ensure_schema(&self) -> Result<(), RegistryError> {
        let mut tx = self.pool.begin().await?;
        // sqlx::query runs a single statement, so split the bundled DDL
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        info!("database schema ready");
        Ok(())
    }

    pub async fn execute(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<ExecResult, RegistryError> {
        let done = bind_all(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        debug!(rows_affected = done.rows_affected(), "statement executed");
        Ok(ExecResult {
            last_insert_id: done.last_insert_rowid(),
            rows_affected: done.rows_affected(),
        })
    }

    pub async fn fetch_one(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Option<SqliteRow>, RegistryError> {
        let row = bind_all(sqlx::query(sql), params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Eagerly collects every row; tables are small.
    pub async fn fetch_all(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Vec<SqliteRow>, RegistryError> {
        let rows = bind_all(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// One round-trip to the store; used by the health endpoint.
    pub async fn ping(&self) -> Result<(), RegistryError> {
        self.fetch_one("SELECT 1", &[]).await.map(|_| ())
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [SqlValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Null => query.bind(None::<i64>),
        };
    }
    query
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
