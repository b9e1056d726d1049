//! SQLite connection pool and migration tooling for Shelf.
//!
//! Every handler works on a connection borrowed from the pool for the
//! duration of one request; the guards returned by [`Database::acquire`] and
//! [`Database::begin`] hand the connection back when dropped.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

pub mod migrate;

pub use migrate::{migrate, Migration};

/// URL used for throwaway in-memory databases.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Cloneable handle to the relational store.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool against `url`, creating the database file if needed.
    ///
    /// In-memory URLs are routed to [`Database::connect_in_memory`] since each
    /// new SQLite connection would otherwise see its own empty database.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        if url.contains(":memory:") {
            return Self::connect_in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url '{url}'"))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .with_context(|| format!("failed to connect to database at '{url}'"))?;

        tracing::info!(target: "shelf-db", %url, max_connections, "database pool ready");
        Ok(Self { pool })
    }

    /// Open a private in-memory database pinned to a single connection.
    pub async fn connect_in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(IN_MEMORY_URL)
            .context("invalid in-memory database url")?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open in-memory database")?;

        tracing::debug!(target: "shelf-db", "in-memory database ready");
        Ok(Self { pool })
    }

    /// Borrow a connection for the duration of a request.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Start a deferred transaction; it rolls back unless committed.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Start a transaction holding the write lock from its first statement.
    ///
    /// Check-then-write sequences must use this: two deferred transactions
    /// that both read before writing cannot both upgrade, and the loser fails
    /// with `SQLITE_BUSY` instead of waiting.
    pub async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }

    /// Round-trip a trivial query to check the store is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Underlying pool, for callers that need `sqlx` directly.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!(target: "shelf-db", "database pool closed");
    }
}
