//! Database bootstrap.
//!
//! Owns the SQLite connection pool for the lifetime of the process:
//! 1.  Opens the database named by `DATABASE_URL`, creating the file if needed.
//! 2.  Applies the one-time schema setup (`records` table).
//! 3.  Hands out [`SqliteRecordStore`] adapters bound to the shared pool.
//!
//! Request handlers never see this type; they only get a `RecordStore`.

use crate::infra::config::ServiceConfig;
use crate::storage::sqlite::{SqliteRecordStore, CREATE_RECORDS_TABLE_SQL};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

pub struct DatabaseService {
    pool: SqlitePool,
}

impl DatabaseService {
    /// Connects using the service configuration and applies the schema.
    pub async fn new(config: &ServiceConfig) -> anyhow::Result<Self> {
        let service = Self::connect(&config.database_url, config.max_connections).await?;
        service.ensure_schema().await?;
        Ok(service)
    }

    /// Opens the pool without touching the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        let mut options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        // Every connection to `:memory:` is its own database, so pin a single one for good.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::info!(database_url, in_memory, "database pool opened");
        Ok(Self { pool })
    }

    /// Creates the `records` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_RECORDS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        tracing::debug!("records table ready");
        Ok(())
    }

    /// Whether the `records` table exists.
    pub async fn schema_present(&self) -> anyhow::Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'records'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    pub async fn record_count(&self) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub fn record_store(&self) -> SqliteRecordStore {
        SqliteRecordStore::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
