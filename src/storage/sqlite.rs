//! Record store backed by a SQLite connection pool.

use crate::domain::Record;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::store::RecordStore;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Table definition applied once at startup.
pub const CREATE_RECORDS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS records (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    age INTEGER NOT NULL CHECK (age >= 0)
)";

#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    Ok(Record {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
    })
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn list_all(&self) -> StoreResult<Vec<Record>> {
        let rows = sqlx::query("SELECT id, name, age FROM records")
            .fetch_all(&self.pool)
            .await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(row_to_record(row)?);
        }
        Ok(records)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Record> {
        let row = sqlx::query("SELECT id, name, age FROM records WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(row_to_record(&row)?),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn insert(&self, record: &Record) -> StoreResult<()> {
        let result = sqlx::query("INSERT INTO records (id, name, age) VALUES (?, ?, ?)")
            .bind(&record.id)
            .bind(&record.name)
            .bind(record.age)
            .execute(&self.pool)
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::Duplicate(record.id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, record: &Record) -> StoreResult<()> {
        let result = sqlx::query("UPDATE records SET name = ?, age = ? WHERE id = ?")
            .bind(&record.name)
            .bind(record.age)
            .bind(&record.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(record.id.clone()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
