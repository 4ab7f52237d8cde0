//! In-process record store, used to run the HTTP layer without a database.

use crate::domain::Record;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::store::RecordStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Keeps records in insertion order.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_all(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Record> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, record: &Record) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::Duplicate(record.id.clone()));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &Record) -> StoreResult<()> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                existing.name = record.name.clone();
                existing.age = record.age;
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id.clone())),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, age: i64) -> Record {
        Record {
            id: id.to_string(),
            name: name.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let store = InMemoryRecordStore::new();
        store.insert(&record("b", "Bea", 2)).await.unwrap();
        store.insert(&record("a", "Al", 1)).await.unwrap();
        let ids: Vec<String> = store.list_all().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = InMemoryRecordStore::new();
        store.insert(&record("a", "Al", 1)).await.unwrap();
        let err = store.insert(&record("a", "Other", 2)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(id) if id == "a"));
        assert_eq!(store.find_by_id("a").await.unwrap().name, "Al");
    }

    #[tokio::test]
    async fn update_does_not_resurrect_deleted_record() {
        let store = InMemoryRecordStore::with_records(vec![record("a", "Al", 1)]);
        store.delete("a").await.unwrap();
        let err = store.update(&record("a", "Al", 2)).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let store = InMemoryRecordStore::with_records(vec![record("a", "Al", 1)]);
        store.delete("a").await.unwrap();
        assert!(store.delete("a").await.unwrap_err().is_not_found());
    }
}
