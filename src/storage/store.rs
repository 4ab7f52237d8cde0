//! The record store contract shared by every backend.

use crate::domain::Record;
use crate::storage::error::StoreResult;
use async_trait::async_trait;

/// Persistent table of records keyed by `id`.
///
/// Every call is a direct round-trip to the backing storage; implementations
/// must be safe to share across concurrent requests.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records in the store's natural order.
    async fn list_all(&self) -> StoreResult<Vec<Record>>;

    /// Exact-match lookup. Returns `StoreError::NotFound` when no row has this id.
    async fn find_by_id(&self, id: &str) -> StoreResult<Record>;

    /// Inserts a new row. Returns `StoreError::Duplicate` if the id is taken.
    async fn insert(&self, record: &Record) -> StoreResult<()>;

    /// Overwrites `name` and `age` of the row keyed by `record.id`.
    ///
    /// Only an existing row is touched: if it disappeared since the caller
    /// looked it up, this returns `StoreError::NotFound` instead of recreating it.
    async fn update(&self, record: &Record) -> StoreResult<()>;

    /// Removes the row keyed by `id`, or returns `StoreError::NotFound`.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
