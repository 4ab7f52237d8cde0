pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use sqlite::{SqliteRecordStore, CREATE_RECORDS_TABLE_SQL};
pub use store::RecordStore;
