pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use domain::{IdGenerator, Record, RecordPayload, UuidV4Generator};
pub use infra::config::ServiceConfig;
pub use storage::{InMemoryRecordStore, RecordStore, SqliteRecordStore, StoreError};
