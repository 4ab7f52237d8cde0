//! Domain types: the record entity, its validator and id generation.

pub mod ids;
pub mod record;
pub mod validate;

pub use ids::{IdGenerator, UuidV4Generator};
pub use record::{Record, RecordPayload};
pub use validate::{validate, FieldViolation, ValidationErrors};
