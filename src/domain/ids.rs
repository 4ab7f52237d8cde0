//! Identifier generation for new records.

use uuid::Uuid;

/// Produces opaque, collision-resistant identifiers used as primary keys.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
