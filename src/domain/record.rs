//! The record entity and its request payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted record. `id` is assigned by the server on create and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl Record {
    /// Builds a new record from a validated payload and a freshly generated id.
    pub fn new(id: String, payload: RecordPayload) -> Self {
        Self {
            id,
            name: payload.name,
            age: payload.age,
        }
    }

    /// Overwrites the mutable fields, keeping `id`.
    pub fn apply(&mut self, payload: RecordPayload) {
        self.name = payload.name;
        self.age = payload.age;
    }
}

/// Request body for create and update.
///
/// Missing fields fall back to their zero values so that an absent `name` is
/// reported by the validator rather than rejected as a malformed body.
/// Unknown fields (including a caller-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct RecordPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_id_and_defaults_missing_fields() {
        let payload: RecordPayload =
            serde_json::from_str(r#"{"id":"caller-chosen","age":5}"#).unwrap();
        assert_eq!(payload.name, "");
        assert_eq!(payload.age, 5);
    }

    #[test]
    fn payload_rejects_non_integer_age() {
        assert!(serde_json::from_str::<RecordPayload>(r#"{"name":"a","age":"x"}"#).is_err());
        assert!(serde_json::from_str::<RecordPayload>(r#"{"name":"a","age":1.5}"#).is_err());
    }

    #[test]
    fn apply_keeps_id() {
        let mut record = Record::new(
            "r-1".to_string(),
            RecordPayload {
                name: "Alice".to_string(),
                age: 30,
            },
        );
        record.apply(RecordPayload {
            name: "Alicia".to_string(),
            age: 31,
        });
        assert_eq!(record.id, "r-1");
        assert_eq!(record.name, "Alicia");
        assert_eq!(record.age, 31);
    }
}
