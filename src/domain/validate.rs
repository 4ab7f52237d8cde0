//! Field-level constraints applied to every create and update payload.

use crate::domain::record::RecordPayload;
use std::fmt;

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// All constraints a payload failed, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks `name` is present and non-empty and `age` is non-negative.
pub fn validate(payload: &RecordPayload) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();

    if payload.name.is_empty() {
        violations.push(FieldViolation {
            field: "name",
            message: "name is required and must not be empty".to_string(),
        });
    }
    if payload.age < 0 {
        violations.push(FieldViolation {
            field: "age",
            message: format!("age must be greater than or equal to 0 (got {})", payload.age),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { violations })
    }
}
