//! Increment Number use case

use jokehub_domain::DomainError;

/// Use case adding one to a number
#[derive(Debug, Default)]
pub struct IncrementNumber;

impl IncrementNumber {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, number: i64) -> Result<i64, DomainError> {
        number.checked_add(1).ok_or_else(|| {
            DomainError::Validation("Number out of range".to_string())
        })
    }
}
