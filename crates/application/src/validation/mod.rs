//! Argument validation.
//!
//! Every RPC-style operation takes a JSON-serializable argument object that
//! is validated against its schema before execution. Failures are collected
//! per field and surfaced as a single unclassified error; shape validation of
//! data read back from storage is a different concern and uses
//! `DATA_IS_UNEXPECTED_SHAPE`.

mod event;
mod finalized;
mod project;
mod user;

pub use event::*;
pub use finalized::*;
pub use project::*;
pub use user::*;

use hackhub_domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use validator::Validate;

/// Validation result containing all errors.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub field_errors: HashMap<String, Vec<String>>,
    pub object_errors: Vec<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            field_errors: HashMap::new(),
            object_errors: Vec::new(),
        }
    }

    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_object_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.object_errors.push(message.into());
    }

    /// Flatten into a domain error if invalid.
    pub fn to_error(&self) -> Option<DomainError> {
        if self.valid {
            return None;
        }

        let mut messages = Vec::new();
        for (field, errors) in &self.field_errors {
            for error in errors {
                messages.push(format!("{}: {}", field, error));
            }
        }
        messages.extend(self.object_errors.clone());

        Some(DomainError::unexpected(format!(
            "Validation failed: {}",
            messages.join("; ")
        )))
    }

    pub fn ensure_valid(&self) -> DomainResult<()> {
        match self.to_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Trait for validatable argument objects.
pub trait Validatable {
    fn validate_all(&self) -> ValidationResult;
}

/// Extension to convert `validator` errors to our format.
pub trait ValidatorExt {
    fn to_validation_result(&self) -> ValidationResult;
}

impl<T: Validate> ValidatorExt for T {
    fn to_validation_result(&self) -> ValidationResult {
        match self.validate() {
            Ok(()) => ValidationResult::success(),
            Err(errors) => {
                let mut result = ValidationResult::success();
                for (field, field_errors) in errors.field_errors() {
                    for error in field_errors {
                        let message = error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string());
                        result.add_field_error(field.to_string(), message);
                    }
                }
                result
            }
        }
    }
}
