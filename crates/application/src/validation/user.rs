//! User argument objects.

use super::{Validatable, ValidationResult, ValidatorExt};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Candidate profile for the registration upsert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub last_name: String,
    #[validate(url(message = "must be a valid URL"))]
    pub avatar_url: Option<String>,
}

impl Validatable for UpsertUserRequest {
    fn validate_all(&self) -> ValidationResult {
        self.to_validation_result()
    }
}
