//! Finalized-project argument objects.

use super::{Validatable, ValidationResult, ValidatorExt};
use hackhub_domain::identifiers::{HackathonEventId, UserId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Arguments for `createFinalizedProject` (admin only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFinalizedProjectRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 4000, message = "must be between 1 and 4000 characters"))]
    pub description: String,
    pub hackathon_event_id: HackathonEventId,
}

impl Validatable for CreateFinalizedProjectRequest {
    fn validate_all(&self) -> ValidationResult {
        self.to_validation_result()
    }
}

/// Arguments for `updateFinalizedProject` (admin only).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateFinalizedProjectRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 4000, message = "must be between 1 and 4000 characters"))]
    pub description: Option<String>,
}

impl Validatable for UpdateFinalizedProjectRequest {
    fn validate_all(&self) -> ValidationResult {
        self.to_validation_result()
    }
}

/// Arguments for `assignUserToProject` (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignUserRequest {
    pub user_id: UserId,
}

impl Validatable for AssignUserRequest {
    fn validate_all(&self) -> ValidationResult {
        ValidationResult::success()
    }
}
