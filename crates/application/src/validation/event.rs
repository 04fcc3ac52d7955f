//! Hackathon-event argument objects.

use super::{Validatable, ValidationResult, ValidatorExt};
use hackhub_domain::event::HackathonPhase;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Arguments for `createHackathonEvent` (admin only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
}

impl Validatable for CreateEventRequest {
    fn validate_all(&self) -> ValidationResult {
        self.to_validation_result()
    }
}

/// Arguments for `setHackathonEventPhase` (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPhaseRequest {
    pub phase: HackathonPhase,
}

impl Validatable for SetPhaseRequest {
    fn validate_all(&self) -> ValidationResult {
        ValidationResult::success()
    }
}
