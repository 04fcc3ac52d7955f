//! Hackathon event and its lifecycle phase.

use crate::identifiers::HackathonEventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A hackathon event. Exactly one event is considered "latest" (most
/// recently created) at any time; that selection is a placeholder policy,
/// not a designed "current event" selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackathonEvent {
    pub id: HackathonEventId,
    pub name: String,
    pub current_phase: HackathonPhase,
    pub created_at: DateTime<Utc>,
}

/// Linear lifecycle phase driving which operations the UI exposes.
///
/// Not every transition is server-enforced; administrators may set an
/// arbitrary phase. [`HackathonPhase::next`] exists for callers that advance
/// the machine linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HackathonPhase {
    ProjectSubmission,
    ProjectVoting,
    EventInProgress,
    EventEnded,
}

impl HackathonPhase {
    /// The next phase in the linear state machine, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::ProjectSubmission => Some(Self::ProjectVoting),
            Self::ProjectVoting => Some(Self::EventInProgress),
            Self::EventInProgress => Some(Self::EventEnded),
            Self::EventEnded => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::EventEnded)
    }
}
