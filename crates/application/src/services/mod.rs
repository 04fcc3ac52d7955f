//! Application services.
//!
//! One service per aggregate. Each service resolves the caller through the
//! identity resolver, gates guarded mutations through the authorization
//! policy, runs the embedded-collection algorithms from the domain crate and
//! persists whole updated arrays through its repository port.

mod event;
mod finalized;
mod project;
mod user;

pub use event::*;
pub use finalized::*;
pub use project::*;
pub use user::*;

use async_trait::async_trait;
use hackhub_domain::errors::DomainResult;
use hackhub_domain::identifiers::{
    CommentId, FinalizedProjectId, HackathonEventId, ProjectId, UserId,
};

/// Domain events emitted after successful mutations.
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    // Project events
    ProjectCreated { project_id: ProjectId },
    ProjectUpdated { project_id: ProjectId },
    ProjectDeleted { project_id: ProjectId },
    ProjectCommentAdded { project_id: ProjectId, comment_id: CommentId },
    ProjectCommentDeleted { project_id: ProjectId, comment_id: CommentId },

    // Finalized-project events
    FinalizedProjectCreated { finalized_project_id: FinalizedProjectId },
    FinalizedProjectUpdated { finalized_project_id: FinalizedProjectId },
    FinalizedProjectDeleted { finalized_project_id: FinalizedProjectId },
    UserAssigned { finalized_project_id: FinalizedProjectId, user_id: UserId },

    // Hackathon-event events
    HackathonEventCreated { hackathon_event_id: HackathonEventId },
    HackathonPhaseChanged { hackathon_event_id: HackathonEventId, phase: String },

    // User events
    UserRegistered { user_id: UserId },
}

/// Event publisher trait for service events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: ServiceEvent) -> DomainResult<()>;
}

/// No-op event publisher for testing.
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: ServiceEvent) -> DomainResult<()> {
        Ok(())
    }
}
