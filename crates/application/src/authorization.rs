//! Authorization gate.
//!
//! Every guarded mutation goes through one policy interface taking the
//! resolved caller and the action (with its target borrowed in), instead of
//! re-deriving role and ownership rules inline per mutation. Admin-only
//! checks therefore run before any storage access beyond loading the target.

use hackhub_domain::comment::Comment;
use hackhub_domain::errors::{DomainError, DomainResult};
use hackhub_domain::project::Project;
use hackhub_domain::user::User;

/// A guarded mutation and the target it operates on.
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    UpdateProject(&'a Project),
    DeleteProject(&'a Project),
    UpdateComment(&'a Comment),
    /// Comment deletion on a project is a two-principal rule: the comment's
    /// author or the parent project's creator may delete.
    DeleteProjectComment {
        project: &'a Project,
        comment: &'a Comment,
    },
    /// Finalized projects carry no creator, so only the author qualifies.
    DeleteFinalizedComment(&'a Comment),
    CreateFinalizedProject,
    UpdateFinalizedProject,
    DeleteFinalizedProject,
    AssignUser,
    CreateEvent,
    SetEventPhase,
}

impl Action<'_> {
    fn denial_message(&self) -> &'static str {
        match self {
            Self::UpdateProject(_) => "Only the project creator can update this project",
            Self::DeleteProject(_) => "Only the project creator can delete this project",
            Self::UpdateComment(_) => "Only the comment author can update this comment",
            Self::DeleteProjectComment { .. } => {
                "Only the comment author or the project creator can delete this comment"
            }
            Self::DeleteFinalizedComment(_) => "Only the comment author can delete this comment",
            Self::CreateFinalizedProject
            | Self::UpdateFinalizedProject
            | Self::DeleteFinalizedProject => "Admin privileges required to manage finalized projects",
            Self::AssignUser => "Admin privileges required to assign users",
            Self::CreateEvent | Self::SetEventPhase => {
                "Admin privileges required to manage hackathon events"
            }
        }
    }
}

/// Allow/deny outcome of a policy evaluation.
#[derive(Debug, Clone)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl AccessDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    /// Map denial to `UNAUTHORIZED` with a fixed message; no further detail
    /// leaks past this point.
    pub fn ensure_allowed(&self) -> DomainResult<()> {
        if self.allowed {
            Ok(())
        } else {
            Err(DomainError::unauthorized(
                self.reason.clone().unwrap_or_else(|| "Access denied".to_string()),
            ))
        }
    }
}

/// Yes/no decisions keyed on role and on authorship/ownership of a target.
pub trait AuthorizationPolicy: Send + Sync {
    fn evaluate(&self, caller: &User, action: Action<'_>) -> AccessDecision;
}

/// Default role-and-ownership policy.
pub struct RolePolicy;

impl AuthorizationPolicy for RolePolicy {
    fn evaluate(&self, caller: &User, action: Action<'_>) -> AccessDecision {
        let allowed = match action {
            Action::UpdateProject(project) | Action::DeleteProject(project) => {
                project.is_created_by(caller.id)
            }
            Action::UpdateComment(comment) | Action::DeleteFinalizedComment(comment) => {
                comment.author_id == caller.id
            }
            Action::DeleteProjectComment { project, comment } => {
                comment.author_id == caller.id || project.is_created_by(caller.id)
            }
            Action::CreateFinalizedProject
            | Action::UpdateFinalizedProject
            | Action::DeleteFinalizedProject => caller.role.can_manage_finalized_projects(),
            Action::AssignUser => caller.role.can_assign_users(),
            Action::CreateEvent | Action::SetEventPhase => caller.role.can_manage_events(),
        };

        if allowed {
            AccessDecision::allow()
        } else {
            AccessDecision::deny(action.denial_message())
        }
    }
}
