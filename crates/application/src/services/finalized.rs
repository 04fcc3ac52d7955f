//! Finalized-project service.
//!
//! Admin-curated projects with embedded comments, interest marks and team
//! assignments. Document CRUD and assignment are admin-only; interest and
//! comments are open to any registered caller.

use super::{EventPublisher, ServiceEvent};
use crate::authorization::{Action, AuthorizationPolicy};
use crate::identity::{Caller, IdentityResolver, UserRepositoryPort};
use crate::validation::{
    AssignUserRequest, CommentRequest, CreateFinalizedProjectRequest,
    UpdateFinalizedProjectRequest, Validatable,
};
use crate::views::{self, FinalizedBoard};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hackhub_domain::comment::{self, Comment};
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::finalized::{AssignedUser, FinalizedProject, InterestedUser};
use hackhub_domain::identifiers::{CommentId, FinalizedProjectId, HackathonEventId, UserId};
use hackhub_domain::membership::{self, Toggle};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Partial field update for a finalized project.
#[derive(Debug, Clone)]
pub struct FinalizedProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Finalized-project repository port.
///
/// The `replace_*` methods overwrite the named embedded array wholesale and
/// bump `updated_at`.
#[async_trait]
pub trait FinalizedProjectRepositoryPort: Send + Sync {
    async fn insert(&self, project: &FinalizedProject) -> DomainResult<FinalizedProjectId>;
    async fn get_by_id(&self, id: FinalizedProjectId) -> DomainResult<Option<FinalizedProject>>;
    async fn list_by_event(
        &self,
        event_id: HackathonEventId,
    ) -> DomainResult<Vec<FinalizedProject>>;
    async fn update_fields(
        &self,
        id: FinalizedProjectId,
        patch: &FinalizedProjectPatch,
    ) -> DomainResult<()>;
    async fn replace_comments(
        &self,
        id: FinalizedProjectId,
        comments: &[Comment],
    ) -> DomainResult<()>;
    async fn replace_interested(
        &self,
        id: FinalizedProjectId,
        interested: &[InterestedUser],
    ) -> DomainResult<()>;
    async fn replace_assigned(
        &self,
        id: FinalizedProjectId,
        assigned: &[AssignedUser],
    ) -> DomainResult<()>;
    /// Returns whether a document was actually deleted.
    async fn delete(&self, id: FinalizedProjectId) -> DomainResult<bool>;
}

/// Orchestrates every finalized-project operation.
pub struct FinalizedProjectService<R, U, P, E>
where
    R: FinalizedProjectRepositoryPort,
    U: UserRepositoryPort,
    P: AuthorizationPolicy,
    E: EventPublisher,
{
    projects: Arc<R>,
    users: Arc<U>,
    identity: IdentityResolver<U>,
    policy: Arc<P>,
    events: Arc<E>,
}

impl<R, U, P, E> FinalizedProjectService<R, U, P, E>
where
    R: FinalizedProjectRepositoryPort,
    U: UserRepositoryPort,
    P: AuthorizationPolicy,
    E: EventPublisher,
{
    pub fn new(projects: Arc<R>, users: Arc<U>, policy: Arc<P>, events: Arc<E>) -> Self {
        Self {
            projects,
            identity: IdentityResolver::new(Arc::clone(&users)),
            users,
            policy,
            events,
        }
    }

    async fn load(&self, id: FinalizedProjectId) -> DomainResult<FinalizedProject> {
        self.projects
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::FinalizedProject, id))
    }

    /// Finalize a project for team formation. Admin only.
    #[instrument(skip(self, caller, request))]
    pub async fn create(
        &self,
        caller: &Caller,
        request: CreateFinalizedProjectRequest,
    ) -> DomainResult<FinalizedProject> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        self.policy
            .evaluate(&user, Action::CreateFinalizedProject)
            .ensure_allowed()?;

        let now = Utc::now();
        let project = FinalizedProject {
            id: FinalizedProjectId::new(),
            hackathon_event_id: request.hackathon_event_id,
            title: request.title,
            description: request.description,
            comments: vec![],
            interested_users: vec![],
            assigned_users: vec![],
            created_at: now,
            updated_at: now,
        };
        let id = self.projects.insert(&project).await?;

        info!(finalized_project_id = %id, "Finalized project created");
        self.events
            .publish(ServiceEvent::FinalizedProjectCreated {
                finalized_project_id: id,
            })
            .await?;
        Ok(project)
    }

    /// Patch title and/or description. Admin only.
    #[instrument(skip(self, caller, request))]
    pub async fn update(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
        request: UpdateFinalizedProjectRequest,
    ) -> DomainResult<FinalizedProject> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        self.policy
            .evaluate(&user, Action::UpdateFinalizedProject)
            .ensure_allowed()?;

        let mut project = self.load(id).await?;
        let patch = FinalizedProjectPatch {
            title: request.title,
            description: request.description,
            updated_at: Utc::now(),
        };
        self.projects.update_fields(id, &patch).await?;

        if let Some(title) = patch.title {
            project.title = title;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        project.updated_at = patch.updated_at;

        info!(finalized_project_id = %id, "Finalized project updated");
        self.events
            .publish(ServiceEvent::FinalizedProjectUpdated {
                finalized_project_id: id,
            })
            .await?;
        Ok(project)
    }

    /// Delete a finalized project and everything embedded in it. Admin only.
    #[instrument(skip(self, caller))]
    pub async fn delete(&self, caller: &Caller, id: FinalizedProjectId) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        self.policy
            .evaluate(&user, Action::DeleteFinalizedProject)
            .ensure_allowed()?;

        // Load first so a missing target reports NOT_FOUND before delete.
        self.load(id).await?;
        if !self.projects.delete(id).await? {
            return Err(DomainError::not_found(EntityKind::FinalizedProject, id));
        }

        info!(finalized_project_id = %id, "Finalized project deleted");
        self.events
            .publish(ServiceEvent::FinalizedProjectDeleted {
                finalized_project_id: id,
            })
            .await?;
        Ok(())
    }

    /// Register the caller's interest. Idempotent: a second call is a no-op.
    #[instrument(skip(self, caller))]
    pub async fn add_interested_user(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
    ) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        if membership::add_if_absent(&mut project.interested_users, user.id, Utc::now()) {
            self.projects
                .replace_interested(id, &project.interested_users)
                .await?;
        }
        Ok(())
    }

    /// Withdraw the caller's interest. Idempotent.
    #[instrument(skip(self, caller))]
    pub async fn remove_interested_user(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
    ) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        if membership::remove_if_present(&mut project.interested_users, user.id) {
            self.projects
                .replace_interested(id, &project.interested_users)
                .await?;
        }
        Ok(())
    }

    /// Assign a user to a finalized project's team. Admin only.
    ///
    /// Within one hackathon event a user sits on at most one team, so the
    /// user is first removed from every sibling's assigned list. Already on
    /// the target means done. The per-sibling writes are sequential, not
    /// atomic; a single coordinating writer is assumed.
    #[instrument(skip(self, caller, request))]
    pub async fn assign_user(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
        request: AssignUserRequest,
    ) -> DomainResult<()> {
        request.validate_all().ensure_valid()?;
        let admin = self.identity.resolve_current_user(caller).await?;
        self.policy
            .evaluate(&admin, Action::AssignUser)
            .ensure_allowed()?;

        let mut target = self.load(id).await?;
        if membership::contains(&target.assigned_users, request.user_id) {
            return Ok(());
        }
        // The assignee must exist before any sibling list is touched.
        self.resolve_assignee(request.user_id).await?;

        let siblings = self
            .projects
            .list_by_event(target.hackathon_event_id)
            .await?;
        for mut sibling in siblings {
            if sibling.id == id {
                continue;
            }
            if membership::remove_if_present(&mut sibling.assigned_users, request.user_id) {
                debug!(
                    finalized_project_id = %sibling.id,
                    user_id = %request.user_id,
                    "User unassigned from sibling project"
                );
                self.projects
                    .replace_assigned(sibling.id, &sibling.assigned_users)
                    .await?;
            }
        }

        membership::add_if_absent(&mut target.assigned_users, request.user_id, Utc::now());
        self.projects
            .replace_assigned(id, &target.assigned_users)
            .await?;

        info!(finalized_project_id = %id, user_id = %request.user_id, "User assigned");
        self.events
            .publish(ServiceEvent::UserAssigned {
                finalized_project_id: id,
                user_id: request.user_id,
            })
            .await?;
        Ok(())
    }

    async fn resolve_assignee(&self, user_id: UserId) -> DomainResult<()> {
        self.users
            .get_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::User, user_id))
    }

    /// Append a comment and return the fresh comment id.
    #[instrument(skip(self, caller, request))]
    pub async fn add_comment(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
        request: CommentRequest,
    ) -> DomainResult<CommentId> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let comment_id = comment::append(&mut project.comments, user.id, request.text, Utc::now());
        self.projects.replace_comments(id, &project.comments).await?;
        Ok(comment_id)
    }

    /// Replace a comment's text. Author only.
    #[instrument(skip(self, caller, request))]
    pub async fn update_comment(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
        comment_id: CommentId,
        request: CommentRequest,
    ) -> DomainResult<()> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let target = comment::find(&project.comments, comment_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Comment, comment_id))?;
        self.policy
            .evaluate(&user, Action::UpdateComment(target))
            .ensure_allowed()?;

        comment::update_text(&mut project.comments, comment_id, request.text)?;
        self.projects.replace_comments(id, &project.comments).await
    }

    /// Delete a comment. Author only; there is no owning creator here.
    #[instrument(skip(self, caller))]
    pub async fn delete_comment(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
        comment_id: CommentId,
    ) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let target = comment::find(&project.comments, comment_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Comment, comment_id))?;
        self.policy
            .evaluate(&user, Action::DeleteFinalizedComment(target))
            .ensure_allowed()?;

        comment::remove(&mut project.comments, comment_id)?;
        self.projects.replace_comments(id, &project.comments).await
    }

    /// Strict upvote flip on one comment.
    #[instrument(skip(self, caller))]
    pub async fn upvote_comment(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
        comment_id: CommentId,
    ) -> DomainResult<Toggle> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let outcome = comment::toggle_upvote(&mut project.comments, comment_id, user.id, Utc::now())?;
        self.projects.replace_comments(id, &project.comments).await?;
        Ok(outcome)
    }

    /// Idempotent removal of the caller's upvote from one comment.
    #[instrument(skip(self, caller))]
    pub async fn remove_comment_upvote(
        &self,
        caller: &Caller,
        id: FinalizedProjectId,
        comment_id: CommentId,
    ) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        if comment::remove_upvote(&mut project.comments, comment_id, user.id)? {
            self.projects.replace_comments(id, &project.comments).await?;
        }
        Ok(())
    }

    /// Fetch one finalized project by id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: FinalizedProjectId) -> DomainResult<FinalizedProject> {
        self.load(id).await
    }

    /// All finalized projects of an event plus every user visible on them.
    ///
    /// Needs no caller: an unknown event yields an empty board, not an error.
    #[instrument(skip(self))]
    pub async fn list_by_event(&self, event_id: HackathonEventId) -> DomainResult<FinalizedBoard> {
        let projects = self.projects.list_by_event(event_id).await?;
        let ids = views::finalized_user_ids(&projects);
        let visible_users = self.users.get_many(&ids).await?;
        Ok(FinalizedBoard {
            projects,
            visible_users,
        })
    }
}
